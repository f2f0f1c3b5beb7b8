use crate::ports::ServerEventSink;
use loopy_dns_domain::{DnsRequest, RecordType, ResponsePlan, ServerEvent, Zone};
use std::sync::Arc;
use tracing::debug;

/// Decides how a single question is answered: zone filter first, then type
/// dispatch. Holds no mutable state and is shared by every query task.
pub struct PlanResponseUseCase {
    zone: Option<Zone>,
    events: Arc<dyn ServerEventSink>,
}

impl PlanResponseUseCase {
    pub fn new(zone: Option<Zone>, events: Arc<dyn ServerEventSink>) -> Self {
        Self { zone, events }
    }

    pub fn execute(&self, request: &DnsRequest) -> ResponsePlan {
        let plan = self.plan(request);

        let event = match plan.rejection() {
            Some(reason) => ServerEvent::QueryRejected {
                domain: Arc::clone(request.name.presentation()),
                record_type: request.record_type,
                client_ip: request.client_ip,
                reason,
            },
            None => ServerEvent::QueryAnswered {
                domain: Arc::clone(request.name.presentation()),
                record_type: request.record_type,
                client_ip: request.client_ip,
            },
        };
        self.events.emit(event);

        debug!(
            domain = %request.name,
            plan = ?plan,
            rcode = %plan.response_code(),
            "Response planned"
        );
        plan
    }

    fn plan(&self, request: &DnsRequest) -> ResponsePlan {
        if let Some(zone) = &self.zone {
            if !zone.contains(&request.name) {
                return ResponsePlan::RejectNameError;
            }
        }

        match request.record_type {
            RecordType::A => ResponsePlan::AnswerWithA,
            RecordType::AAAA => ResponsePlan::AnswerWithAAAA,
            _ => ResponsePlan::RejectNotImplemented,
        }
    }
}
