use super::codec::{MessageBuilder, QueryParser};
use loopy_dns_application::use_cases::PlanResponseUseCase;
use loopy_dns_domain::{DnsRequest, QueryError};
use std::net::IpAddr;
use std::sync::Arc;

/// Raw query bytes in, raw response bytes out.
///
/// Parsing and serialization are synchronous and CPU-bound; the only state
/// is the planner's immutable zone, so one resolver is shared by every task.
pub struct QueryResolver {
    planner: Arc<PlanResponseUseCase>,
}

impl QueryResolver {
    pub fn new(planner: Arc<PlanResponseUseCase>) -> Self {
        Self { planner }
    }

    pub fn resolve(&self, query_bytes: &[u8], client_ip: IpAddr) -> Result<Vec<u8>, QueryError> {
        let query = QueryParser::parse(query_bytes)?;

        let request = DnsRequest {
            name: query.name(),
            record_type: query.record_type(),
            client_ip,
        };
        let plan = self.planner.execute(&request);

        MessageBuilder::build_response(&query, plan)
    }
}
