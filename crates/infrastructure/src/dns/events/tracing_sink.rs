use loopy_dns_application::ports::ServerEventSink;
use loopy_dns_domain::{RecordType, ServerEvent};
use tracing::{error, info};

/// Default sink: every event becomes a structured `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl ServerEventSink for TracingEventSink {
    fn emit(&self, event: ServerEvent) {
        match event {
            ServerEvent::Listening { addr } => {
                info!(addr = %addr, "Listening for DNS requests");
            }
            ServerEvent::QueryAnswered {
                domain,
                record_type,
                client_ip,
            } => match record_type {
                RecordType::A => info!(name = %domain, client = %client_ip, "Received A query"),
                RecordType::AAAA => {
                    info!(name = %domain, client = %client_ip, "Received AAAA query")
                }
                other => info!(
                    name = %domain,
                    record_type = %other,
                    client = %client_ip,
                    "Received query"
                ),
            },
            ServerEvent::QueryRejected {
                domain,
                record_type,
                client_ip,
                reason,
            } => {
                info!(
                    name = %domain,
                    record_type = %record_type,
                    client = %client_ip,
                    reason = %reason,
                    "Rejected DNS query"
                );
            }
            ServerEvent::ReadFailed { error } => {
                error!(error = %error, "Failed to read from UDP connection");
            }
            ServerEvent::QueryFailed { peer, error } => {
                error!(peer = %peer, error = %error, "Failed to handle DNS query");
            }
            ServerEvent::WriteFailed { error } => {
                error!(error = %error, "Failed to write DNS response");
            }
            ServerEvent::Stopped => {
                info!("DNS listener stopped");
            }
        }
    }
}
