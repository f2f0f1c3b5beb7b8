use loopy_dns_domain::ServerEvent;

/// Receives everything the server wants to report.
///
/// Implementations must not block: `emit` is called inline on the receive
/// loop and on every per-query task.
pub trait ServerEventSink: Send + Sync {
    fn emit(&self, event: ServerEvent);
}
