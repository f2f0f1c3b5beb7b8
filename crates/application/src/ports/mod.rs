mod server_event_sink;

pub use server_event_sink::ServerEventSink;

// Re-export for convenience
pub use loopy_dns_domain::ServerEvent;
