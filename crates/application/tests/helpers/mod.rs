#![allow(dead_code)]

mod mock_event_sink;

pub use mock_event_sink::MockEventSink;

use loopy_dns_domain::QueryName;

/// Builds a name from unescaped dotted text, one label per `.`-separated part.
pub fn query_name(dotted: &str) -> QueryName {
    let labels: Vec<&str> = dotted
        .trim_end_matches('.')
        .split('.')
        .filter(|label| !label.is_empty())
        .collect();
    QueryName::new(labels, dotted)
}
