use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// `host:port` to receive queries on. An empty host (`:53`) binds every
    /// interface, IPv6 and IPv4 alike.
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    /// Fully-qualified zone to answer for. Empty answers every name.
    #[serde(default)]
    pub zone: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            zone: String::new(),
        }
    }
}

fn default_listen_address() -> String {
    ":53".to_string()
}

/// Addresses to try binding, in order.
///
/// The host-less `:port` form expands to the dual-stack wildcard first and
/// the IPv4 wildcard second, for hosts without IPv6.
pub fn bind_addresses(addr: &str) -> Vec<String> {
    let addr = addr.trim();
    match addr.strip_prefix(':') {
        Some(port) => vec![format!("[::]:{}", port), format!("0.0.0.0:{}", port)],
        None => vec![addr.to_string()],
    }
}
