use crate::{DomainError, QueryName};
use std::fmt;
use std::sync::Arc;

/// A fully-qualified suffix the server is authoritative for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    name: Arc<str>,
    labels: Arc<[Box<[u8]>]>,
}

impl Zone {
    /// Parses a configured zone. The name must be fully qualified, i.e. end
    /// with the root separator (`test.zone.`).
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidDomainName("empty zone".to_string()));
        }
        if !name.ends_with('.') {
            return Err(DomainError::InvalidZone(name.to_string()));
        }
        if name.contains('\\') {
            return Err(DomainError::InvalidDomainName(format!(
                "zone '{}' uses escapes, which are not supported",
                name
            )));
        }

        let labels = presentation_labels(name);
        if labels.iter().any(|label| label.is_empty()) {
            return Err(DomainError::InvalidDomainName(format!(
                "zone '{}' contains an empty label",
                name
            )));
        }

        Ok(Self {
            name: Arc::from(name),
            labels: labels.into_iter().map(|l| Box::from(l.as_bytes())).collect(),
        })
    }

    /// An empty string means "unrestricted" and yields `None`.
    pub fn from_config(zone: &str) -> Result<Option<Self>, DomainError> {
        if zone.trim().is_empty() {
            return Ok(None);
        }
        Self::new(zone).map(Some)
    }

    pub fn contains(&self, name: &QueryName) -> bool {
        is_domain_in_zone(name.labels(), &self.labels)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Right-aligned label match of `name` against `zone`.
///
/// Labels are compared as raw bytes, ASCII case-insensitively. A name with
/// fewer labels than the zone is never in zone; the root zone (no labels)
/// contains everything.
pub fn is_domain_in_zone<N, Z>(name: &[N], zone: &[Z]) -> bool
where
    N: AsRef<[u8]>,
    Z: AsRef<[u8]>,
{
    if name.len() < zone.len() {
        return false;
    }

    name.iter()
        .rev()
        .zip(zone.iter().rev())
        .all(|(n, z)| n.as_ref().eq_ignore_ascii_case(z.as_ref()))
}

fn presentation_labels(name: &str) -> Vec<&str> {
    let relative = name.strip_suffix('.').unwrap_or(name);
    if relative.is_empty() {
        return Vec::new();
    }
    relative.split('.').collect()
}
