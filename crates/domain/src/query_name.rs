use std::fmt;
use std::sync::Arc;

/// A question name as decoded off the wire.
///
/// Zone matching works on `labels`; `presentation` is the escaped text form
/// and is only used for logging. A label may itself contain `.` bytes, so the
/// presentation form must never be split to recover labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryName {
    labels: Arc<[Box<[u8]>]>,
    presentation: Arc<str>,
}

impl QueryName {
    pub fn new<I, L>(labels: I, presentation: impl Into<Arc<str>>) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<[u8]>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|label| Box::from(label.as_ref()))
                .collect(),
            presentation: presentation.into(),
        }
    }

    /// Labels from leftmost to rightmost, root excluded.
    pub fn labels(&self) -> &[Box<[u8]>] {
        &self.labels
    }

    pub fn presentation(&self) -> &Arc<str> {
        &self.presentation
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.presentation)
    }
}
