use crate::{QueryError, RecordType, RejectionReason, TransportError};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Observable things the server does, handed to an event sink instead of
/// being logged in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    Listening {
        addr: SocketAddr,
    },

    QueryAnswered {
        domain: Arc<str>,
        record_type: RecordType,
        client_ip: IpAddr,
    },

    QueryRejected {
        domain: Arc<str>,
        record_type: RecordType,
        client_ip: IpAddr,
        reason: RejectionReason,
    },

    ReadFailed {
        error: TransportError,
    },

    QueryFailed {
        peer: SocketAddr,
        error: QueryError,
    },

    WriteFailed {
        error: TransportError,
    },

    Stopped,
}
