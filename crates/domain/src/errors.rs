use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Zone must end with a period: {0}")]
    InvalidZone(String),
}

/// Failures while turning a query datagram into a response datagram.
///
/// Neither variant is ever answered on the wire; the datagram is dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Malformed DNS query: {0}")]
    Malformed(String),

    #[error("Failed to build DNS response: {0}")]
    Build(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Failed to listen on {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Failed to read from UDP socket: {0}")]
    Read(String),

    #[error("UDP socket closed")]
    Closed,

    #[error("Failed to write DNS response to {peer}: {reason}")]
    Write { peer: SocketAddr, reason: String },
}
