//! UDP listener (RFC 1035 §4.2.1)
//!
//! One task owns the receive loop; every datagram is handled on its own
//! spawned task so a slow query never holds up the next read. The socket is
//! shared through an `Arc` and written to concurrently; each `send_to` is a
//! single datagram, so writers never interleave.

use super::resolver::QueryResolver;
use loopy_dns_application::ports::ServerEventSink;
use loopy_dns_domain::config::bind_addresses;
use loopy_dns_domain::{ServerEvent, TransportError};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{lookup_host, UdpSocket};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Largest datagram read per query (no EDNS0).
pub const MAX_UDP_MESSAGE_SIZE: usize = 512;

pub struct DnsListener {
    socket: Arc<UdpSocket>,
    resolver: Arc<QueryResolver>,
    events: Arc<dyn ServerEventSink>,
}

impl DnsListener {
    /// Binds the UDP socket. `listen_address` may use the host-less `:port`
    /// form, which listens on IPv6 and IPv4 together where the host allows
    /// it and on IPv4 alone otherwise.
    pub async fn bind(
        listen_address: &str,
        resolver: Arc<QueryResolver>,
        events: Arc<dyn ServerEventSink>,
    ) -> Result<Self, TransportError> {
        let mut last_error = None;

        for candidate in bind_addresses(listen_address) {
            let addrs = match lookup_host(candidate.as_str()).await {
                Ok(addrs) => addrs,
                Err(e) => {
                    last_error = Some(e.to_string());
                    continue;
                }
            };

            for addr in addrs {
                match create_udp_socket(addr) {
                    Ok(socket) => {
                        return Ok(Self {
                            socket: Arc::new(socket),
                            resolver,
                            events,
                        })
                    }
                    Err(e) => {
                        debug!(addr = %addr, error = %e, "Bind attempt failed");
                        last_error = Some(e.to_string());
                    }
                }
            }
        }

        Err(TransportError::Bind {
            addr: listen_address.to_string(),
            reason: last_error.unwrap_or_else(|| "address resolved to nothing".to_string()),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, TransportError> {
        self.socket
            .local_addr()
            .map_err(|e| TransportError::Read(e.to_string()))
    }

    /// Binds and serves until `shutdown` is cancelled.
    pub async fn start(
        listen_address: &str,
        resolver: Arc<QueryResolver>,
        events: Arc<dyn ServerEventSink>,
        shutdown: CancellationToken,
    ) -> Result<(), TransportError> {
        Self::bind(listen_address, resolver, events)
            .await?
            .serve(shutdown)
            .await
    }

    /// Runs the receive loop.
    ///
    /// Returns `Ok(())` once `shutdown` fires; read errors are reported and
    /// the loop keeps going. In-flight query tasks hold their own socket
    /// handle and are left to finish.
    pub async fn serve(self, shutdown: CancellationToken) -> Result<(), TransportError> {
        let addr = self.local_addr()?;
        self.events.emit(ServerEvent::Listening { addr });

        loop {
            let mut buf = [0u8; MAX_UDP_MESSAGE_SIZE];

            let received = tokio::select! {
                biased;
                _ = shutdown.cancelled() => Err(TransportError::Closed),
                result = self.socket.recv_from(&mut buf) => {
                    result.map_err(|e| TransportError::Read(e.to_string()))
                }
            };

            match received {
                Ok((len, peer)) => {
                    debug!(peer = %peer, bytes = len, "Datagram received");
                    self.dispatch(buf[..len].to_vec(), peer);
                }
                Err(TransportError::Closed) => {
                    self.events.emit(ServerEvent::Stopped);
                    return Ok(());
                }
                Err(error) => {
                    self.events.emit(ServerEvent::ReadFailed { error });
                }
            }
        }
    }

    fn dispatch(&self, query: Vec<u8>, peer: SocketAddr) {
        let socket = Arc::clone(&self.socket);
        let resolver = Arc::clone(&self.resolver);
        let events = Arc::clone(&self.events);

        tokio::spawn(async move {
            handle_query(&socket, &resolver, events.as_ref(), &query, peer).await;
        });
    }
}

fn create_udp_socket(addr: SocketAddr) -> std::io::Result<UdpSocket> {
    let socket = Socket::new(Domain::for_address(addr), Type::DGRAM, Some(Protocol::UDP))?;
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.bind(&addr.into())?;
    socket.set_nonblocking(true)?;
    UdpSocket::from_std(socket.into())
}

async fn handle_query(
    socket: &UdpSocket,
    resolver: &QueryResolver,
    events: &dyn ServerEventSink,
    query: &[u8],
    peer: SocketAddr,
) {
    let response = match resolver.resolve(query, peer.ip()) {
        Ok(response) => response,
        Err(error) => {
            events.emit(ServerEvent::QueryFailed { peer, error });
            return;
        }
    };

    if let Err(e) = socket.send_to(&response, peer).await {
        events.emit(ServerEvent::WriteFailed {
            error: TransportError::Write {
                peer,
                reason: e.to_string(),
            },
        });
    }
}
