use super::{QueryName, RecordType};
use std::net::IpAddr;

/// The single question of an inbound query together with who asked it.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub name: QueryName,
    pub record_type: RecordType,
    pub client_ip: IpAddr,
}
