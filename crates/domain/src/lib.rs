//! Loopy DNS Domain Layer
pub mod config;
pub mod dns_record;
pub mod dns_request;
pub mod errors;
pub mod query_name;
pub mod response_plan;
pub mod server_event;
pub mod zone;

pub use config::{CliOverrides, Config};
pub use dns_record::{RecordType, ResponseCode};
pub use dns_request::DnsRequest;
pub use errors::{DomainError, QueryError, TransportError};
pub use query_name::QueryName;
pub use response_plan::{RejectionReason, ResponsePlan, ANSWER_TTL};
pub use server_event::ServerEvent;
pub use zone::{is_domain_in_zone, Zone};
