pub mod message_builder;
pub mod query_parser;
pub mod record_type_map;

pub use message_builder::MessageBuilder;
pub use query_parser::{InboundQuery, QueryParser};
pub use record_type_map::RecordTypeMapper;
