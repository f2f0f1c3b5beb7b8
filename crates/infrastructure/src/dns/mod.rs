pub mod codec;
pub mod events;
pub mod listener;
pub mod resolver;

pub use codec::{InboundQuery, MessageBuilder, QueryParser, RecordTypeMapper};
pub use events::{QueryEventEmitter, TracingEventSink};
pub use listener::{DnsListener, MAX_UDP_MESSAGE_SIZE};
pub use resolver::QueryResolver;
