pub mod emitter;
pub mod tracing_sink;

pub use emitter::QueryEventEmitter;
pub use tracing_sink::TracingEventSink;
