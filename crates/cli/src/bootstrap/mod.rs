mod config;
mod logging;
mod signals;

pub use config::load_config;
pub use logging::init_logging;
pub use signals::shutdown_on_signal;
