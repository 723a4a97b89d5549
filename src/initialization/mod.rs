//! Application initialization.
//!
//! Logger and DNS resolver construction, done once at startup.

mod logger;
mod resolver;

pub use logger::init_logger_with;
pub use resolver::init_resolver;
