//! Shared infrastructure for the identifier validation crates.
//!
//! - [`logging`]: `tracing-subscriber` setup for hosts embedding the engine,
//!   and redaction of validated values in log output.

pub mod logging;

pub use logging::{
    LogConfig, LogFormat, LoggingError, REDACTED_VALUE, init_logging, init_logging_with_writer,
    log_data_enabled, redact_value, set_log_data_enabled,
};
