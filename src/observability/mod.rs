//! Observability for the gateway
//!
//! Structured JSON logging only; metrics and tracing layers are the
//! surrounding infrastructure's concern.

mod logger;

pub use logger::{LogLevel, Logger};
