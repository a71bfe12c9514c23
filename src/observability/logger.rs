//! Structured JSON logger
//!
//! - One log line = one event, synchronous, unbuffered
//! - Deterministic output: keys are emitted in sorted order
//! - Explicit levels; Error goes to stderr
//!
//! Validation and classification themselves stay pure; only the gateway
//! decision points emit events.

use std::fmt;
use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Synchronous structured logger.
pub struct Logger;

impl Logger {
    /// Log an event with the given level and fields.
    pub fn log(level: LogLevel, event: &str, fields: &[(&str, &str)]) {
        let line = Self::render(level, event, fields);
        if level >= LogLevel::Error {
            let _ = writeln!(io::stderr(), "{}", line);
        } else {
            let _ = writeln!(io::stdout(), "{}", line);
        }
    }

    /// Renders one event as a single JSON object.
    ///
    /// `serde_json::Map` keeps keys sorted, so identical events render
    /// identically.
    fn render(level: LogLevel, event: &str, fields: &[(&str, &str)]) -> String {
        let mut record = Map::new();
        record.insert("event".into(), Value::String(event.into()));
        record.insert("level".into(), Value::String(level.as_str().into()));
        for (key, value) in fields {
            record.insert((*key).into(), Value::String((*value).into()));
        }
        serde_json::to_string(&Value::Object(record))
            .expect("log record serialization cannot fail")
    }

    /// Log at DEBUG level.
    pub fn debug(event: &str, fields: &[(&str, &str)]) {
        Self::log(LogLevel::Debug, event, fields);
    }

    /// Log at INFO level.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(LogLevel::Info, event, fields);
    }

    /// Log at WARN level.
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(LogLevel::Warn, event, fields);
    }

    /// Log at ERROR level.
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(LogLevel::Error, event, fields);
    }
}

/// Capture one rendered event for test assertions.
#[cfg(test)]
pub fn capture_log(level: LogLevel, event: &str, fields: &[(&str, &str)]) -> String {
    Logger::render(level, event, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_render_is_valid_json() {
        let line = capture_log(LogLevel::Info, "REQUEST_VALIDATED", &[("op", "login")]);
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "REQUEST_VALIDATED");
        assert_eq!(parsed["level"], "INFO");
        assert_eq!(parsed["op"], "login");
    }

    #[test]
    fn test_render_is_deterministic() {
        let fields = [("zebra", "1"), ("alpha", "2")];
        let a = capture_log(LogLevel::Warn, "REQUEST_REJECTED", &fields);
        let b = capture_log(LogLevel::Warn, "REQUEST_REJECTED", &fields);
        assert_eq!(a, b);
        // sorted keys: alpha before zebra regardless of argument order
        assert!(a.find("alpha").unwrap() < a.find("zebra").unwrap());
    }

    #[test]
    fn test_render_escapes_values() {
        let line = capture_log(LogLevel::Error, "FAILURE_CLASSIFIED", &[("msg", "a\"b\nc")]);
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["msg"], "a\"b\nc");
    }
}
