//! Observability subsystem for seekdex
//!
//! Structured JSON logging with typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on lookups
//! 3. No background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use seekdex::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Warn);
//! log_event_with_fields(Event::IndexLoaded, &[("entries", "3")]);
//! ```

mod events;
mod logger;

use std::io::{self, Write};

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    log_event_to(event, fields, &mut io::stderr());
}

fn log_event_to<W: Write>(event: Event, fields: &[(&str, &str)], writer: &mut W) {
    Logger::log_to(event.severity(), event.as_str(), fields, writer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_logged_at_its_severity() {
        // ERROR is never filtered, whatever level other tests set
        let mut buffer = Vec::new();
        log_event_to(Event::RecordReadFailed, &[("record_id", "7")], &mut buffer);

        let output = String::from_utf8(buffer).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "RECORD_READ_FAILED");
        assert_eq!(parsed["severity"], "ERROR");
        assert_eq!(parsed["record_id"], "7");
    }
}
