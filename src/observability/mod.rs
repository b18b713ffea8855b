//! Observability for rosterdb
//!
//! Structured JSON logging of lifecycle and store events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on the store
//! 3. No background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use rosterdb::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_threshold(Severity::Info);
//! log_event_with_fields(Event::RecordInserted, &[("id", "4")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::RecordDeleted, &[("id", "3")]);
    }
}
