//! Observable events
//!
//! Events are explicit and typed. Each maps to one log line.

use std::fmt;

use super::Severity;

/// Observable events in a console session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Menu session started
    SessionStart,
    /// Menu session ended
    SessionEnd,
    /// Configuration loaded
    ConfigLoaded,

    // Store mutations
    /// Record added to the store
    RecordInserted,
    /// Record age/name replaced
    RecordUpdated,
    /// Record removed from the store
    RecordDeleted,

    // Recoverable failures
    /// Lookup by id found nothing
    RecordNotFound,
    /// Delete attempted on an empty store
    DeleteFromEmpty,
    /// User input could not be used and was asked for again
    InputRejected,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SessionStart => "SESSION_START",
            Event::SessionEnd => "SESSION_END",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::RecordInserted => "RECORD_INSERTED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RecordNotFound => "RECORD_NOT_FOUND",
            Event::DeleteFromEmpty => "DELETE_FROM_EMPTY",
            Event::InputRejected => "INPUT_REJECTED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordNotFound | Event::DeleteFromEmpty => Severity::Warn,
            Event::InputRejected => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_snake() {
        let events = [
            Event::SessionStart,
            Event::SessionEnd,
            Event::ConfigLoaded,
            Event::RecordInserted,
            Event::RecordUpdated,
            Event::RecordDeleted,
            Event::RecordNotFound,
            Event::DeleteFromEmpty,
            Event::InputRejected,
        ];
        for e in events {
            assert!(e.as_str().chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_failures_are_warnings() {
        assert_eq!(Event::RecordNotFound.severity(), Severity::Warn);
        assert_eq!(Event::DeleteFromEmpty.severity(), Severity::Warn);
        assert_eq!(Event::RecordInserted.severity(), Severity::Info);
    }
}
