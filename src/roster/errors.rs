//! Record store error types
//!
//! Error codes:
//! - ROSTER_NOT_FOUND
//! - ROSTER_EMPTY
//! - ROSTER_DUPLICATE_ID
//!
//! The console layer reports these and carries on.

use thiserror::Error;

use super::record::TeacherId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested id
    #[error("Teacher with id={0} couldn't be found.")]
    NotFound(TeacherId),

    /// Delete attempted on a store with zero records
    #[error("List is Empty. Can't delete from Empty List.")]
    Empty,

    /// Checked insert refused an id already in use
    #[error("Teacher with id={0} already exists.")]
    DuplicateId(TeacherId),
}

impl StoreError {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "ROSTER_NOT_FOUND",
            StoreError::Empty => "ROSTER_EMPTY",
            StoreError::DuplicateId(_) => "ROSTER_DUPLICATE_ID",
        }
    }

    /// The id involved, if any
    pub fn id(&self) -> Option<TeacherId> {
        match self {
            StoreError::NotFound(id) | StoreError::DuplicateId(id) => Some(*id),
            StoreError::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StoreError::NotFound(1).code(), "ROSTER_NOT_FOUND");
        assert_eq!(StoreError::Empty.code(), "ROSTER_EMPTY");
        assert_eq!(StoreError::DuplicateId(1).code(), "ROSTER_DUPLICATE_ID");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoreError::NotFound(9).to_string(),
            "Teacher with id=9 couldn't be found."
        );
        assert_eq!(
            StoreError::Empty.to_string(),
            "List is Empty. Can't delete from Empty List."
        );
    }

    #[test]
    fn test_error_id() {
        assert_eq!(StoreError::NotFound(4).id(), Some(4));
        assert_eq!(StoreError::Empty.id(), None);
    }
}
