//! Error types for ID list construction, transforms, and guards.

use idkit_id::IdError;
use thiserror::Error;

/// Errors that can occur when building or checking an ID list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdListError {
    /// The input contains value-equal duplicates.
    #[error("{kind} ID list contains duplicate IDs: {}", .duplicates.join(", "))]
    DuplicateIds {
        kind: &'static str,
        duplicates: Vec<String>,
    },

    /// The input contains an ID of a kind the list does not handle.
    #[error("ID list of kind '{expected}' cannot hold ID of kind '{actual}'")]
    KindNotHandled {
        expected: &'static str,
        actual: String,
    },

    /// The ID to add is already in the list.
    #[error("{kind} ID '{id}' is already in the list")]
    AlreadyInList { kind: &'static str, id: String },

    /// The list was required to contain an ID but does not.
    #[error("{kind} ID list does not contain '{id}'")]
    DoesNotContainId { kind: &'static str, id: String },

    /// The list was required not to contain an ID but does.
    #[error("{kind} ID list contains '{id}'")]
    DoesContainId { kind: &'static str, id: String },

    /// The list was required to be empty.
    #[error("{kind} ID list must be empty but holds {count} IDs")]
    NotEmpty { kind: &'static str, count: usize },

    /// Two lists were required to hold the same IDs.
    #[error("{kind} ID lists must be equal")]
    NotEqual { kind: &'static str },

    /// A positional lookup was out of range.
    #[error("position {position} is out of range for ID list of {count} IDs")]
    PositionOutOfRange { position: usize, count: usize },

    /// An input string was not a valid ID.
    #[error(transparent)]
    InvalidId(#[from] IdError),
}

impl IdListError {
    /// Returns true if this error rejected construction input.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            IdListError::DuplicateIds { .. }
                | IdListError::KindNotHandled { .. }
                | IdListError::InvalidId(_)
        )
    }

    /// Returns true if this error came from a `must_*` guard.
    pub fn is_guard_violation(&self) -> bool {
        matches!(
            self,
            IdListError::DoesNotContainId { .. }
                | IdListError::DoesContainId { .. }
                | IdListError::NotEmpty { .. }
                | IdListError::NotEqual { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_message_lists_values() {
        let err = IdListError::DuplicateIds {
            kind: "user",
            duplicates: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.to_string(), "user ID list contains duplicate IDs: a, b");
        assert!(err.is_construction_error());
        assert!(!err.is_guard_violation());
    }

    #[test]
    fn test_invalid_id_is_transparent() {
        let inner = IdError::Empty { kind: "user" };
        let err = IdListError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_guard_classification() {
        assert!(IdListError::NotEqual { kind: "user" }.is_guard_violation());
        assert!(IdListError::NotEmpty {
            kind: "user",
            count: 2
        }
        .is_guard_violation());
        assert!(!IdListError::PositionOutOfRange {
            position: 3,
            count: 1
        }
        .is_guard_violation());
    }
}
