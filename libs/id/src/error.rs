//! Error types for ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing, validating, or comparing IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("{kind} ID cannot be empty")]
    Empty { kind: &'static str },

    /// The ID string is not a canonical encoding of the ID format.
    #[error("invalid {kind} ID '{value}': {reason}")]
    InvalidId {
        kind: &'static str,
        value: String,
        reason: String,
    },

    /// A tagged ID is missing the underscore separator.
    #[error("tagged ID missing underscore separator: '{value}'")]
    MissingSeparator { value: String },

    /// A tagged ID has an empty or malformed kind tag.
    #[error("invalid ID kind tag '{kind}'")]
    InvalidKind { kind: String },

    /// Two IDs were required to be equal but are not.
    #[error("{kind} IDs must be equal: '{left}' != '{right}'")]
    NotEqual {
        kind: &'static str,
        left: String,
        right: String,
    },

    /// Two IDs were required to differ but are equal.
    #[error("{kind} IDs must not be equal: '{id}'")]
    Equal { kind: &'static str, id: String },
}

impl IdError {
    /// Returns true if this error means the input did not encode a valid ID.
    pub fn is_invalid(&self) -> bool {
        matches!(
            self,
            IdError::Empty { .. }
                | IdError::InvalidId { .. }
                | IdError::MissingSeparator { .. }
                | IdError::InvalidKind { .. }
        )
    }

    /// Returns true if this error came from a guarded equality check.
    pub fn is_guard_violation(&self) -> bool {
        matches!(self, IdError::NotEqual { .. } | IdError::Equal { .. })
    }
}
