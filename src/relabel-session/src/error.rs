//! Error types for rename sessions.
//!
//! Validation failures are values ([`crate::NameViolation`]), never errors;
//! the variants here cover misuse of the session API itself.

/// Result type alias for session operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Errors that can occur when driving a rename session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The addressed item is not part of this session.
    #[error("No item with identity '{0}' in this session")]
    UnknownIdentity(String),

    /// Two loaded records carried the same identity.
    #[error("Duplicate identity '{0}' in loaded records")]
    DuplicateIdentity(String),
}

impl SessionError {
    /// Creates a new `UnknownIdentity` error.
    pub fn unknown_identity(identity: impl Into<String>) -> Self {
        Self::UnknownIdentity(identity.into())
    }

    /// Creates a new `DuplicateIdentity` error.
    pub fn duplicate_identity(identity: impl Into<String>) -> Self {
        Self::DuplicateIdentity(identity.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SessionError::unknown_identity("IED9");
        assert!(err.to_string().contains("IED9"));

        let err = SessionError::duplicate_identity("IED1");
        assert!(err.to_string().contains("Duplicate"));
    }
}
