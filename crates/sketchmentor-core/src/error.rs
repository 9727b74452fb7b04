//! Error types for the SketchMentor waitlist

use thiserror::Error;

/// Main error type for waitlist operations
#[derive(Error, Debug)]
pub enum WaitlistError {
    /// The visitor closed the sign-in popup before choosing an account
    #[error("Sign-in cancelled")]
    AuthCancelled,

    /// The identity provider failed for any reason other than cancellation
    #[error("Sign-in failed: {0}")]
    AuthFailed(String),

    /// A submit was attempted without an authenticated identity
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Local key-value storage could not be read or written
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Stored ledger document is not a JSON list of strings
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The confirmation step after the ledger write failed
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaitlistError {
    /// Whether this error came from the local storage boundary.
    ///
    /// Storage errors degrade to "not registered" and never block the visitor.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            WaitlistError::StorageUnavailable(_)
                | WaitlistError::Database(_)
                | WaitlistError::Transaction(_)
                | WaitlistError::Table(_)
                | WaitlistError::StorageOp(_)
                | WaitlistError::Commit(_)
                | WaitlistError::Serialization(_)
                | WaitlistError::Io(_)
        )
    }

    /// Whether this error is an identity provider outcome.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            WaitlistError::AuthCancelled | WaitlistError::AuthFailed(_)
        )
    }
}

/// Result type alias using WaitlistError
pub type WaitlistResult<T> = Result<T, WaitlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WaitlistError::AuthFailed("popup blocked".to_string());
        assert_eq!(format!("{}", err), "Sign-in failed: popup blocked");
        assert_eq!(format!("{}", WaitlistError::AuthCancelled), "Sign-in cancelled");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: WaitlistError = io_err.into();
        assert!(matches!(err, WaitlistError::Io(_)));
        assert!(err.is_storage());
    }

    #[test]
    fn test_error_classification() {
        assert!(WaitlistError::AuthCancelled.is_auth());
        assert!(!WaitlistError::AuthCancelled.is_storage());
        assert!(WaitlistError::Serialization("bad".into()).is_storage());
        assert!(!WaitlistError::NotAuthenticated.is_auth());
    }
}
