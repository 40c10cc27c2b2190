//! Availability-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::StorageError;

/// Errors surfaced by availability handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    /// The committed-set store could not be read or written.
    ///
    /// Draft and committed state are left as they were before the call.
    StorageUnavailable(String),
}

impl AvailabilityError {
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        AvailabilityError::StorageUnavailable(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AvailabilityError::StorageUnavailable(_) => ErrorCode::StorageUnavailable,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AvailabilityError::StorageUnavailable(msg) => format!("Storage unavailable: {}", msg),
        }
    }
}

impl std::fmt::Display for AvailabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AvailabilityError {}

impl From<StorageError> for AvailabilityError {
    fn from(err: StorageError) -> Self {
        AvailabilityError::StorageUnavailable(err.to_string())
    }
}

impl From<AvailabilityError> for DomainError {
    fn from(err: AvailabilityError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_error_maps_to_storage_unavailable() {
        let err: AvailabilityError = StorageError::Unavailable("disk full".to_string()).into();
        assert_eq!(err.code(), ErrorCode::StorageUnavailable);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn corrupt_record_is_also_storage_unavailable() {
        let err: AvailabilityError = StorageError::CorruptRecord("bad date".to_string()).into();
        assert!(matches!(err, AvailabilityError::StorageUnavailable(_)));
    }

    #[test]
    fn converts_to_domain_error() {
        let err: DomainError = AvailabilityError::storage_unavailable("locked").into();
        assert_eq!(err.code, ErrorCode::StorageUnavailable);
        assert_eq!(err.message, "Storage unavailable: locked");
    }
}
