//! Error and status types for stack operations
//!
//! Uses thiserror for the error enum. [`StackStatus`] is the flat status-code
//! view of a [`StackResult`] for callers that report outcomes numerically.

use core::fmt;

use std::collections::TryReserveError;

use thiserror::Error;

#[cfg(feature = "logging")]
use tracing::error;

// ============================================================================
// Main Error Type
// ============================================================================

/// Stack operation errors
///
/// Every failure leaves the stack exactly as it was before the call.
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("Stack is full (capacity: {capacity})")]
    Full { capacity: usize },

    #[error("Stack is empty")]
    Empty,

    #[error("Invalid stack handle: {operation} on a destroyed stack")]
    InvalidHandle { operation: &'static str },

    #[error("Stack storage allocation failed for {capacity} slots: {reason}")]
    AllocationFailed { capacity: usize, reason: String },
}

impl StackError {
    /// Create a full-stack error
    #[must_use]
    pub fn full(capacity: usize) -> Self {
        Self::Full { capacity }
    }

    /// Create an empty-stack error
    #[must_use]
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Create an invalid handle error for the named operation
    #[must_use]
    pub fn invalid_handle(operation: &'static str) -> Self {
        Self::InvalidHandle { operation }
    }

    /// Create an allocation failed error from a failed reservation
    pub fn allocation_failed(capacity: usize, source: &TryReserveError) -> Self {
        #[cfg(feature = "logging")]
        error!(capacity, reason = %source, "stack storage allocation failed");

        Self::AllocationFailed {
            capacity,
            reason: source.to_string(),
        }
    }

    /// Check if error is retryable
    ///
    /// `Full` and `Empty` depend only on the current depth, so the same call
    /// can succeed after the opposite operation.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Full { .. } | Self::Empty)
    }

    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "STACK:FULL",
            Self::Empty => "STACK:EMPTY",
            Self::InvalidHandle { .. } => "STACK:HANDLE:INVALID",
            Self::AllocationFailed { .. } => "STACK:ALLOC:FAILED",
        }
    }

    /// Status code corresponding to this error
    #[must_use]
    pub fn status(&self) -> StackStatus {
        match self {
            Self::Full { .. } => StackStatus::Full,
            Self::Empty => StackStatus::Empty,
            Self::InvalidHandle { .. } => StackStatus::InvalidHandle,
            Self::AllocationFailed { .. } => StackStatus::AllocationError,
        }
    }
}

// ============================================================================
// Status Codes
// ============================================================================

/// Flat outcome code of a stack operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StackStatus {
    /// Operation succeeded
    Ok = 0,
    /// Push rejected: stack at capacity
    Full = 1,
    /// Pop or peek rejected: stack has no elements
    Empty = 2,
    /// Operation on a destroyed stack
    InvalidHandle = 3,
    /// Backing storage could not be obtained at creation
    AllocationError = 4,
}

impl StackStatus {
    /// Status of an operation result
    pub fn of<T>(result: &StackResult<T>) -> Self {
        match result {
            Ok(_) => Self::Ok,
            Err(err) => err.status(),
        }
    }

    /// Whether this status reports success
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }

    /// Stable numeric code
    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Stable status name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Full => "full",
            Self::Empty => "empty",
            Self::InvalidHandle => "invalid_handle",
            Self::AllocationError => "allocation_error",
        }
    }
}

impl fmt::Display for StackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&StackError> for StackStatus {
    fn from(err: &StackError) -> Self {
        err.status()
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result type for stack operations
pub type StackResult<T> = Result<T, StackError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve_error() -> TryReserveError {
        Vec::<u64>::new()
            .try_reserve_exact(usize::MAX)
            .expect_err("reserving usize::MAX u64s must overflow")
    }

    #[test]
    fn test_error_display() {
        assert!(StackError::full(3).to_string().contains('3'));
        assert_eq!(StackError::empty().to_string(), "Stack is empty");
        assert!(StackError::invalid_handle("push").to_string().contains("push"));
    }

    #[test]
    fn test_allocation_failed_keeps_reason() {
        let error = StackError::allocation_failed(usize::MAX, &reserve_error());
        match &error {
            StackError::AllocationFailed { capacity, reason } => {
                assert_eq!(*capacity, usize::MAX);
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(error.status(), StackStatus::AllocationError);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(StackError::full(1).code(), "STACK:FULL");
        assert_eq!(StackError::empty().code(), "STACK:EMPTY");
        assert_eq!(StackError::invalid_handle("pop").code(), "STACK:HANDLE:INVALID");
        assert_eq!(
            StackError::allocation_failed(8, &reserve_error()).code(),
            "STACK:ALLOC:FAILED"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(StackError::full(1).is_retryable());
        assert!(StackError::empty().is_retryable());
        assert!(!StackError::invalid_handle("peek").is_retryable());
    }

    #[test]
    fn test_status_of_result() {
        let ok: StackResult<u8> = Ok(1);
        let full: StackResult<u8> = Err(StackError::full(0));

        assert_eq!(StackStatus::of(&ok), StackStatus::Ok);
        assert_eq!(StackStatus::of(&full), StackStatus::Full);
        assert!(StackStatus::of(&ok).is_ok());
        assert!(!StackStatus::of(&full).is_ok());
    }

    #[test]
    fn test_status_codes_are_stable() {
        assert_eq!(StackStatus::Ok.as_u8(), 0);
        assert_eq!(StackStatus::Full.as_u8(), 1);
        assert_eq!(StackStatus::Empty.as_u8(), 2);
        assert_eq!(StackStatus::InvalidHandle.as_u8(), 3);
        assert_eq!(StackStatus::AllocationError.as_u8(), 4);
        assert_eq!(StackStatus::InvalidHandle.to_string(), "invalid_handle");
    }
}
