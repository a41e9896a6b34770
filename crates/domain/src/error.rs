//! Unified error types for the domain layer
//!
//! Rule and service functions are infallible for not-found and no-op
//! conditions (they hand back an equivalent copy). Errors are reserved for
//! validation rejections and catalog registration conflicts.

use thiserror::Error;

/// Message surfaced to the player when a non-scroll is put into a scroll slot.
pub const SCROLL_SLOT_MISMATCH: &str = "Scroll slots only accept scrolls of the correct type.";

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed; the message is shown to the user verbatim
    #[error("{0}")]
    Validation(String),

    /// Business rule violation
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Slot index does not address an inventory slot
    #[error("Slot {index} is out of range for an inventory of {len} slots")]
    SlotOutOfRange { index: usize, len: usize },
}

impl DomainError {
    /// Creates a validation error for a rejected edit.
    ///
    /// The caller surfaces the message as-is and does not persist anything.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Create a slot out of range error
    pub fn slot_out_of_range(index: usize, len: usize) -> Self {
        Self::SlotOutOfRange { index, len }
    }

    /// Rejection for a non-matching item placed into a spellcaster's scroll slot.
    pub fn scroll_slot_mismatch() -> Self {
        Self::Validation(SCROLL_SLOT_MISMATCH.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_displays_message_verbatim() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "name cannot be empty");
    }

    #[test]
    fn test_scroll_slot_mismatch_message() {
        let err = DomainError::scroll_slot_mismatch();
        assert_eq!(err.to_string(), SCROLL_SLOT_MISMATCH);
    }

    #[test]
    fn test_constraint_error() {
        let err = DomainError::constraint("feat already registered");
        assert_eq!(err.to_string(), "Constraint violation: feat already registered");
    }

    #[test]
    fn test_slot_out_of_range_error() {
        let err = DomainError::slot_out_of_range(7, 5);
        assert_eq!(
            err.to_string(),
            "Slot 7 is out of range for an inventory of 5 slots"
        );
    }
}
