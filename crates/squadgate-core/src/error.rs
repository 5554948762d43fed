//! Unified error handling for squadgate core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.
//!
//! Note that an illegal squad is not an error at this level either: checks
//! return a `Verdict`. Only `TeamService::save` turns a failing verdict into
//! [`ApplicationError::SquadRejected`], because persistence must not proceed.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for squadgate core operations.
#[derive(Debug, Error, Clone)]
pub enum SquadgateError {
    /// Errors from the domain layer (values that could not be built).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl SquadgateError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::StoreLockError)
                | Self::Application(ApplicationError::RosterUnavailable { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    /// The squad was checked and found illegal.
    Rejected,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type SquadgateResult<T> = Result<T, SquadgateError>;
