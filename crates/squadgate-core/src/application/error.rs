//! Application layer errors.
//!
//! These errors represent failures in orchestration, not squad legality.
//! Legality is reported as a `Verdict` from `crate::domain`.

use thiserror::Error;

use crate::domain::{PlayerId, SquadId, Violation};
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The roster has no player with this id.
    #[error("Player not found: {player}")]
    PlayerNotFound { player: PlayerId },

    /// The roster source could not be read.
    #[error("Roster unavailable: {reason}")]
    RosterUnavailable { reason: String },

    /// A squad description could not be read or parsed.
    #[error("Invalid squad file {path}: {reason}")]
    InvalidSquadFile { path: String, reason: String },

    /// No saved team with this id.
    #[error("Team not found: {id}")]
    TeamNotFound { id: SquadId },

    /// The squad failed the team check and was not saved.
    #[error("Squad rejected with {} problem(s)", violations.len())]
    SquadRejected { violations: Vec<Violation> },

    /// A draft operation named a player who is not in the squad.
    #[error("Player {player} is not in the squad")]
    NotInSquad { player: PlayerId },

    /// Store access failed (lock poisoned).
    #[error("Store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PlayerNotFound { player } => vec![
                format!("No roster entry for '{}'", player),
                "Try: squadgate players to list known players".into(),
            ],
            Self::RosterUnavailable { .. } => vec![
                "Check the roster path in your configuration".into(),
                "Or pass one explicitly with --roster".into(),
            ],
            Self::InvalidSquadFile { .. } => vec![
                "Squad files need `name`, `formation` and a list of `[[entries]]`".into(),
                "Each entry needs `player` and `price`; `captain = true` marks the captain".into(),
            ],
            Self::SquadRejected { violations } => violations
                .iter()
                .map(|v| format!("Fix: {v}"))
                .collect(),
            Self::NotInSquad { player } => {
                vec![format!("Add {} to the squad before changing it", player)]
            }
            Self::StoreLockError => vec![
                "The store is locked".into(),
                "Try again in a moment".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PlayerNotFound { .. } | Self::TeamNotFound { .. } => ErrorCategory::NotFound,
            Self::NotInSquad { .. } | Self::InvalidSquadFile { .. } => ErrorCategory::Validation,
            Self::SquadRejected { .. } => ErrorCategory::Rejected,
            Self::RosterUnavailable { .. } => ErrorCategory::Configuration,
            Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
