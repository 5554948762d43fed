// ============================================================================
// domain/error.rs - PARSE AND CONSTRUCTION FAILURES
// ============================================================================
//
// An illegal squad is NOT a DomainError. Squad legality is reported through
// `Verdict`; this type only covers values that could not be built at all.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("unknown formation '{value}'")]
    UnknownFormation { value: String },

    #[error("unknown position '{value}'")]
    UnknownPosition { value: String },

    #[error("invalid price '{value}': {reason}")]
    InvalidPrice { value: String, reason: String },

    #[error("invalid {kind} '{value}'")]
    InvalidIdentifier { kind: &'static str, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownFormation { .. } => {
                let mut out = vec!["Supported formations:".to_string()];
                out.extend(
                    crate::domain::catalog::FORMATION_CATALOG
                        .iter()
                        .map(|def| format!("  • {} ({})", def.formation, def.slots)),
                );
                out
            }
            Self::UnknownPosition { .. } => vec![
                "Positions: goalkeeper, defender, midfielder, forward".into(),
                "Short forms gk, def, mid, fwd are accepted".into(),
            ],
            Self::InvalidPrice { .. } => {
                vec!["Prices are decimal numbers such as 6.5".into()]
            }
            Self::InvalidIdentifier { kind, .. } => {
                vec![format!("A {kind} must be non-empty and contain no spaces")]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
