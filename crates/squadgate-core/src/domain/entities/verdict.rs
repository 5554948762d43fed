//! The verdict shape shared by every squad check.
//!
//! A [`Verdict`] is a pass/fail flag plus an ordered list of [`Violation`]s.
//! Checks push violations instead of returning early, so a caller sees every
//! problem at once. Callers branch on the `Violation` variant or its
//! [`ViolationCategory`]; the `Display` text is for people only.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{
    catalog::Slots,
    value_objects::{Formation, PlayerId, Position, TeamId},
};

/// Broad family a violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViolationCategory {
    /// Squad shape: count, duplicates, formation fit.
    Structural,
    /// Money: cap, headroom, prices.
    Economic,
    Captaincy,
    /// Whether one particular player may take a place.
    Eligibility,
    /// The team name.
    Identity,
}

impl ViolationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Economic => "economic",
            Self::Captaincy => "captaincy",
            Self::Eligibility => "eligibility",
            Self::Identity => "identity",
        }
    }
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reason a squad (or a tentative pick) is not legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    WrongPlayerCount {
        expected: usize,
        actual: usize,
    },
    DuplicatePlayer {
        player: PlayerId,
    },
    FormationMismatch {
        formation: Formation,
        expected: Slots,
        actual: Slots,
    },
    PositionMismatch {
        player: PlayerId,
        selected: Position,
        roster: Position,
    },
    MissingCaptain,
    MultipleCaptains {
        count: usize,
    },
    BudgetExceeded {
        cap: Decimal,
        total: Decimal,
        excess: Decimal,
    },
    NonPositivePrice {
        player: PlayerId,
        price: Decimal,
    },
    InsufficientBudget {
        player: PlayerId,
        price: Decimal,
        remaining: Decimal,
    },
    ClubLimitExceeded {
        club: TeamId,
        count: usize,
        limit: usize,
    },
    PositionFull {
        position: Position,
        formation: Formation,
        limit: usize,
    },
    AlreadySelected {
        player: PlayerId,
    },
    UnknownPlayer {
        player: PlayerId,
    },
    InvalidName {
        name: String,
        min: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
}

impl Violation {
    pub const fn category(&self) -> ViolationCategory {
        match self {
            Self::WrongPlayerCount { .. }
            | Self::DuplicatePlayer { .. }
            | Self::FormationMismatch { .. }
            | Self::PositionMismatch { .. } => ViolationCategory::Structural,
            Self::BudgetExceeded { .. }
            | Self::NonPositivePrice { .. }
            | Self::InsufficientBudget { .. } => ViolationCategory::Economic,
            Self::MissingCaptain | Self::MultipleCaptains { .. } => ViolationCategory::Captaincy,
            Self::ClubLimitExceeded { .. }
            | Self::PositionFull { .. }
            | Self::AlreadySelected { .. }
            | Self::UnknownPlayer { .. } => ViolationCategory::Eligibility,
            Self::InvalidName { .. } => ViolationCategory::Identity,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongPlayerCount { expected, actual } => {
                write!(f, "wrong player count: a squad needs {expected} players, found {actual}")
            }
            Self::DuplicatePlayer { player } => {
                write!(f, "player {player} is selected more than once")
            }
            Self::FormationMismatch {
                formation,
                expected,
                actual,
            } => write!(
                f,
                "squad does not match formation {formation}: expected {expected}, found {actual}"
            ),
            Self::PositionMismatch {
                player,
                selected,
                roster,
            } => write!(
                f,
                "player {player} was selected as {selected} but plays {roster}"
            ),
            Self::MissingCaptain => f.write_str("missing captain: choose one captain"),
            Self::MultipleCaptains { count } => {
                write!(f, "multiple captains: {count} players are marked captain, only one is allowed")
            }
            Self::BudgetExceeded { cap, excess, .. } => {
                write!(f, "budget exceeded by {excess} (cap {cap})")
            }
            Self::NonPositivePrice { player, price } => {
                write!(f, "player {player} has a non-positive price ({price})")
            }
            Self::InsufficientBudget {
                player,
                price,
                remaining,
            } => write!(
                f,
                "insufficient budget for {player}: costs {price}, {remaining} remaining"
            ),
            Self::ClubLimitExceeded { club, count, limit } => write!(
                f,
                "too many players from {club}: {count} selected, limit is {limit} (over by {})",
                count.saturating_sub(*limit)
            ),
            Self::PositionFull {
                position,
                formation,
                limit,
            } => write!(
                f,
                "no free {position} slot in formation {formation} (limit {limit})"
            ),
            Self::AlreadySelected { player } => {
                write!(f, "player {player} is already in your team")
            }
            Self::UnknownPlayer { player } => {
                write!(f, "player {player} is not on any roster")
            }
            Self::InvalidName {
                name,
                min,
                max: Some(max),
            } => write!(
                f,
                "invalid name '{name}': must be {min} to {max} characters"
            ),
            Self::InvalidName {
                name,
                min,
                max: None,
            } => write!(f, "invalid name '{name}': must be at least {min} characters"),
        }
    }
}

/// Outcome of a squad check.
///
/// `valid` is kept in step with `violations` by every mutator; there is no
/// way to build a valid verdict that carries violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    valid: bool,
    violations: Vec<Violation>,
}

impl Verdict {
    /// A passing verdict with no violations.
    pub fn pass() -> Self {
        Self {
            valid: true,
            violations: Vec::new(),
        }
    }

    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            valid: violations.is_empty(),
            violations,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Human-readable reasons, in check order.
    pub fn errors(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    pub fn push(&mut self, violation: Violation) {
        self.valid = false;
        self.violations.push(violation);
    }

    /// Append another verdict's violations after this one's.
    pub fn merge(&mut self, other: Verdict) {
        if !other.valid {
            self.valid = false;
            self.violations.extend(other.violations);
        }
    }

    /// Builder form of [`merge`](Self::merge).
    pub fn and(mut self, other: Verdict) -> Self {
        self.merge(other);
        self
    }

    pub fn has_category(&self, category: ViolationCategory) -> bool {
        self.violations.iter().any(|v| v.category() == category)
    }

    pub fn any(&self, predicate: impl Fn(&Violation) -> bool) -> bool {
        self.violations.iter().any(predicate)
    }
}

impl Default for Verdict {
    fn default() -> Self {
        Self::pass()
    }
}

impl FromIterator<Violation> for Verdict {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self::from_violations(iter.into_iter().collect())
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            return f.write_str("valid");
        }
        write!(f, "invalid ({} problem", self.violations.len())?;
        if self.violations.len() != 1 {
            f.write_str("s")?;
        }
        f.write_str(")")?;
        for violation in &self.violations {
            write!(f, "\n  - {violation}")?;
        }
        Ok(())
    }
}
