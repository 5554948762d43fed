//! League-wide squad rules.
//!
//! The cap and limits are injected values, never globals, so every check is
//! testable with arbitrary numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default salary cap per squad, in league units.
pub const DEFAULT_BUDGET_CAP: Decimal = Decimal::ONE_HUNDRED;
/// Default maximum players from one club.
pub const DEFAULT_MAX_PER_CLUB: usize = 3;
pub const DEFAULT_MIN_NAME_LEN: usize = 3;

/// Numbers the validators check against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadRules {
    pub budget_cap: Decimal,
    pub max_per_club: usize,
    pub min_name_len: usize,
    /// Upper bound on the trimmed name length; unbounded when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_name_len: Option<usize>,
}

impl SquadRules {
    pub fn with_budget_cap(mut self, cap: Decimal) -> Self {
        self.budget_cap = cap;
        self
    }

    pub fn with_max_name_len(mut self, limit: usize) -> Self {
        self.max_name_len = Some(limit);
        self
    }

    pub fn with_max_per_club(mut self, limit: usize) -> Self {
        self.max_per_club = limit;
        self
    }
}

impl Default for SquadRules {
    fn default() -> Self {
        Self {
            budget_cap: DEFAULT_BUDGET_CAP,
            max_per_club: DEFAULT_MAX_PER_CLUB,
            min_name_len: DEFAULT_MIN_NAME_LEN,
            max_name_len: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cap_is_one_hundred() {
        assert_eq!(SquadRules::default().budget_cap, Decimal::from(100));
    }

    #[test]
    fn name_length_is_unbounded_by_default() {
        assert_eq!(SquadRules::default().max_name_len, None);
        assert_eq!(SquadRules::default().with_max_name_len(20).max_name_len, Some(20));
    }
}
