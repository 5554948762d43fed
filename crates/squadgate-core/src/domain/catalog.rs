//! Formation catalog.
//!
//! Each formation is described exactly once by its [`FormationDef`]. All
//! quota checks derive from [`FORMATION_CATALOG`]; nothing else in the crate
//! hard-codes slot counts.
//!
//! # Adding a New Formation
//!
//! 1. Add a variant to `Formation` in `value_objects.rs`
//! 2. Add one [`FormationDef`] entry to [`FORMATION_CATALOG`]
//! 3. The `catalog_integrity` test checks the new row sums to [`SQUAD_SIZE`]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::SquadEntry;
use crate::domain::value_objects::{Formation, Position};

/// Number of players in every fantasy squad.
pub const SQUAD_SIZE: usize = 7;

// ── Slots ────────────────────────────────────────────────────────────────────

/// Player counts per position.
///
/// Used both for a formation's required quota and for the tally of an
/// actual squad, so the two can be compared with `==`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slots {
    pub goalkeepers: usize,
    pub defenders: usize,
    pub midfielders: usize,
    pub forwards: usize,
}

impl Slots {
    pub const fn new(goalkeepers: usize, defenders: usize, midfielders: usize, forwards: usize) -> Self {
        Self {
            goalkeepers,
            defenders,
            midfielders,
            forwards,
        }
    }

    /// Count the entries at each position.
    pub fn tally<'a>(entries: impl IntoIterator<Item = &'a SquadEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |mut acc, entry| {
            *acc.slot_mut(entry.position) += 1;
            acc
        })
    }

    pub const fn get(&self, position: Position) -> usize {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    fn slot_mut(&mut self, position: Position) -> &mut usize {
        match position {
            Position::Goalkeeper => &mut self.goalkeepers,
            Position::Defender => &mut self.defenders,
            Position::Midfielder => &mut self.midfielders,
            Position::Forward => &mut self.forwards,
        }
    }

    pub const fn total(&self) -> usize {
        self.goalkeepers + self.defenders + self.midfielders + self.forwards
    }

    /// Slots still open when `filled` is measured against `self` as the quota.
    ///
    /// Positions already over quota report zero, not a negative number.
    pub fn remaining(&self, filled: &Slots) -> Slots {
        Slots::new(
            self.goalkeepers.saturating_sub(filled.goalkeepers),
            self.defenders.saturating_sub(filled.defenders),
            self.midfielders.saturating_sub(filled.midfielders),
            self.forwards.saturating_sub(filled.forwards),
        )
    }
}

impl fmt::Display for Slots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GK {}, DEF {}, MID {}, FWD {}",
            self.goalkeepers, self.defenders, self.midfielders, self.forwards
        )
    }
}

// ── Catalog ──────────────────────────────────────────────────────────────────

/// One row of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct FormationDef {
    pub formation: Formation,
    pub slots: Slots,
}

/// Single source of truth for formation quotas.
pub static FORMATION_CATALOG: &[FormationDef] = &[
    FormationDef {
        formation: Formation::F420,
        slots: Slots::new(1, 4, 2, 0),
    },
    FormationDef {
        formation: Formation::F330,
        slots: Slots::new(1, 3, 3, 0),
    },
    FormationDef {
        formation: Formation::F222,
        slots: Slots::new(1, 2, 2, 2),
    },
    FormationDef {
        formation: Formation::F321,
        slots: Slots::new(1, 3, 2, 1),
    },
    FormationDef {
        formation: Formation::F231,
        slots: Slots::new(1, 2, 3, 1),
    },
];

/// Look up the definition for a formation.
///
/// Returns `None` only if the catalog is missing a row, which the
/// `catalog_integrity` test rules out.
pub fn find_formation(formation: Formation) -> Option<&'static FormationDef> {
    FORMATION_CATALOG.iter().find(|def| def.formation == formation)
}

/// Required slot counts for `formation`.
pub fn slots_for(formation: Formation) -> Slots {
    find_formation(formation)
        .map(|def| def.slots)
        .unwrap_or_else(|| unreachable!("formation {formation} missing from FORMATION_CATALOG"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_integrity() {
        assert_eq!(FORMATION_CATALOG.len(), Formation::ALL.len());
        for formation in Formation::ALL {
            let def = find_formation(formation).expect("every formation has a row");
            assert_eq!(def.slots.total(), SQUAD_SIZE, "{formation} must fill {SQUAD_SIZE} slots");
            assert_eq!(def.slots.goalkeepers, 1, "{formation} needs one goalkeeper");
        }
    }

    #[test]
    fn slots_match_table() {
        assert_eq!(slots_for(Formation::F420), Slots::new(1, 4, 2, 0));
        assert_eq!(slots_for(Formation::F330), Slots::new(1, 3, 3, 0));
        assert_eq!(slots_for(Formation::F222), Slots::new(1, 2, 2, 2));
        assert_eq!(slots_for(Formation::F321), Slots::new(1, 3, 2, 1));
        assert_eq!(slots_for(Formation::F231), Slots::new(1, 2, 3, 1));
    }

    #[test]
    fn remaining_saturates() {
        let quota = Slots::new(1, 2, 2, 2);
        let filled = Slots::new(1, 3, 0, 1);
        assert_eq!(quota.remaining(&filled), Slots::new(0, 0, 2, 1));
    }
}
