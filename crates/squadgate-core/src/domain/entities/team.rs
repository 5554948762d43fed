//! A finalized fantasy team as handed to persistence.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::SquadEntry,
    validation::total_price,
    value_objects::{Formation, PlayerId},
};

/// Identity of one saved squad.
///
/// Uses `Uuid::new_v4()` (random) by default; `from_uuid` restores an id read
/// back from persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SquadId(Uuid);

impl SquadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SquadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SquadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A squad that passed the team check, stamped for persistence.
///
/// Built by `TeamService::save`; repositories only ever store these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedTeam {
    pub id: SquadId,
    pub name: String,
    pub formation: Formation,
    pub entries: Vec<SquadEntry>,
    pub saved_at: DateTime<Utc>,
}

impl SavedTeam {
    pub fn new(name: impl Into<String>, formation: Formation, entries: Vec<SquadEntry>) -> Self {
        Self {
            id: SquadId::new(),
            name: name.into().trim().to_string(),
            formation,
            entries,
            saved_at: Utc::now(),
        }
    }

    pub fn captain(&self) -> Option<&PlayerId> {
        self.entries
            .iter()
            .find(|e| e.is_captain)
            .map(|e| &e.player_id)
    }

    pub fn total_price(&self) -> Decimal {
        total_price(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;

    #[test]
    fn new_trims_name_and_finds_captain() {
        let team = SavedTeam::new(
            "  Les Aigles ",
            Formation::F222,
            vec![
                SquadEntry::new("a", Position::Goalkeeper, Decimal::new(55, 1)),
                SquadEntry::new("b", Position::Forward, Decimal::new(45, 1)).captain(),
            ],
        );
        assert_eq!(team.name, "Les Aigles");
        assert_eq!(team.captain(), Some(&PlayerId::new("b")));
        assert_eq!(team.total_price(), Decimal::from(10));
        assert!(!team.id.as_uuid().is_nil());
    }
}
