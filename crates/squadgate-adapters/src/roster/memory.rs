//! In-memory roster.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use squadgate_core::{
    application::{ApplicationError, ports::RosterLookup},
    domain::{PlayerId, SourcePlayer},
    error::SquadgateResult,
};
use tracing::warn;

/// Thread-safe in-memory roster keyed by player id.
#[derive(Debug, Clone)]
pub struct InMemoryRoster {
    inner: Arc<RwLock<HashMap<PlayerId, SourcePlayer>>>,
}

impl InMemoryRoster {
    /// Create a new empty roster.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a roster holding `players`.
    ///
    /// A later record with a repeated id replaces the earlier one.
    pub fn from_players(players: impl IntoIterator<Item = SourcePlayer>) -> SquadgateResult<Self> {
        let roster = Self::new();
        for player in players {
            roster.insert(player)?;
        }
        Ok(roster)
    }

    /// Insert or replace a player, returning the previous record.
    pub fn insert(&self, player: SourcePlayer) -> SquadgateResult<Option<SourcePlayer>> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let previous = inner.insert(player.id.clone(), player);
        if let Some(old) = &previous {
            warn!(player = %old.id, "Duplicate roster entry replaced");
        }
        Ok(previous)
    }

    /// Get the number of players.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryRoster {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterLookup for InMemoryRoster {
    fn player(&self, id: &PlayerId) -> SquadgateResult<SourcePlayer> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.get(id).cloned().ok_or_else(|| {
            ApplicationError::PlayerNotFound { player: id.clone() }.into()
        })
    }

    /// Players sorted by id.
    fn players(&self) -> SquadgateResult<Vec<SourcePlayer>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut players: Vec<_> = inner.values().cloned().collect();
        players.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadgate_core::{domain::Position, error::SquadgateError};

    fn roster() -> InMemoryRoster {
        InMemoryRoster::from_players([
            SourcePlayer::new("m1", "Gus", Position::Midfielder, "camus"),
            SourcePlayer::new("gk", "Ana", Position::Goalkeeper, "hugo"),
        ])
        .unwrap()
    }

    #[test]
    fn looks_up_players_by_id() {
        let roster = roster();
        let gk = roster.player(&PlayerId::new("gk")).unwrap();
        assert_eq!(gk.position, Position::Goalkeeper);
        assert_eq!(gk.team_id.as_str(), "hugo");
    }

    #[test]
    fn missing_player_is_not_found() {
        let err = roster().player(&PlayerId::new("ghost")).unwrap_err();
        assert!(matches!(
            err,
            SquadgateError::Application(ApplicationError::PlayerNotFound { .. })
        ));
    }

    #[test]
    fn players_are_sorted_by_id() {
        let ids: Vec<_> = roster()
            .players()
            .unwrap()
            .into_iter()
            .map(|p| p.id.to_string())
            .collect();
        assert_eq!(ids, ["gk", "m1"]);
    }

    #[test]
    fn insert_replaces_duplicate_ids() {
        let roster = roster();
        let old = roster
            .insert(SourcePlayer::new("gk", "Ana", Position::Goalkeeper, "zola"))
            .unwrap();
        assert_eq!(old.unwrap().team_id.as_str(), "hugo");
        assert_eq!(roster.len(), 2);
        assert_eq!(
            roster.player(&PlayerId::new("gk")).unwrap().team_id.as_str(),
            "zola"
        );
    }

    #[test]
    fn clones_share_storage() {
        let roster = InMemoryRoster::new();
        let handle = roster.clone();
        handle
            .insert(SourcePlayer::new("f1", "Ivo", Position::Forward, "sand"))
            .unwrap();
        assert!(!roster.is_empty());
    }
}
