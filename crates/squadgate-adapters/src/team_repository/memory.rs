//! In-memory team repository.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use squadgate_core::{
    application::{ApplicationError, ports::TeamRepository},
    domain::{SavedTeam, SquadId},
    error::SquadgateResult,
};

/// Thread-safe in-memory store for validated teams.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTeamRepository {
    inner: Arc<RwLock<HashMap<SquadId, SavedTeam>>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TeamRepository for InMemoryTeamRepository {
    fn save(&self, team: SavedTeam) -> SquadgateResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(team.id, team);
        Ok(())
    }

    fn get(&self, id: &SquadId) -> SquadgateResult<SavedTeam> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner
            .get(id)
            .cloned()
            .ok_or_else(|| ApplicationError::TeamNotFound { id: *id }.into())
    }

    /// Teams in the order they were saved.
    fn list(&self) -> SquadgateResult<Vec<SavedTeam>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut teams: Vec<_> = inner.values().cloned().collect();
        teams.sort_by_key(|t| t.saved_at);
        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use squadgate_core::{
        domain::{Formation, Position, SquadEntry},
        error::SquadgateError,
    };

    use super::*;

    fn team(name: &str) -> SavedTeam {
        SavedTeam::new(
            name,
            Formation::F222,
            vec![SquadEntry::new("gk", Position::Goalkeeper, Decimal::from(5)).captain()],
        )
    }

    #[test]
    fn saves_and_fetches_by_id() {
        let repo = InMemoryTeamRepository::new();
        let saved = team("Les Aigles");
        repo.save(saved.clone()).unwrap();

        assert_eq!(repo.get(&saved.id).unwrap(), saved);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let repo = InMemoryTeamRepository::new();
        let err = repo.get(&SquadId::new()).unwrap_err();
        assert!(matches!(
            err,
            SquadgateError::Application(ApplicationError::TeamNotFound { .. })
        ));
    }

    #[test]
    fn list_returns_every_team() {
        let repo = InMemoryTeamRepository::new();
        repo.save(team("Les Aigles")).unwrap();
        repo.save(team("Les Lions")).unwrap();

        let names: Vec<_> = repo.list().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Les Lions".to_string()));
    }
}
