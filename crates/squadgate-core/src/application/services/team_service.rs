//! Team Service - the "save team" use case.
//!
//! Runs the full team check, cross-checks entry positions against the
//! roster, and persists only squads that pass. Rejections carry every
//! violation so the caller can show them all at once.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{RosterLookup, TeamRepository},
    },
    domain::{
        Formation, SavedTeam, SourcePlayer, SquadEntry, SquadId, SquadRules, Verdict,
        validate_fantasy_team, validate_positions,
    },
    error::{SquadgateError, SquadgateResult},
};

/// Service for validating and storing finished teams.
pub struct TeamService {
    roster: Arc<dyn RosterLookup>,
    repository: Box<dyn TeamRepository>,
    rules: SquadRules,
}

impl TeamService {
    /// Create a new team service with the given adapters.
    pub fn new(
        roster: Arc<dyn RosterLookup>,
        repository: Box<dyn TeamRepository>,
        rules: SquadRules,
    ) -> Self {
        Self {
            roster,
            repository,
            rules,
        }
    }

    pub fn rules(&self) -> &SquadRules {
        &self.rules
    }

    /// Run every check without saving.
    ///
    /// Errors only when the roster itself fails; a player missing from the
    /// roster is reported in the verdict.
    #[instrument(skip_all, fields(team = %name, formation = %formation, players = entries.len()))]
    pub fn check(
        &self,
        name: &str,
        formation: Formation,
        entries: &[SquadEntry],
    ) -> SquadgateResult<Verdict> {
        let known = self.known_players(entries)?;
        let verdict = validate_fantasy_team(name, entries, formation, &self.rules, &known)
            .and(validate_positions(entries, &known));
        info!(valid = verdict.is_valid(), problems = verdict.violations().len(), "Team checked");
        Ok(verdict)
    }

    /// Check and persist a finished squad.
    ///
    /// Returns [`ApplicationError::SquadRejected`] with every violation when
    /// the squad is not legal; nothing is written in that case.
    pub fn save(
        &self,
        name: &str,
        formation: Formation,
        entries: Vec<SquadEntry>,
    ) -> SquadgateResult<SavedTeam> {
        let verdict = self.check(name, formation, &entries)?;
        if !verdict.is_valid() {
            warn!(team = %name, problems = verdict.violations().len(), "Save refused");
            return Err(ApplicationError::SquadRejected {
                violations: verdict.into_violations(),
            }
            .into());
        }

        let team = SavedTeam::new(name, formation, entries);
        self.repository.save(team.clone())?;
        info!(id = %team.id, team = %team.name, "Team saved");
        Ok(team)
    }

    pub fn get(&self, id: &SquadId) -> SquadgateResult<SavedTeam> {
        self.repository.get(id)
    }

    pub fn list(&self) -> SquadgateResult<Vec<SavedTeam>> {
        self.repository.list()
    }

    /// Roster records for the entries the roster knows about.
    fn known_players(&self, entries: &[SquadEntry]) -> SquadgateResult<Vec<SourcePlayer>> {
        let mut known = Vec::with_capacity(entries.len());
        for entry in entries {
            match self.roster.player(&entry.player_id) {
                Ok(player) => known.push(player),
                Err(SquadgateError::Application(ApplicationError::PlayerNotFound { .. })) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(known)
    }
}
