//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `squadgate-adapters` crate provides implementations.

use crate::domain::{ClubLookup, PlayerId, SavedTeam, SourcePlayer, SquadId, TeamId};
use crate::error::SquadgateResult;

#[cfg(test)]
use mockall::automock;

/// Port for the roster collaborator.
///
/// Implemented by:
/// - `squadgate_adapters::roster::InMemoryRoster` (loaded from files, or seeded in tests)
///
/// The engine never fetches players itself; everything it knows about a
/// player's position and club arrives through this trait.
#[cfg_attr(test, automock)]
pub trait RosterLookup: Send + Sync {
    /// Fetch one player, or `ApplicationError::PlayerNotFound`.
    fn player(&self, id: &PlayerId) -> SquadgateResult<SourcePlayer>;

    /// All known players.
    fn players(&self) -> SquadgateResult<Vec<SourcePlayer>>;
}

/// Port for storing validated teams.
///
/// Implemented by:
/// - `squadgate_adapters::team_repository::InMemoryTeamRepository`
///
/// Only [`SavedTeam`] values cross this port, and `TeamService` builds those
/// solely from squads that passed the team check.
#[cfg_attr(test, automock)]
pub trait TeamRepository: Send + Sync {
    fn save(&self, team: SavedTeam) -> SquadgateResult<()>;

    fn get(&self, id: &SquadId) -> SquadgateResult<SavedTeam>;

    fn list(&self) -> SquadgateResult<Vec<SavedTeam>>;
}

/// Club lookup backed by a roster port.
///
/// Lookup failures (unknown player, unreadable roster) resolve to `None`,
/// which the club check reports as an unknown player.
pub struct RosterClubs<'a, R: ?Sized>(pub &'a R);

impl<R: RosterLookup + ?Sized> ClubLookup for RosterClubs<'_, R> {
    fn club_of(&self, player: &PlayerId) -> Option<TeamId> {
        self.0.player(player).ok().map(|p| p.team_id)
    }
}
