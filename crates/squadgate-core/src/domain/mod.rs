// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for squadgate.
//!
//! This module contains the squad legality rules with no I/O. Roster data
//! and persistence reach it only as plain values or through the small
//! [`ClubLookup`] trait.
//!
//! - **No async**: every check is synchronous
//! - **No I/O**: no filesystem, network, or roster fetching
//! - **No tracing**: observability belongs to the application and CLI layers
//! - **Illegal is not an error**: checks return a [`Verdict`], never `Err`
//!
// Public API - what the world sees
pub mod catalog;
pub mod entities;
pub mod error;
pub mod rules;
pub mod value_objects;

pub mod validation;

// Re-exports for convenience
pub use catalog::{FORMATION_CATALOG, FormationDef, SQUAD_SIZE, Slots, slots_for};

pub use entities::{
    SavedTeam, SourcePlayer, SquadEntry, SquadId, Verdict, Violation, ViolationCategory,
    parse_price,
};

pub use error::{DomainError, ErrorCategory};

pub use rules::SquadRules;

pub use validation::{
    ClubLookup, total_price, validate_budget, validate_club_limits, validate_fantasy_team,
    validate_player_addition, validate_positions, validate_squad, validate_team_name,
};

pub use value_objects::{Formation, PlayerId, Position, TeamId};
