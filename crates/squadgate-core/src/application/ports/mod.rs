//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `squadgate-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RosterLookup`: real-world players, their positions and clubs
//!   - `TeamRepository`: storage for validated teams
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (`DraftSession` and `TeamService` are called directly by the CLI)

pub mod output;

pub use output::{RosterClubs, RosterLookup, TeamRepository};

#[cfg(test)]
pub use output::{MockRosterLookup, MockTeamRepository};
