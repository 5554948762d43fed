//! Application layer for squadgate.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DraftSession, TeamService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! squad rules itself. All legality checks live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{DraftSession, TeamService};

// Re-export port traits (for adapter implementation)
pub use ports::{RosterClubs, RosterLookup, TeamRepository};

pub use error::ApplicationError;
