//! Infrastructure adapters for squadgate.
//!
//! This crate implements the ports defined in `squadgate-core::application::ports`
//! and owns all file I/O: roster files, squad files and team storage.

pub mod format;
pub mod roster;
pub mod roster_loader;
pub mod squad_file;
pub mod team_repository;

// Re-export commonly used adapters
pub use format::{FileFormat, FormatError};
pub use roster::InMemoryRoster;
pub use roster_loader::RosterLoader;
pub use squad_file::{EntryRecord, SquadFile};
pub use team_repository::InMemoryTeamRepository;
