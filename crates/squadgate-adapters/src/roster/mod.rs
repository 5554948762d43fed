//! Roster adapters.

mod memory;

pub use memory::InMemoryRoster;
