//! Team storage adapters.

mod memory;

pub use memory::InMemoryTeamRepository;
