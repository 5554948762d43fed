pub mod entry;
pub mod team;
pub mod verdict;

pub use entry::{SourcePlayer, SquadEntry, parse_price};
pub use team::{SavedTeam, SquadId};
pub use verdict::{Verdict, Violation, ViolationCategory};
