//! squadgate Core - fantasy-squad constraint engine
//!
//! This crate provides the domain and application layers for the league's
//! fantasy-football mini-game, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         squadgate-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (DraftSession, TeamService)        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (RosterLookup, TeamRepository)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    squadgate-adapters (Infrastructure)  │
//! │ (InMemoryRoster, roster_loader, ...)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Rules)        │
//! │ (Formation catalog, validators, Verdict)│
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use rust_decimal::Decimal;
//! use squadgate_core::domain::{
//!     Formation, PlayerId, Position, SquadEntry, SquadRules, TeamId, validate_player_addition,
//! };
//!
//! let current = vec![SquadEntry::new("gk-1", Position::Goalkeeper, Decimal::from(5)).captain()];
//! let candidate = SquadEntry::new("def-1", Position::Defender, Decimal::new(65, 1));
//! let clubs: HashMap<PlayerId, TeamId> = [
//!     (PlayerId::new("gk-1"), TeamId::new("lycee-hugo")),
//!     (PlayerId::new("def-1"), TeamId::new("college-zola")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let verdict = validate_player_addition(
//!     &current,
//!     &candidate,
//!     Formation::F420,
//!     &SquadRules::default(),
//!     &clubs,
//! );
//! assert!(verdict.is_valid());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DraftSession, TeamService,
        ports::{RosterClubs, RosterLookup, TeamRepository},
    };
    pub use crate::domain::{
        ClubLookup, Formation, PlayerId, Position, SavedTeam, Slots, SourcePlayer, SquadEntry,
        SquadId, SquadRules, TeamId, Verdict, Violation, ViolationCategory,
    };
    pub use crate::error::{SquadgateError, SquadgateResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
