//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into calls on the core services and render
//! the results. No squad rules live here.

use std::sync::Arc;

use squadgate_adapters::{InMemoryRoster, RosterLoader};
use squadgate_core::domain::SquadRules;
use tracing::debug;

use crate::{
    cli::{GlobalArgs, RuleOverrides},
    config::AppConfig,
    error::{CliError, CliResult},
};

pub mod add;
pub mod check;
pub mod completions;
pub mod config;
pub mod formations;
pub mod init;
pub mod players;

/// Load the roster named by `--roster`, falling back to `roster.path`.
pub(crate) fn open_roster(global: &GlobalArgs, config: &AppConfig) -> CliResult<Arc<InMemoryRoster>> {
    let path = global
        .roster
        .clone()
        .or_else(|| config.roster.path.clone())
        .ok_or(CliError::RosterNotConfigured)?;

    let players = RosterLoader::new(path).load_all()?;
    let roster = InMemoryRoster::from_players(players)?;
    debug!(players = roster.len(), "Roster ready");
    Ok(Arc::new(roster))
}

/// Configured rules with this invocation's overrides applied.
pub(crate) fn effective_rules(config: &AppConfig, overrides: &RuleOverrides) -> SquadRules {
    let mut rules = config.rules;
    if let Some(cap) = overrides.cap {
        rules = rules.with_budget_cap(cap);
    }
    if let Some(limit) = overrides.max_per_club {
        rules = rules.with_max_per_club(limit);
    }
    rules
}
