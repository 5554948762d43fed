//! `squadgate check`: run every team check on a squad file.

use squadgate_adapters::{InMemoryTeamRepository, SquadFile};
use squadgate_core::{application::TeamService, domain::total_price};
use tracing::instrument;

use crate::{
    cli::{CheckArgs, GlobalArgs, OutputFormat},
    commands::{effective_rules, open_roster},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Check a complete squad.
///
/// Every violation is printed; the command then fails with exit code 2 if
/// there was at least one.
#[instrument(skip_all, fields(squad = %args.squad.display()))]
pub fn execute(
    args: CheckArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let roster = open_roster(&global, &config)?;
    let squad = SquadFile::load(&args.squad)?;
    let entries = squad.resolve(&*roster)?;
    let rules = effective_rules(&config, &args.rules);

    let service = TeamService::new(roster, Box::new(InMemoryTeamRepository::new()), rules);
    let verdict = service.check(&squad.name, squad.formation, &entries)?;

    output.verdict(&squad.name, &verdict)?;

    if !verdict.is_valid() {
        return Err(CliError::IllegalSquad {
            subject: squad.name,
            problems: verdict.violations().len(),
        });
    }

    if output.format() != OutputFormat::Json {
        output.info(&format!(
            "{}, {} players, {} of {} spent",
            squad.formation,
            entries.len(),
            total_price(&entries),
            service.rules().budget_cap,
        ))?;
    }
    Ok(())
}
