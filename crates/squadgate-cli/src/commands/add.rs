//! `squadgate add`: check one more pick against a squad in progress.

use squadgate_adapters::SquadFile;
use squadgate_core::application::DraftSession;
use tracing::{info, instrument};

use crate::{
    cli::{AddArgs, GlobalArgs, OutputFormat},
    commands::{effective_rules, open_roster},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run the addition check for `--player` at `--price`.
///
/// With `--write` a passing pick is appended to the squad file (and made
/// captain with `--captain`); a failing pick never touches the file.
#[instrument(skip_all, fields(squad = %args.squad.display(), player = %args.player))]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let roster = open_roster(&global, &config)?;
    let squad = SquadFile::load(&args.squad)?;
    let entries = squad.resolve(&*roster)?;
    let rules = effective_rules(&config, &args.rules);

    let mut draft = DraftSession::resume(roster, squad.formation, rules, entries);
    let verdict = if args.write {
        draft.try_add(&args.player, args.price)?
    } else {
        draft.check_candidate(&args.player, args.price)?
    };

    let subject = format!("Adding {} at {}", args.player, args.price);
    output.verdict(&subject, &verdict)?;

    if !verdict.is_valid() {
        return Err(CliError::IllegalSquad {
            subject,
            problems: verdict.violations().len(),
        });
    }

    let remaining = if args.write {
        if args.captain {
            draft.set_captain(&args.player)?;
        }
        SquadFile::new(&squad.name, draft.formation(), draft.entries()).save(&args.squad)?;
        info!(player = %args.player, "Pick written to squad file");
        draft.remaining_budget()
    } else {
        draft.remaining_budget() - args.price
    };

    if output.format() != OutputFormat::Json {
        if args.write {
            output.success(&format!(
                "Saved {} to {}",
                args.player,
                args.squad.display()
            ))?;
            output.info(&format!("Open slots: {}", draft.open_slots()))?;
        }
        output.info(&format!("Budget left after this pick: {remaining}"))?;
    }
    Ok(())
}
