//! `squadgate formations`: list the catalog.

use serde::Serialize;
use squadgate_core::domain::{FORMATION_CATALOG, FormationDef};

use crate::{
    cli::{FormationsArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

/// One catalog row as written by `--format json`.
#[derive(Debug, Serialize)]
struct FormationRow {
    formation: &'static str,
    goalkeepers: usize,
    defenders: usize,
    midfielders: usize,
    forwards: usize,
}

impl From<&FormationDef> for FormationRow {
    fn from(def: &FormationDef) -> Self {
        Self {
            formation: def.formation.as_str(),
            goalkeepers: def.slots.goalkeepers,
            defenders: def.slots.defenders,
            midfielders: def.slots.midfielders,
            forwards: def.slots.forwards,
        }
    }
}

pub fn execute(args: FormationsArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header("Formations:")?;
            for def in FORMATION_CATALOG {
                output.print(&format!("  {:<7} {}", def.formation.as_str(), def.slots))?;
            }
        }
        ListFormat::List => {
            for def in FORMATION_CATALOG {
                println!("{}", def.formation);
            }
        }
        ListFormat::Json => {
            let rows: Vec<FormationRow> = FORMATION_CATALOG.iter().map(FormationRow::from).collect();
            output.json(&rows)?;
        }
        ListFormat::Csv => {
            println!("formation,goalkeepers,defenders,midfielders,forwards");
            for row in FORMATION_CATALOG.iter().map(FormationRow::from) {
                println!(
                    "{},{},{},{},{}",
                    row.formation, row.goalkeepers, row.defenders, row.midfielders, row.forwards
                );
            }
        }
    }

    Ok(())
}
