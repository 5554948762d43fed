//! `squadgate players`: list roster players.

use squadgate_core::{
    application::RosterLookup,
    domain::{Position, SourcePlayer},
};

use crate::{
    cli::{GlobalArgs, ListFormat, PlayersArgs},
    commands::open_roster,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: PlayersArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let roster = open_roster(&global, &config)?;
    let position = args.position.map(Position::from);
    let players = filter_players(roster.players()?, position, args.club.as_deref());

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Players ({}):", players.len()))?;
            for p in &players {
                output.print(&format!(
                    "  {:<18} {:<4} {:<18} {}",
                    p.id.as_str(),
                    p.position.short(),
                    p.team_id.as_str(),
                    p.name
                ))?;
            }
        }
        ListFormat::List => {
            for p in &players {
                println!("{}", p.id);
            }
        }
        ListFormat::Json => output.json(&players)?,
        ListFormat::Csv => {
            println!("id,name,position,team");
            for p in &players {
                println!("{},{},{},{}", p.id, p.name, p.position, p.team_id);
            }
        }
    }

    Ok(())
}

fn filter_players(
    players: Vec<SourcePlayer>,
    position: Option<Position>,
    club: Option<&str>,
) -> Vec<SourcePlayer> {
    players
        .into_iter()
        .filter(|p| position.is_none_or(|pos| p.position == pos))
        .filter(|p| club.is_none_or(|c| p.team_id.as_str() == c))
        .collect()
}
