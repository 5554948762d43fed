//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No squad rules live here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use squadgate_core::domain::{PlayerId, Position};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "squadgate",
    bin_name = "squadgate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Fantasy squad rules checker",
    long_about = "squadgate checks fantasy-football squads against the league rules: \
                  formation shape, captaincy, budget cap and the per-club limit.",
    after_help = "EXAMPLES:\n\
        \x20 squadgate formations\n\
        \x20 squadgate check squad.toml --roster roster/\n\
        \x20 squadgate add squad.toml --player hugo-gk-1 --price 5.5\n\
        \x20 squadgate players --position fwd --club lycee-hugo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the legal formations.
    #[command(
        visible_alias = "f",
        about = "List legal formations",
        after_help = "EXAMPLES:\n\
            \x20 squadgate formations\n\
            \x20 squadgate formations --format json"
    )]
    Formations(FormationsArgs),

    /// Run every team check on a squad file.
    #[command(
        about = "Check a complete squad",
        after_help = "EXAMPLES:\n\
            \x20 squadgate check squad.toml\n\
            \x20 squadgate check squad.json --roster roster.toml --cap 95"
    )]
    Check(CheckArgs),

    /// Check one more player against a squad in progress.
    #[command(
        about = "Check adding a player",
        after_help = "EXAMPLES:\n\
            \x20 squadgate add squad.toml --player zola-def-2 --price 6.25\n\
            \x20 squadgate add squad.toml --player zola-def-2 --price 6.25 --write"
    )]
    Add(AddArgs),

    /// List roster players.
    #[command(
        visible_alias = "ls",
        about = "List roster players",
        after_help = "EXAMPLES:\n\
            \x20 squadgate players\n\
            \x20 squadgate players --position gk\n\
            \x20 squadgate players --club lycee-hugo --format csv"
    )]
    Players(PlayersArgs),

    /// Initialise a squadgate configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 squadgate init           # default location\n\
            \x20 squadgate init --local   # .squadgate.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 squadgate completions bash > ~/.local/share/bash-completion/completions/squadgate\n\
            \x20 squadgate completions zsh  > ~/.zfunc/_squadgate\n\
            \x20 squadgate completions fish > ~/.config/fish/completions/squadgate.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the squadgate configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 squadgate config get rules.budget_cap\n\
            \x20 squadgate config list\n\
            \x20 squadgate config path"
    )]
    Config(ConfigCommands),
}

// ── formations ────────────────────────────────────────────────────────────────

/// Arguments for `squadgate formations`.
#[derive(Debug, Args)]
pub struct FormationsArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── rule overrides ────────────────────────────────────────────────────────────

/// Per-invocation overrides of the configured rules.
#[derive(Debug, Args)]
pub struct RuleOverrides {
    /// Budget cap for this run.
    #[arg(long = "cap", value_name = "AMOUNT", help = "Override the budget cap")]
    pub cap: Option<Decimal>,

    /// Per-club limit for this run.
    #[arg(
        long = "max-per-club",
        value_name = "N",
        help = "Override the per-club player limit"
    )]
    pub max_per_club: Option<usize>,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `squadgate check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Squad file (`.toml` or `.json`).
    #[arg(value_name = "SQUAD_FILE", help = "Squad file to check")]
    pub squad: PathBuf,

    #[command(flatten)]
    pub rules: RuleOverrides,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `squadgate add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Squad file holding the picks so far.
    #[arg(value_name = "SQUAD_FILE", help = "Squad file in progress")]
    pub squad: PathBuf,

    /// Roster id of the candidate.
    #[arg(short = 'p', long = "player", value_name = "ID", help = "Candidate player id")]
    pub player: PlayerId,

    /// Price paid for the candidate.
    #[arg(long = "price", value_name = "AMOUNT", help = "Candidate price")]
    pub price: Decimal,

    /// Make the candidate the captain once added.
    #[arg(long = "captain", requires = "write", help = "Make the candidate captain")]
    pub captain: bool,

    /// Write the squad file back when the addition passes.
    #[arg(short = 'w', long = "write", help = "Save the pick to the squad file")]
    pub write: bool,

    #[command(flatten)]
    pub rules: RuleOverrides,
}

// ── players ───────────────────────────────────────────────────────────────────

/// Arguments for `squadgate players`.
#[derive(Debug, Args)]
pub struct PlayersArgs {
    /// Only players at this position.
    #[arg(long = "position", value_enum, help = "Filter by position")]
    pub position: Option<PositionArg>,

    /// Only players from this club.
    #[arg(long = "club", value_name = "TEAM_ID", help = "Filter by club")]
    pub club: Option<String>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `squadgate init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.squadgate.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `squadgate completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `squadgate config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `rules.max_per_club`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Player positions as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PositionArg {
    #[value(alias = "gk")]
    Goalkeeper,
    #[value(alias = "def")]
    Defender,
    #[value(alias = "mid")]
    Midfielder,
    #[value(alias = "fwd")]
    Forward,
}

impl From<PositionArg> for Position {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Goalkeeper => Position::Goalkeeper,
            PositionArg::Defender => Position::Defender,
            PositionArg::Midfielder => Position::Midfielder,
            PositionArg::Forward => Position::Forward,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_check_command() {
        let cli = Cli::parse_from(["squadgate", "check", "squad.toml", "--cap", "95.5"]);
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.squad, PathBuf::from("squad.toml"));
                assert_eq!(args.rules.cap, Some(Decimal::new(955, 1)));
            }
            other => panic!("expected Check, got {other:?}"),
        }
    }

    #[test]
    fn parse_add_command() {
        let cli = Cli::parse_from([
            "squadgate",
            "--roster",
            "roster/",
            "add",
            "squad.toml",
            "--player",
            "zola-def-2",
            "--price",
            "6.25",
        ]);
        assert_eq!(cli.global.roster, Some(PathBuf::from("roster/")));
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.player, PlayerId::new("zola-def-2"));
                assert_eq!(args.price, Decimal::new(625, 2));
                assert!(!args.write);
            }
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[test]
    fn captain_requires_write() {
        let result = Cli::try_parse_from([
            "squadgate", "add", "s.toml", "--player", "x", "--price", "1", "--captain",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn position_aliases() {
        let cli = Cli::parse_from(["squadgate", "players", "--position", "fwd"]);
        if let Commands::Players(args) = cli.command {
            assert_eq!(args.position.map(Position::from), Some(Position::Forward));
        } else {
            panic!("expected Players command");
        }
    }

    #[test]
    fn bad_price_is_rejected_by_parser() {
        let result = Cli::try_parse_from([
            "squadgate", "add", "s.toml", "--player", "x", "--price", "cheap",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["squadgate", "--quiet", "--verbose", "formations"]);
        assert!(result.is_err());
    }
}
