//! Filesystem-based roster loader.
//!
//! Reads [`SourcePlayer`] records from a single TOML/JSON file, or from every
//! such file under a directory tree (typically one file per club).
//!
//! # Roster file format
//!
//! ```toml
//! # Optional: default club for every player in this file.
//! team = "lycee-hugo"
//!
//! [[players]]
//! id       = "hugo-gk-1"
//! name     = "Ana Martin"     # optional, display only
//! position = "goalkeeper"     # goalkeeper | defender | midfielder | forward (or gk/def/mid/fwd)
//!
//! [[players]]
//! id       = "hugo-fwd-9"
//! position = "fwd"
//! team     = "college-zola"   # overrides the file default
//! ```
//!
//! The JSON form has the same shape: `{"team": "...", "players": [...]}`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use squadgate_core::{
    application::ApplicationError,
    domain::{PlayerId, Position, SourcePlayer, TeamId},
    error::SquadgateResult,
};
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use crate::format::{FileFormat, read_document};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of one roster file.
#[derive(Debug, Deserialize, Clone)]
pub struct RosterManifest {
    /// Club applied to players that do not name their own.
    pub team: Option<TeamId>,
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
}

/// One `[[players]]` entry.
#[derive(Debug, Deserialize, Clone)]
pub struct PlayerRecord {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    pub position: Position,
    pub team: Option<TeamId>,
}

impl RosterManifest {
    /// Resolve every record's club, failing on the first player without one.
    fn into_players(self) -> Result<Vec<SourcePlayer>, String> {
        let default_team = self.team;
        self.players
            .into_iter()
            .map(|record| {
                let team_id = record
                    .team
                    .or_else(|| default_team.clone())
                    .ok_or_else(|| format!("player '{}' has no team", record.id))?;
                Ok::<_, String>(SourcePlayer {
                    id: record.id,
                    name: record.name,
                    position: record.position,
                    team_id,
                })
            })
            .collect()
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads roster players from a file or directory.
///
/// ```rust,no_run
/// use squadgate_adapters::{InMemoryRoster, RosterLoader};
///
/// let players = RosterLoader::new("roster/").load_all()?;
/// let roster = InMemoryRoster::from_players(players)?;
/// # Ok::<(), squadgate_core::error::SquadgateError>(())
/// ```
pub struct RosterLoader {
    path: PathBuf,
}

impl RosterLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every player from the configured path.
    ///
    /// A file path must parse cleanly. For a directory, files that fail to
    /// parse are skipped with a `WARN` log; the directory itself must exist.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_all(&self) -> SquadgateResult<Vec<SourcePlayer>> {
        if !self.path.exists() {
            return Err(unavailable(format!(
                "roster not found: {}",
                self.path.display()
            )));
        }

        let players = if self.path.is_dir() {
            self.load_dir()?
        } else {
            load_file(&self.path).map_err(unavailable)?
        };

        debug!(count = players.len(), "finished loading roster");
        Ok(players)
    }

    fn load_dir(&self) -> SquadgateResult<Vec<SourcePlayer>> {
        let mut players = Vec::new();

        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&self.path).follow_links(true) {
            let entry = entry.map_err(|e| {
                unavailable(format!(
                    "failed to walk roster directory '{}': {e}",
                    self.path.display()
                ))
            })?;
            if entry.file_type().is_file() && FileFormat::from_path(entry.path()).is_some() {
                files.push(entry.into_path());
            }
        }
        files.sort();

        for file in files {
            match load_file(&file) {
                Ok(mut loaded) => {
                    debug!(file = %file.display(), count = loaded.len(), "loaded roster file");
                    players.append(&mut loaded);
                }
                Err(e) => {
                    warn!(
                        file  = %file.display(),
                        error = %e,
                        "skipping roster file due to load error"
                    );
                }
            }
        }

        Ok(players)
    }
}

fn load_file(path: &Path) -> Result<Vec<SourcePlayer>, String> {
    let manifest: RosterManifest = read_document(path).map_err(|e| e.to_string())?;
    manifest
        .into_players()
        .map_err(|e| format!("{}: {e}", path.display()))
}

fn unavailable(reason: String) -> squadgate_core::error::SquadgateError {
    ApplicationError::RosterUnavailable { reason }.into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
