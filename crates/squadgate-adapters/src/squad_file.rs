//! Squad description files.
//!
//! A squad file names the team, its formation and the picks so far:
//!
//! ```toml
//! name      = "Les Aigles"
//! formation = "4-2-0"
//!
//! [[entries]]
//! player  = "hugo-gk-1"
//! price   = 5.5
//! captain = true
//!
//! [[entries]]
//! player   = "zola-def-2"
//! position = "defender"   # optional; looked up in the roster when omitted
//! price    = "6.25"
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use squadgate_core::{
    application::{ApplicationError, ports::RosterLookup},
    domain::{Formation, PlayerId, Position, SquadEntry},
    error::{SquadgateError, SquadgateResult},
};
use tracing::{debug, instrument};

use crate::format::{read_document, write_document};

/// On-disk shape of a squad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquadFile {
    pub name: String,
    pub formation: Formation,
    #[serde(default)]
    pub entries: Vec<EntryRecord>,
}

/// One `[[entries]]` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub player: PlayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub captain: bool,
}

impl From<&SquadEntry> for EntryRecord {
    fn from(entry: &SquadEntry) -> Self {
        Self {
            player: entry.player_id.clone(),
            position: Some(entry.position),
            price: entry.price,
            captain: entry.is_captain,
        }
    }
}

impl SquadFile {
    pub fn new(name: impl Into<String>, formation: Formation, entries: &[SquadEntry]) -> Self {
        Self {
            name: name.into(),
            formation,
            entries: entries.iter().map(EntryRecord::from).collect(),
        }
    }

    /// Read a `.toml` or `.json` squad file.
    #[instrument(fields(path = %path.display()))]
    pub fn load(path: &Path) -> SquadgateResult<Self> {
        let file: Self = read_document(path).map_err(|e| ApplicationError::InvalidSquadFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(team = %file.name, entries = file.entries.len(), "loaded squad file");
        Ok(file)
    }

    /// Write the squad back in the format implied by `path`.
    pub fn save(&self, path: &Path) -> SquadgateResult<()> {
        write_document(path, self).map_err(|e| {
            ApplicationError::InvalidSquadFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Build squad entries, filling missing positions from the roster.
    ///
    /// Positions written in the file are kept as-is so the team check can
    /// report a mismatch against the roster. A row without a position whose
    /// player the roster does not know fails with `PlayerNotFound`.
    pub fn resolve(&self, roster: &dyn RosterLookup) -> SquadgateResult<Vec<SquadEntry>> {
        self.entries
            .iter()
            .map(|record| {
                let position = match record.position {
                    Some(position) => position,
                    None => roster.player(&record.player)?.position,
                };
                Ok::<_, SquadgateError>(SquadEntry {
                    player_id: record.player.clone(),
                    position,
                    price: record.price,
                    is_captain: record.captain,
                })
            })
            .collect()
    }
}
