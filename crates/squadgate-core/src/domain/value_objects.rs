//! Domain value objects: Position, Formation, PlayerId, TeamId.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! They hold NO quota logic. The slot counts for each formation live in
//! `catalog.rs`. This file defines the types, their string representations,
//! and their `FromStr` parsers.
//!
//! # Adding a Formation
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a [`FormationDef`](crate::domain::catalog::FormationDef) entry in `catalog.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Position ─────────────────────────────────────────────────────────────────

/// On-pitch position of a player.
///
/// A player's position is fixed for the whole squad-building session; the
/// entry copies it at selection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[serde(alias = "gk", alias = "gardien")]
    Goalkeeper,
    #[serde(alias = "def", alias = "defenseur", alias = "défenseur")]
    Defender,
    #[serde(alias = "mid", alias = "milieu")]
    Midfielder,
    #[serde(alias = "fwd", alias = "attaquant")]
    Forward,
}

impl Position {
    /// All positions in pitch order (back to front).
    pub const ALL: [Position; 4] = [
        Self::Goalkeeper,
        Self::Defender,
        Self::Midfielder,
        Self::Forward,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "goalkeeper",
            Self::Defender => "defender",
            Self::Midfielder => "midfielder",
            Self::Forward => "forward",
        }
    }

    /// Two/three letter code used in compact listings.
    pub const fn short(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defender => "DEF",
            Self::Midfielder => "MID",
            Self::Forward => "FWD",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "goalkeeper" | "gk" | "gardien" => Ok(Self::Goalkeeper),
            "defender" | "def" | "défenseur" | "defenseur" => Ok(Self::Defender),
            "midfielder" | "mid" | "milieu" => Ok(Self::Midfielder),
            "forward" | "fwd" | "attaquant" => Ok(Self::Forward),
            other => Err(DomainError::UnknownPosition {
                value: other.to_string(),
            }),
        }
    }
}

// ── Formation ────────────────────────────────────────────────────────────────

/// A named distribution of the seven squad slots.
///
/// The identifier reads DEF-MID-FWD; every formation has exactly one
/// goalkeeper. Slot counts are looked up through
/// [`catalog::slots_for`](crate::domain::catalog::slots_for).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formation {
    #[serde(rename = "4-2-0")]
    F420,
    #[serde(rename = "3-3-0")]
    F330,
    #[serde(rename = "2-2-2")]
    F222,
    #[serde(rename = "3-2-1")]
    F321,
    #[serde(rename = "2-3-1")]
    F231,
}

impl Formation {
    pub const ALL: [Formation; 5] = [Self::F420, Self::F330, Self::F222, Self::F321, Self::F231];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::F420 => "4-2-0",
            Self::F330 => "3-3-0",
            Self::F222 => "2-2-2",
            Self::F321 => "3-2-1",
            Self::F231 => "2-3-1",
        }
    }

    /// Required slot counts for this formation.
    ///
    /// Delegates to `catalog::slots_for`. Do not add match arms here.
    pub fn slots(self) -> crate::domain::catalog::Slots {
        crate::domain::catalog::slots_for(self)
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Formation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4-2-0" | "420" => Ok(Self::F420),
            "3-3-0" | "330" => Ok(Self::F330),
            "2-2-2" | "222" => Ok(Self::F222),
            "3-2-1" | "321" => Ok(Self::F321),
            "2-3-1" | "231" => Ok(Self::F231),
            other => Err(DomainError::UnknownFormation {
                value: other.to_string(),
            }),
        }
    }
}

// ── Identifiers ──────────────────────────────────────────────────────────────

/// Reference to a real-world player owned by the roster system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl FromStr for PlayerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_identifier("player id", s).map(Self)
    }
}

/// Identifier of a real-world club or school team.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TeamId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_identifier("team id", s).map(Self)
    }
}

fn parse_identifier(kind: &'static str, s: &str) -> Result<String, DomainError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidIdentifier {
            kind,
            value: s.to_string(),
        });
    }
    Ok(trimmed.to_string())
}
