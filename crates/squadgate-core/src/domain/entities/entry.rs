//! Squad entries and the roster players they point at.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{PlayerId, Position, TeamId},
};

/// A real-world player as published by the roster collaborator.
///
/// The engine reads `id`, `position` and `team_id`; `name` is carried for
/// display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePlayer {
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    pub position: Position,
    #[serde(rename = "team")]
    pub team_id: TeamId,
}

impl SourcePlayer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Position,
        team_id: impl Into<String>,
    ) -> Self {
        Self {
            id: PlayerId::new(id),
            name: name.into(),
            position,
            team_id: TeamId::new(team_id),
        }
    }

    /// Build the entry for selecting this player at `price`.
    pub fn select(&self, price: Decimal) -> SquadEntry {
        SquadEntry::new(self.id.clone(), self.position, price)
    }
}

impl fmt::Display for SourcePlayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{} ({}, {})", self.id, self.position.short(), self.team_id)
        } else {
            write!(
                f,
                "{} [{}] ({}, {})",
                self.name,
                self.id,
                self.position.short(),
                self.team_id
            )
        }
    }
}

/// One player's inclusion in a fantasy squad.
///
/// `price` is deliberately unconstrained on construction: a non-positive
/// price is reported by the budget check, not rejected here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadEntry {
    #[serde(rename = "player")]
    pub player_id: PlayerId,
    pub position: Position,
    pub price: Decimal,
    #[serde(default, rename = "captain")]
    pub is_captain: bool,
}

impl SquadEntry {
    pub fn new(player_id: impl Into<PlayerId>, position: Position, price: Decimal) -> Self {
        Self {
            player_id: player_id.into(),
            position,
            price,
            is_captain: false,
        }
    }

    /// Mark this entry as the captain.
    pub fn captain(mut self) -> Self {
        self.is_captain = true;
        self
    }
}

/// Parse a user-supplied price such as `"6.5"`.
///
/// Only the syntax is checked; positivity is a squad rule.
pub fn parse_price(raw: &str) -> Result<Decimal, DomainError> {
    Decimal::from_str(raw.trim()).map_err(|e| DomainError::InvalidPrice {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
