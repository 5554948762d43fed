//! Draft Session - one user's squad under construction.
//!
//! The session owns the in-progress entries. Every pick goes through the
//! addition check first and is committed only on a passing verdict. Methods
//! that change the squad take `&mut self`, so one session cannot be raced
//! against itself.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{RosterClubs, RosterLookup},
    },
    domain::{
        Formation, PlayerId, Slots, SquadEntry, SquadRules, Verdict, total_price,
        validate_fantasy_team, validate_player_addition,
    },
    error::SquadgateResult,
};

/// An in-progress fantasy squad.
pub struct DraftSession {
    roster: Arc<dyn RosterLookup>,
    formation: Formation,
    rules: SquadRules,
    entries: Vec<SquadEntry>,
}

impl DraftSession {
    /// Start an empty draft.
    pub fn new(roster: Arc<dyn RosterLookup>, formation: Formation, rules: SquadRules) -> Self {
        Self::resume(roster, formation, rules, Vec::new())
    }

    /// Continue a draft from previously selected entries.
    ///
    /// The entries are taken as-is; run [`verdict`](Self::verdict) to learn
    /// whether they are legal.
    pub fn resume(
        roster: Arc<dyn RosterLookup>,
        formation: Formation,
        rules: SquadRules,
        entries: Vec<SquadEntry>,
    ) -> Self {
        Self {
            roster,
            formation,
            rules,
            entries,
        }
    }

    /// Run the addition check for `player_id` at `price` without committing.
    ///
    /// Fails only if the roster cannot resolve the player; an illegal pick is
    /// a failing verdict, not an error.
    #[instrument(skip_all, fields(player = %player_id, price = %price, formation = %self.formation))]
    pub fn check_candidate(&self, player_id: &PlayerId, price: Decimal) -> SquadgateResult<Verdict> {
        let candidate = self.roster.player(player_id)?.select(price);
        Ok(self.addition_verdict(&candidate))
    }

    /// Add `player_id` at `price` if the addition check passes.
    ///
    /// Returns the verdict either way; the squad is unchanged when it fails.
    #[instrument(skip_all, fields(player = %player_id, price = %price, formation = %self.formation))]
    pub fn try_add(&mut self, player_id: &PlayerId, price: Decimal) -> SquadgateResult<Verdict> {
        let candidate = self.roster.player(player_id)?.select(price);
        let verdict = self.addition_verdict(&candidate);
        if verdict.is_valid() {
            self.entries.push(candidate);
        }
        Ok(verdict)
    }

    /// Drop a player from the squad.
    pub fn remove(&mut self, player_id: &PlayerId) -> SquadgateResult<SquadEntry> {
        let index = self.index_of(player_id)?;
        Ok(self.entries.remove(index))
    }

    /// Make `player_id` the only captain.
    pub fn set_captain(&mut self, player_id: &PlayerId) -> SquadgateResult<()> {
        let index = self.index_of(player_id)?;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.is_captain = i == index;
        }
        Ok(())
    }

    /// Switch formation.
    ///
    /// Existing picks are kept even if they overfill a position under the
    /// new formation; [`open_slots`](Self::open_slots) and
    /// [`verdict`](Self::verdict) show the consequence.
    pub fn change_formation(&mut self, formation: Formation) {
        self.formation = formation;
    }

    /// Run the full team check on the current squad.
    pub fn verdict(&self, name: &str) -> Verdict {
        validate_fantasy_team(
            name,
            &self.entries,
            self.formation,
            &self.rules,
            &RosterClubs(&*self.roster),
        )
    }

    pub fn entries(&self) -> &[SquadEntry] {
        &self.entries
    }

    pub fn formation(&self) -> Formation {
        self.formation
    }

    pub fn rules(&self) -> &SquadRules {
        &self.rules
    }

    pub fn spent(&self) -> Decimal {
        total_price(&self.entries)
    }

    /// Budget left under the cap; negative when already over.
    pub fn remaining_budget(&self) -> Decimal {
        self.rules.budget_cap - self.spent()
    }

    /// Slots still open per position under the current formation.
    pub fn open_slots(&self) -> Slots {
        self.formation.slots().remaining(&Slots::tally(&self.entries))
    }

    /// Every slot filled, regardless of legality.
    pub fn is_full(&self) -> bool {
        self.open_slots().total() == 0
    }

    fn addition_verdict(&self, candidate: &SquadEntry) -> Verdict {
        let verdict = validate_player_addition(
            &self.entries,
            candidate,
            self.formation,
            &self.rules,
            &RosterClubs(&*self.roster),
        );
        debug!(valid = verdict.is_valid(), problems = verdict.violations().len(), "Addition checked");
        verdict
    }

    fn index_of(&self, player_id: &PlayerId) -> SquadgateResult<usize> {
        self.entries
            .iter()
            .position(|e| &e.player_id == player_id)
            .ok_or_else(|| {
                ApplicationError::NotInSquad {
                    player: player_id.clone(),
                }
                .into()
            })
    }
}
