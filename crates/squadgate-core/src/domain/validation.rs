//! Squad legality checks.
//!
//! Every function here is pure: it reads its arguments and the formation
//! catalog, and returns a [`Verdict`]. None of them short-circuit; each
//! independent check runs and contributes its own violations.
//!
//! Club ownership is not stored on [`SquadEntry`]. Checks that need it take a
//! [`ClubLookup`], which the roster side supplies.

use std::collections::{HashMap, HashSet};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{
    catalog::{SQUAD_SIZE, Slots},
    entities::{SourcePlayer, SquadEntry, Verdict, Violation},
    rules::SquadRules,
    value_objects::{Formation, PlayerId, TeamId},
};

/// Resolves the real-world club a player belongs to.
pub trait ClubLookup {
    fn club_of(&self, player: &PlayerId) -> Option<TeamId>;
}

impl ClubLookup for HashMap<PlayerId, TeamId> {
    fn club_of(&self, player: &PlayerId) -> Option<TeamId> {
        self.get(player).cloned()
    }
}

impl ClubLookup for [SourcePlayer] {
    fn club_of(&self, player: &PlayerId) -> Option<TeamId> {
        self.iter()
            .find(|p| &p.id == player)
            .map(|p| p.team_id.clone())
    }
}

impl ClubLookup for Vec<SourcePlayer> {
    fn club_of(&self, player: &PlayerId) -> Option<TeamId> {
        self.as_slice().club_of(player)
    }
}

/// Sum of entry prices, rounded to cents.
///
/// Rounding absorbs drift from upstream systems that store prices as floats.
pub fn total_price<'a>(entries: impl IntoIterator<Item = &'a SquadEntry>) -> Decimal {
    to_cents(entries.into_iter().map(|e| e.price).sum())
}

/// Half a cent rounds up, whatever the parity of the cent digit.
fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// ── Composition ──────────────────────────────────────────────────────────────

/// Check a complete squad's shape against `formation`.
///
/// Formation compliance is judged only against the formation passed in; a
/// squad that would fit another formation still fails.
pub fn validate_squad(entries: &[SquadEntry], formation: Formation) -> Verdict {
    let mut verdict = Verdict::pass();

    if entries.len() != SQUAD_SIZE {
        verdict.push(Violation::WrongPlayerCount {
            expected: SQUAD_SIZE,
            actual: entries.len(),
        });
    }

    for player in duplicate_ids(entries) {
        verdict.push(Violation::DuplicatePlayer { player });
    }

    let expected = formation.slots();
    let actual = Slots::tally(entries);
    if actual != expected {
        verdict.push(Violation::FormationMismatch {
            formation,
            expected,
            actual,
        });
    }

    match entries.iter().filter(|e| e.is_captain).count() {
        0 => verdict.push(Violation::MissingCaptain),
        1 => {}
        count => verdict.push(Violation::MultipleCaptains { count }),
    }

    verdict
}

/// Ids appearing more than once, each reported once in first-seen order.
fn duplicate_ids(entries: &[SquadEntry]) -> Vec<PlayerId> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut duplicates = Vec::new();
    for entry in entries {
        if !seen.insert(&entry.player_id) && !duplicates.contains(&entry.player_id) {
            duplicates.push(entry.player_id.clone());
        }
    }
    duplicates
}

// ── Budget ───────────────────────────────────────────────────────────────────

/// Check total spend against `cap` (inclusive) and that every price is positive.
pub fn validate_budget(entries: &[SquadEntry], cap: Decimal) -> Verdict {
    let mut verdict = Verdict::pass();

    let total = total_price(entries);
    if total > cap {
        verdict.push(Violation::BudgetExceeded {
            cap,
            total,
            excess: total - cap,
        });
    }

    for entry in entries.iter().filter(|e| e.price <= Decimal::ZERO) {
        verdict.push(Violation::NonPositivePrice {
            player: entry.player_id.clone(),
            price: entry.price,
        });
    }

    verdict
}

// ── Club limits ──────────────────────────────────────────────────────────────

/// Check that no club supplies more than `max_per_club` entries.
///
/// Entries whose club cannot be resolved are reported as unknown players.
/// Clubs are reported in the order they first appear in `entries`.
pub fn validate_club_limits<C>(entries: &[SquadEntry], clubs: &C, max_per_club: usize) -> Verdict
where
    C: ClubLookup + ?Sized,
{
    let mut verdict = Verdict::pass();
    let mut order: Vec<TeamId> = Vec::new();
    let mut counts: HashMap<TeamId, usize> = HashMap::new();

    for entry in entries {
        match clubs.club_of(&entry.player_id) {
            Some(club) => {
                let count = counts.entry(club.clone()).or_insert(0);
                if *count == 0 {
                    order.push(club);
                }
                *count += 1;
            }
            None => verdict.push(Violation::UnknownPlayer {
                player: entry.player_id.clone(),
            }),
        }
    }

    for club in order {
        let count = counts[&club];
        if count > max_per_club {
            verdict.push(Violation::ClubLimitExceeded {
                club,
                count,
                limit: max_per_club,
            });
        }
    }

    verdict
}

// ── Positions against the roster ─────────────────────────────────────────────

/// Check that each entry's copied position still matches the roster.
///
/// Entries missing from `roster` are skipped; [`validate_club_limits`]
/// already reports them.
pub fn validate_positions(entries: &[SquadEntry], roster: &[SourcePlayer]) -> Verdict {
    entries
        .iter()
        .filter_map(|entry| {
            let player = roster.iter().find(|p| p.id == entry.player_id)?;
            (player.position != entry.position).then(|| Violation::PositionMismatch {
                player: entry.player_id.clone(),
                selected: entry.position,
                roster: player.position,
            })
        })
        .collect()
}

// ── Incremental addition ─────────────────────────────────────────────────────

/// Decide whether `candidate` may join `current` under `formation`.
///
/// Advisory check run before each tentative pick. It never looks at captaincy
/// or total squad size; those belong to [`validate_fantasy_team`].
pub fn validate_player_addition<C>(
    current: &[SquadEntry],
    candidate: &SquadEntry,
    formation: Formation,
    rules: &SquadRules,
    clubs: &C,
) -> Verdict
where
    C: ClubLookup + ?Sized,
{
    let mut verdict = Verdict::pass();

    if current.iter().any(|e| e.player_id == candidate.player_id) {
        verdict.push(Violation::AlreadySelected {
            player: candidate.player_id.clone(),
        });
    }

    let limit = formation.slots().get(candidate.position);
    let filled = current
        .iter()
        .filter(|e| e.position == candidate.position)
        .count();
    if filled >= limit {
        verdict.push(Violation::PositionFull {
            position: candidate.position,
            formation,
            limit,
        });
    }

    if candidate.price <= Decimal::ZERO {
        verdict.push(Violation::NonPositivePrice {
            player: candidate.player_id.clone(),
            price: candidate.price,
        });
    }

    let spent = total_price(current);
    if to_cents(spent + candidate.price) > rules.budget_cap {
        verdict.push(Violation::InsufficientBudget {
            player: candidate.player_id.clone(),
            price: candidate.price,
            remaining: rules.budget_cap - spent,
        });
    }

    match clubs.club_of(&candidate.player_id) {
        Some(club) => {
            let count = 1 + current
                .iter()
                .filter(|e| clubs.club_of(&e.player_id).as_ref() == Some(&club))
                .count();
            if count > rules.max_per_club {
                verdict.push(Violation::ClubLimitExceeded {
                    club,
                    count,
                    limit: rules.max_per_club,
                });
            }
        }
        None => verdict.push(Violation::UnknownPlayer {
            player: candidate.player_id.clone(),
        }),
    }

    verdict
}

// ── Team facade ──────────────────────────────────────────────────────────────

/// Check a team name's trimmed length against the rules.
pub fn validate_team_name(name: &str, rules: &SquadRules) -> Verdict {
    let len = name.trim().chars().count();
    let too_long = rules.max_name_len.is_some_and(|max| len > max);
    if len == 0 || len < rules.min_name_len || too_long {
        return Verdict::from_violations(vec![Violation::InvalidName {
            name: name.to_string(),
            min: rules.min_name_len.max(1),
            max: rules.max_name_len,
        }]);
    }
    Verdict::pass()
}

/// The "ready to save" gate.
///
/// Runs name, composition, budget and club-limit checks unconditionally and
/// concatenates their violations in that order.
pub fn validate_fantasy_team<C>(
    name: &str,
    entries: &[SquadEntry],
    formation: Formation,
    rules: &SquadRules,
    clubs: &C,
) -> Verdict
where
    C: ClubLookup + ?Sized,
{
    validate_team_name(name, rules)
        .and(validate_squad(entries, formation))
        .and(validate_budget(entries, rules.budget_cap))
        .and(validate_club_limits(entries, clubs, rules.max_per_club))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Position, ViolationCategory};

    fn price(units: i64, cents: u32) -> Decimal {
        Decimal::new(units * 100 + i64::from(cents), 2)
    }

    fn entry(id: &str, position: Position, p: Decimal) -> SquadEntry {
        SquadEntry::new(id, position, p)
    }

    /// GK 5.0 + DEF 6, 6.5, 7, 7.5 + MID 8, 8.5 (total 48.5), gk is captain.
    fn four_two_zero() -> Vec<SquadEntry> {
        vec![
            entry("gk", Position::Goalkeeper, price(5, 0)).captain(),
            entry("d1", Position::Defender, price(6, 0)),
            entry("d2", Position::Defender, price(6, 50)),
            entry("d3", Position::Defender, price(7, 0)),
            entry("d4", Position::Defender, price(7, 50)),
            entry("m1", Position::Midfielder, price(8, 0)),
            entry("m2", Position::Midfielder, price(8, 50)),
        ]
    }

    /// Every player at a different club.
    fn spread_clubs(entries: &[SquadEntry]) -> HashMap<PlayerId, TeamId> {
        entries
            .iter()
            .map(|e| (e.player_id.clone(), TeamId::new(format!("club-{}", e.player_id))))
            .collect()
    }

    fn one_club(entries: &[SquadEntry], club: &str) -> HashMap<PlayerId, TeamId> {
        entries
            .iter()
            .map(|e| (e.player_id.clone(), TeamId::new(club)))
            .collect()
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn reference_squad_is_valid_under_its_formation() {
        let squad = four_two_zero();
        assert!(validate_squad(&squad, Formation::F420).is_valid());
        assert!(validate_budget(&squad, Decimal::ONE_HUNDRED).is_valid());
    }

    #[test]
    fn reference_squad_fails_under_other_formation() {
        let verdict = validate_squad(&four_two_zero(), Formation::F321);
        assert!(!verdict.is_valid());
        assert_eq!(verdict.violations().len(), 1);
        assert!(matches!(
            verdict.violations()[0],
            Violation::FormationMismatch {
                formation: Formation::F321,
                ..
            }
        ));
    }

    #[test]
    fn empty_squad_reports_count_and_captain() {
        let verdict = validate_squad(&[], Formation::F222);
        assert!(verdict.any(|v| matches!(v, Violation::WrongPlayerCount { actual: 0, .. })));
        assert!(verdict.any(|v| matches!(v, Violation::MissingCaptain)));
    }

    #[test]
    fn off_by_one_position_fails_even_with_seven_players() {
        let mut squad = four_two_zero();
        squad[6].position = Position::Forward;
        let verdict = validate_squad(&squad, Formation::F420);
        assert_eq!(verdict.violations().len(), 1);
        assert!(verdict.has_category(ViolationCategory::Structural));
    }

    #[test]
    fn captain_count_must_be_exactly_one() {
        let mut none = four_two_zero();
        none[0].is_captain = false;
        let verdict = validate_squad(&none, Formation::F420);
        assert_eq!(verdict.violations(), &[Violation::MissingCaptain]);

        let mut two = four_two_zero();
        two[3].is_captain = true;
        let verdict = validate_squad(&two, Formation::F420);
        assert_eq!(verdict.violations(), &[Violation::MultipleCaptains { count: 2 }]);
    }

    #[test]
    fn duplicates_reported_once_per_player() {
        let mut squad = four_two_zero();
        squad[2].player_id = PlayerId::new("d1");
        squad[3].player_id = PlayerId::new("d1");
        let verdict = validate_squad(&squad, Formation::F420);
        let dups: Vec<_> = verdict
            .violations()
            .iter()
            .filter(|v| matches!(v, Violation::DuplicatePlayer { .. }))
            .collect();
        assert_eq!(dups.len(), 1);
    }

    // ── budget ────────────────────────────────────────────────────────────

    #[test]
    fn budget_boundary_is_inclusive() {
        let mut squad = four_two_zero();
        // 48.5 + 51.5 = 100 exactly.
        squad[6].price += price(51, 50);
        assert!(validate_budget(&squad, Decimal::ONE_HUNDRED).is_valid());

        squad[6].price += price(0, 1);
        let verdict = validate_budget(&squad, Decimal::ONE_HUNDRED);
        assert_eq!(
            verdict.violations(),
            &[Violation::BudgetExceeded {
                cap: Decimal::ONE_HUNDRED,
                total: price(100, 1),
                excess: price(0, 1),
            }]
        );
        assert_eq!(verdict.errors()[0], "budget exceeded by 0.01 (cap 100)");
    }

    #[test]
    fn non_positive_price_fails_even_under_cap() {
        let mut squad = four_two_zero();
        squad[1].price = Decimal::ZERO;
        squad[2].price = price(-1, 0);
        let verdict = validate_budget(&squad, Decimal::ONE_HUNDRED);
        assert_eq!(verdict.violations().len(), 2);
        assert!(
            verdict
                .violations()
                .iter()
                .all(|v| matches!(v, Violation::NonPositivePrice { .. }))
        );
    }

    #[test]
    fn half_cent_over_cap_always_rounds_up() {
        let mut squad = four_two_zero();
        // 48.5 + 51.505 = 100.005
        squad[6].price += Decimal::new(51_505, 3);
        let verdict = validate_budget(&squad, Decimal::ONE_HUNDRED);
        assert_eq!(verdict.errors(), vec!["budget exceeded by 0.01 (cap 100)"]);

        squad[6].price += price(0, 1);
        let verdict = validate_budget(&squad, Decimal::ONE_HUNDRED);
        assert_eq!(verdict.errors(), vec!["budget exceeded by 0.02 (cap 100)"]);
    }

    #[test]
    fn half_cent_addition_is_rejected() {
        let current = vec![entry("gk", Position::Goalkeeper, price(90, 0)).captain()];
        let candidate = entry("d1", Position::Defender, Decimal::new(10_005, 3));
        let clubs = spread_clubs(&[current[0].clone(), candidate.clone()]);
        let verdict =
            validate_player_addition(&current, &candidate, Formation::F420, &SquadRules::default(), &clubs);
        assert!(verdict.any(|v| matches!(v, Violation::InsufficientBudget { .. })));
    }

    #[test]
    fn float_drift_is_absorbed() {
        // 0.1 stored with float noise, seven times, against a cap of 0.7.
        let noisy = Decimal::new(1_000_000_000_000_001, 16);
        let squad: Vec<_> = (0..7)
            .map(|i| entry(&format!("p{i}"), Position::Defender, noisy))
            .collect();
        assert!(validate_budget(&squad, Decimal::new(7, 1)).is_valid());
    }

    // ── club limits ───────────────────────────────────────────────────────

    #[test]
    fn four_from_one_club_is_invalid() {
        let squad = four_two_zero();
        let mut clubs = spread_clubs(&squad);
        for id in ["d1", "d2", "d3", "d4"] {
            clubs.insert(PlayerId::new(id), TeamId::new("lycee-hugo"));
        }
        let verdict = validate_club_limits(&squad, &clubs, 3);
        assert_eq!(
            verdict.violations(),
            &[Violation::ClubLimitExceeded {
                club: TeamId::new("lycee-hugo"),
                count: 4,
                limit: 3,
            }]
        );
    }

    #[test]
    fn three_per_club_across_clubs_is_fine() {
        let squad = four_two_zero();
        let clubs: HashMap<_, _> = squad
            .iter()
            .enumerate()
            .map(|(i, e)| (e.player_id.clone(), TeamId::new(format!("club-{}", i % 3))))
            .collect();
        assert!(validate_club_limits(&squad, &clubs, 3).is_valid());
    }

    #[test]
    fn unresolvable_club_is_reported() {
        let squad = four_two_zero();
        let mut clubs = spread_clubs(&squad);
        clubs.remove(&PlayerId::new("m2"));
        let verdict = validate_club_limits(&squad, &clubs, 3);
        assert_eq!(
            verdict.violations(),
            &[Violation::UnknownPlayer {
                player: PlayerId::new("m2")
            }]
        );
    }

    #[test]
    fn roster_slice_works_as_lookup() {
        let roster = vec![SourcePlayer::new("gk", "Ana", Position::Goalkeeper, "a")];
        assert_eq!(roster.club_of(&PlayerId::new("gk")), Some(TeamId::new("a")));
        assert_eq!(roster.club_of(&PlayerId::new("zz")), None);
    }

    // ── positions ─────────────────────────────────────────────────────────

    #[test]
    fn stale_position_is_reported() {
        let squad = four_two_zero();
        let roster = vec![
            SourcePlayer::new("gk", "", Position::Goalkeeper, "a"),
            SourcePlayer::new("d1", "", Position::Midfielder, "a"),
        ];
        let verdict = validate_positions(&squad, &roster);
        assert_eq!(
            verdict.violations(),
            &[Violation::PositionMismatch {
                player: PlayerId::new("d1"),
                selected: Position::Defender,
                roster: Position::Midfielder,
            }]
        );
    }

    // ── addition ──────────────────────────────────────────────────────────

    #[test]
    fn fifth_defender_rejected_under_four_two_zero() {
        let current: Vec<_> = four_two_zero().into_iter().take(5).collect();
        let candidate = entry("d5", Position::Defender, price(4, 0));
        let mut clubs = spread_clubs(&current);
        clubs.insert(PlayerId::new("d5"), TeamId::new("club-d5"));

        let verdict =
            validate_player_addition(&current, &candidate, Formation::F420, &SquadRules::default(), &clubs);
        assert_eq!(
            verdict.violations(),
            &[Violation::PositionFull {
                position: Position::Defender,
                formation: Formation::F420,
                limit: 4,
            }]
        );
    }

    #[test]
    fn quota_is_formation_relative() {
        let current: Vec<_> = four_two_zero().into_iter().take(4).collect(); // gk + 3 def
        let candidate = entry("d4b", Position::Defender, price(4, 0));
        let mut clubs = spread_clubs(&current);
        clubs.insert(PlayerId::new("d4b"), TeamId::new("x"));
        let rules = SquadRules::default();

        assert!(!validate_player_addition(&current, &candidate, Formation::F321, &rules, &clubs).is_valid());
        assert!(validate_player_addition(&current, &candidate, Formation::F420, &rules, &clubs).is_valid());
    }

    #[test]
    fn addition_accumulates_every_reason() {
        let current = four_two_zero();
        let mut clubs = one_club(&current[..3], "lycee-hugo");
        clubs.extend(spread_clubs(&current[3..]));
        let candidate = current[1].clone().captain();
        let rules = SquadRules::default().with_budget_cap(Decimal::from(50));

        let verdict = validate_player_addition(&current, &candidate, Formation::F420, &rules, &clubs);
        assert!(verdict.any(|v| matches!(v, Violation::AlreadySelected { .. })));
        assert!(verdict.any(|v| matches!(v, Violation::PositionFull { .. })));
        assert!(verdict.any(|v| matches!(v, Violation::InsufficientBudget { .. })));
        assert!(verdict.any(|v| matches!(v, Violation::ClubLimitExceeded { count: 4, .. })));
    }

    #[test]
    fn candidate_above_whole_cap_always_rejected() {
        let candidate = entry("star", Position::Forward, price(100, 1));
        let clubs = spread_clubs(std::slice::from_ref(&candidate));
        let verdict =
            validate_player_addition(&[], &candidate, Formation::F222, &SquadRules::default(), &clubs);
        assert_eq!(verdict.violations().len(), 1);
        assert!(matches!(
            verdict.violations()[0],
            Violation::InsufficientBudget { .. }
        ));
    }

    #[test]
    fn addition_ignores_captaincy_and_size() {
        let current: Vec<_> = four_two_zero()
            .into_iter()
            .map(|mut e| {
                e.is_captain = true;
                e
            })
            .take(6)
            .collect();
        let candidate = entry("m2", Position::Midfielder, price(8, 50)).captain();
        let clubs = spread_clubs(&four_two_zero());
        assert!(
            validate_player_addition(&current, &candidate, Formation::F420, &SquadRules::default(), &clubs)
                .is_valid()
        );
    }

    // ── facade ────────────────────────────────────────────────────────────

    #[test]
    fn two_character_name_fails_alone() {
        let squad = four_two_zero();
        let clubs = spread_clubs(&squad);
        let rules = SquadRules::default();

        let verdict = validate_fantasy_team("AB", &squad, Formation::F420, &rules, &clubs);
        assert_eq!(verdict.violations().len(), 1);
        assert!(verdict.has_category(ViolationCategory::Identity));

        assert!(validate_fantasy_team("Les Aigles", &squad, Formation::F420, &rules, &clubs).is_valid());
    }

    #[test]
    fn blank_name_is_invalid() {
        let verdict = validate_team_name("   ", &SquadRules::default());
        assert_eq!(verdict.errors(), vec!["invalid name '   ': must be at least 3 characters"]);
    }

    #[test]
    fn long_name_passes_unless_a_maximum_is_configured() {
        let squad = four_two_zero();
        let clubs = spread_clubs(&squad);
        let name = "Association Sportive du Lycee Victor Hugo Les Aigles";

        let verdict = validate_fantasy_team(name, &squad, Formation::F420, &SquadRules::default(), &clubs);
        assert!(verdict.is_valid(), "{verdict}");

        let bounded = SquadRules::default().with_max_name_len(40);
        let verdict = validate_team_name(name, &bounded);
        assert!(matches!(
            verdict.violations(),
            [Violation::InvalidName { max: Some(40), .. }]
        ));
    }

    #[test]
    fn facade_orders_name_then_squad_then_budget_then_clubs() {
        let mut squad = four_two_zero();
        squad[0].is_captain = false;
        squad[1].price = Decimal::ZERO;
        let clubs = one_club(&squad, "solo");

        let verdict = validate_fantasy_team("", &squad, Formation::F420, &SquadRules::default(), &clubs);
        let kinds: Vec<_> = verdict.violations().iter().map(Violation::category).collect();
        assert_eq!(
            kinds,
            vec![
                ViolationCategory::Identity,
                ViolationCategory::Captaincy,
                ViolationCategory::Economic,
                ViolationCategory::Eligibility,
            ]
        );
    }
}
