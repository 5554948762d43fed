//! Property tests for the squad rules.

use std::collections::HashMap;

use proptest::prelude::*;
use rust_decimal::Decimal;
use squadgate_core::domain::{
    FORMATION_CATALOG, Formation, PlayerId, Position, SQUAD_SIZE, SquadEntry, SquadRules, TeamId,
    Violation, ViolationCategory, validate_budget, validate_club_limits, validate_fantasy_team,
    validate_player_addition, validate_squad,
};

fn formation() -> impl Strategy<Value = Formation> {
    prop::sample::select(Formation::ALL.to_vec())
}

/// Positions filling `formation` exactly, in catalog order.
fn positions_for(formation: Formation) -> Vec<Position> {
    let slots = formation.slots();
    Position::ALL
        .into_iter()
        .flat_map(|p| std::iter::repeat_n(p, slots.get(p)))
        .collect()
}

/// A legal squad: exact shape, one captain, prices in cents summing <= 100.
fn legal_squad() -> impl Strategy<Value = (Formation, Vec<SquadEntry>)> {
    (
        formation(),
        prop::collection::vec(1i64..=1428, SQUAD_SIZE),
        0..SQUAD_SIZE,
    )
        .prop_map(|(formation, cents, captain)| {
            let entries = positions_for(formation)
                .into_iter()
                .zip(cents)
                .enumerate()
                .map(|(i, (position, c))| {
                    let entry = SquadEntry::new(format!("p{i}"), position, Decimal::new(c, 2));
                    if i == captain { entry.captain() } else { entry }
                })
                .collect();
            (formation, entries)
        })
}

/// Two players per club.
fn paired_clubs(entries: &[SquadEntry]) -> HashMap<PlayerId, TeamId> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.player_id.clone(), TeamId::new(format!("club-{}", i / 2))))
        .collect()
}

proptest! {
    #[test]
    fn complete_legal_squads_pass((formation, squad) in legal_squad()) {
        let verdict = validate_fantasy_team(
            "Les Aigles",
            &squad,
            formation,
            &SquadRules::default(),
            &paired_clubs(&squad),
        );
        prop_assert!(verdict.is_valid(), "{}", verdict);
    }

    #[test]
    fn moving_one_player_breaks_the_shape(
        (formation, mut squad) in legal_squad(),
        index in 0..SQUAD_SIZE,
        shift in 1usize..4,
    ) {
        let current = squad[index].position;
        let pos = Position::ALL.iter().position(|p| *p == current).unwrap();
        squad[index].position = Position::ALL[(pos + shift) % 4];

        let verdict = validate_squad(&squad, formation);
        prop_assert!(!verdict.is_valid());
        let mismatch = verdict.any(|v| matches!(v, Violation::FormationMismatch { .. }));
        prop_assert!(mismatch, "{}", verdict);
    }

    #[test]
    fn squads_never_pass_under_a_different_shape(
        (formation, squad) in legal_squad(),
        other in formation(),
    ) {
        prop_assume!(other.slots() != formation.slots());
        prop_assert!(!validate_squad(&squad, other).is_valid());
    }

    #[test]
    fn accepted_additions_keep_earlier_checks_passing(
        (formation, squad) in legal_squad(),
        prefix in 0..SQUAD_SIZE,
    ) {
        let rules = SquadRules::default();
        let clubs = paired_clubs(&squad);
        let current = &squad[..prefix];
        let candidate = &squad[prefix];

        let verdict = validate_player_addition(current, candidate, formation, &rules, &clubs);
        prop_assert!(verdict.is_valid(), "{}", verdict);

        let mut next = current.to_vec();
        next.push(candidate.clone());
        for entry in &next {
            let limit = formation.slots().get(entry.position);
            let filled = next.iter().filter(|e| e.position == entry.position).count();
            prop_assert!(filled <= limit);
        }
        prop_assert!(validate_budget(&next, rules.budget_cap).is_valid());
        prop_assert!(validate_club_limits(&next, &clubs, rules.max_per_club).is_valid());
    }

    #[test]
    fn four_from_one_club_always_fails((formation, squad) in legal_squad(), club_size in 4usize..=7) {
        let clubs: HashMap<_, _> = squad
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let club = if i < club_size { "solo".to_string() } else { format!("other-{i}") };
                (e.player_id.clone(), TeamId::new(club))
            })
            .collect();
        let verdict = validate_fantasy_team("Les Aigles", &squad, formation, &SquadRules::default(), &clubs);
        prop_assert!(verdict.has_category(ViolationCategory::Eligibility));
        let over_cap = verdict
            .any(|v| matches!(v, Violation::ClubLimitExceeded { count, .. } if *count == club_size));
        prop_assert!(over_cap, "{}", verdict);
    }
}

#[test]
fn cap_boundary_is_inclusive_for_every_formation() {
    for def in FORMATION_CATALOG {
        // 6 x 14.29 + 14.26 = 100.00
        let mut squad: Vec<SquadEntry> = positions_for(def.formation)
            .into_iter()
            .enumerate()
            .map(|(i, p)| SquadEntry::new(format!("p{i}"), p, Decimal::new(1429, 2)))
            .collect();
        squad[6].price = Decimal::new(1426, 2);
        squad[0].is_captain = true;

        assert!(validate_budget(&squad, Decimal::ONE_HUNDRED).is_valid());
        assert!(validate_squad(&squad, def.formation).is_valid());

        squad[6].price += Decimal::new(1, 2);
        assert!(!validate_budget(&squad, Decimal::ONE_HUNDRED).is_valid());
    }
}
