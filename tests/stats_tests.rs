//! Unit tests for the pure win-rate / pick-rate helpers.

use horror_liveops_server::stats::{perk_usage, WinRates};

#[test]
fn zero_matches_gives_zero_rates() {
    let rates = WinRates::from_counts(0, 0);
    assert_eq!(rates.matches, 0);
    assert_eq!(rates.killer_win_rate, 0.0);
    assert_eq!(rates.survivor_win_rate, 0.0);
}

#[test]
fn rates_are_complementary() {
    let rates = WinRates::from_counts(48, 100);
    assert_eq!(rates.matches, 100);
    assert_eq!(rates.killer_win_rate, 0.48);
    assert!(
        (rates.killer_win_rate + rates.survivor_win_rate - 1.0).abs() < 1e-12,
        "rates must sum to one"
    );
}

#[test]
fn all_killer_wins() {
    let rates = WinRates::from_counts(7, 7);
    assert_eq!(rates.killer_win_rate, 1.0);
    assert_eq!(rates.survivor_win_rate, 0.0);
}

#[test]
fn pick_rate_uses_roster_denominator() {
    let rows = vec![("sprint_burst".to_string(), 3), ("self_care".to_string(), 1)];
    let usage = perk_usage(rows, 4);

    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0].perk, "sprint_burst");
    assert_eq!(usage[0].uses, 3);
    assert_eq!(usage[0].pick_rate, 0.75);
    assert_eq!(usage[1].pick_rate, 0.25);
}

#[test]
fn pick_rate_with_no_rosters_is_zero() {
    let usage = perk_usage(vec![("sloppy_butcher".to_string(), 0)], 0);
    assert_eq!(usage[0].pick_rate, 0.0);
}
