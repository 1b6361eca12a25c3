//! Match-report validation rules, checked without a database.

use horror_liveops_server::db::models::{MatchReport, Role, RosterEntry};
use horror_liveops_server::db::StoreError;

const MAX_ROSTER: usize = 5;
const PERK_SLOTS: usize = 4;

fn entry(id: &str, role: Role, perks: &[&str]) -> RosterEntry {
    RosterEntry {
        player_id: id.into(),
        role,
        perks_used: perks.iter().map(|p| p.to_string()).collect(),
    }
}

fn full_lobby() -> MatchReport {
    MatchReport {
        match_id: "m-1".into(),
        duration_seconds: 540,
        killer_win: false,
        players: vec![
            entry("k1", Role::Killer, &["brutal_strength"]),
            entry("s1", Role::Survivor, &["sprint_burst", "adrenaline"]),
            entry("s2", Role::Survivor, &[]),
            entry("s3", Role::Survivor, &["self_care"]),
            entry("s4", Role::Survivor, &[]),
        ],
    }
}

fn assert_validation(result: Result<(), StoreError>) {
    assert!(
        matches!(&result, Err(StoreError::Validation(_))),
        "expected a validation error, got {result:?}"
    );
}

#[test]
fn full_lobby_passes() {
    assert!(full_lobby().validate(MAX_ROSTER, PERK_SLOTS).is_ok());
}

#[test]
fn one_on_one_passes() {
    let mut report = full_lobby();
    report.players.truncate(2);
    assert!(report.validate(MAX_ROSTER, PERK_SLOTS).is_ok());
}

#[test]
fn zero_duration_rejected() {
    let mut report = full_lobby();
    report.duration_seconds = 0;
    assert_validation(report.validate(MAX_ROSTER, PERK_SLOTS));
}

#[test]
fn empty_roster_rejected() {
    let mut report = full_lobby();
    report.players.clear();
    assert_validation(report.validate(MAX_ROSTER, PERK_SLOTS));
}

#[test]
fn oversized_roster_rejected() {
    let mut report = full_lobby();
    report.players.push(entry("s5", Role::Survivor, &[]));
    assert_validation(report.validate(MAX_ROSTER, PERK_SLOTS));
}

#[test]
fn two_killers_rejected() {
    let mut report = full_lobby();
    report.players[1] = entry("k2", Role::Killer, &[]);
    assert_validation(report.validate(MAX_ROSTER, PERK_SLOTS));
}

#[test]
fn survivors_only_rejected() {
    let mut report = full_lobby();
    report.players[0] = entry("s0", Role::Survivor, &[]);
    assert_validation(report.validate(MAX_ROSTER, PERK_SLOTS));
}

#[test]
fn duplicate_player_rejected() {
    let mut report = full_lobby();
    report.players[2] = entry("s1", Role::Survivor, &[]);
    assert_validation(report.validate(MAX_ROSTER, PERK_SLOTS));
}

#[test]
fn overloaded_perk_slots_rejected() {
    let mut report = full_lobby();
    report.players[1] = entry(
        "s1",
        Role::Survivor,
        &["sprint_burst", "adrenaline", "self_care", "lithe", "dead_hard"],
    );
    assert_validation(report.validate(MAX_ROSTER, PERK_SLOTS));
}

#[test]
fn blank_ids_rejected() {
    let mut report = full_lobby();
    report.match_id = "  ".into();
    assert_validation(report.validate(MAX_ROSTER, PERK_SLOTS));

    let mut report = full_lobby();
    report.players[3] = entry("", Role::Survivor, &[]);
    assert_validation(report.validate(MAX_ROSTER, PERK_SLOTS));
}
