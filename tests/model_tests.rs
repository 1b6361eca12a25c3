//! Enum membership and wire-format checks for the entity models.

use horror_liveops_server::db::models::{MatchReport, Role, UnlockType};
use horror_liveops_server::db::StoreError;

#[test]
fn role_parses_known_values() {
    assert_eq!("killer".parse::<Role>().unwrap(), Role::Killer);
    assert_eq!("survivor".parse::<Role>().unwrap(), Role::Survivor);
}

#[test]
fn role_rejects_unknown_values() {
    let err = "spectator".parse::<Role>().unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn unlock_type_parses_known_values() {
    assert_eq!("perk".parse::<UnlockType>().unwrap(), UnlockType::Perk);
    assert_eq!(
        "cosmetic".parse::<UnlockType>().unwrap(),
        UnlockType::Cosmetic
    );
}

#[test]
fn unlock_type_rejects_unknown_values() {
    let err = "weapon".parse::<UnlockType>().unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
}

#[test]
fn display_matches_wire_format() {
    assert_eq!(Role::Killer.to_string(), "killer");
    assert_eq!(UnlockType::Cosmetic.to_string(), "cosmetic");
    assert_eq!(
        serde_json::to_string(&Role::Survivor).unwrap(),
        "\"survivor\""
    );
}

#[test]
fn report_deserializes_from_game_server_payload() {
    let payload = r#"{
        "match_id": "m-2024-10-31-0042",
        "duration_seconds": 612,
        "killer_win": true,
        "players": [
            { "player_id": "k1", "role": "killer", "perks_used": ["sloppy_butcher"] },
            { "player_id": "s1", "role": "survivor" }
        ]
    }"#;

    let report: MatchReport = serde_json::from_str(payload).expect("payload should parse");
    assert_eq!(report.players.len(), 2);
    assert_eq!(report.players[0].role, Role::Killer);
    // perks_used defaults to empty when a client omits it
    assert!(report.players[1].perks_used.is_empty());
    assert!(report.validate(5, 4).is_ok());
}

#[test]
fn report_rejects_bad_role_in_payload() {
    let payload = r#"{
        "match_id": "m-1",
        "duration_seconds": 60,
        "killer_win": false,
        "players": [ { "player_id": "x", "role": "spectator" } ]
    }"#;

    assert!(serde_json::from_str::<MatchReport>(payload).is_err());
}
