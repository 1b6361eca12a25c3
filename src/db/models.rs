use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::db::error::StoreError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Player {
    pub id: String,
    pub total_xp: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Match {
    pub id: String,
    pub duration_seconds: i32,
    pub killer_win: bool,
    pub created_at: DateTime<Utc>,
}

/// One roster row: a player's side and loadout in a single match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchPlayer {
    pub id: Uuid,
    pub match_id: String,
    pub player_id: String,
    pub role: Role,
    pub perks_used: Vec<String>,
}

/// A match together with its full roster.
#[derive(Debug, Clone, Serialize)]
pub struct MatchDetail {
    #[serde(flatten)]
    pub summary: Match,
    pub players: Vec<MatchPlayer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Unlock {
    pub id: Uuid,
    pub player_id: String,
    pub unlock_id: String,
    pub unlock_type: UnlockType,
    pub granted_at: DateTime<Utc>,
}

/// The two opposing sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Killer,
    Survivor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Killer => "killer",
            Role::Survivor => "survivor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "killer" => Ok(Role::Killer),
            "survivor" => Ok(Role::Survivor),
            other => Err(StoreError::Validation(format!("unknown role: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlockType {
    Perk,
    Cosmetic,
}

impl UnlockType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnlockType::Perk => "perk",
            UnlockType::Cosmetic => "cosmetic",
        }
    }
}

impl fmt::Display for UnlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnlockType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perk" => Ok(UnlockType::Perk),
            "cosmetic" => Ok(UnlockType::Cosmetic),
            other => Err(StoreError::Validation(format!(
                "unknown unlock type: {other}"
            ))),
        }
    }
}

/// Post-game report as sent by the game servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    pub match_id: String,
    pub duration_seconds: i32,
    pub killer_win: bool,
    pub players: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub player_id: String,
    pub role: Role,
    #[serde(default)]
    pub perks_used: Vec<String>,
}

impl MatchReport {
    /// Checks everything that can be checked without touching the database.
    /// Caps come from [`crate::config::Settings`].
    pub fn validate(&self, max_roster: usize, perk_slots: usize) -> Result<(), StoreError> {
        if self.match_id.trim().is_empty() {
            return Err(StoreError::Validation("match_id must not be empty".into()));
        }
        if self.duration_seconds <= 0 {
            return Err(StoreError::Validation(
                "duration_seconds must be positive".into(),
            ));
        }
        if self.players.is_empty() {
            return Err(StoreError::Validation("roster must not be empty".into()));
        }
        if self.players.len() > max_roster {
            return Err(StoreError::Validation(format!(
                "roster exceeds {max_roster} players"
            )));
        }

        let killers = self
            .players
            .iter()
            .filter(|p| p.role == Role::Killer)
            .count();
        if killers != 1 {
            return Err(StoreError::Validation(
                "a match must have exactly one killer".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.players {
            if entry.player_id.trim().is_empty() {
                return Err(StoreError::Validation("player_id must not be empty".into()));
            }
            if !seen.insert(entry.player_id.as_str()) {
                return Err(StoreError::Validation(format!(
                    "player {} appears twice in the roster",
                    entry.player_id
                )));
            }
            if entry.perks_used.len() > perk_slots {
                return Err(StoreError::Validation(format!(
                    "player {} carries more than {perk_slots} perks",
                    entry.player_id
                )));
            }
        }

        Ok(())
    }
}
