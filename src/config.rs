//! Runtime configuration for the liveops server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Seconds a cached stats payload stays valid in Redis.
    pub stats_cache_ttl: u64,
    /// Upper bound for `?limit=` on the recent-matches listing.
    pub recent_limit_cap: i64,
    /// Largest roster a match report may carry (one killer plus survivors).
    pub max_roster: usize,
    /// Perk slots per loadout.
    pub perk_slots: usize,
}

impl Settings {
    fn from_env() -> Self {
        let stats_cache_ttl = env::var("STATS_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let recent_limit_cap = env::var("RECENT_LIMIT_CAP")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(100);

        let max_roster = env::var("MAX_ROSTER")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(5); // 1 killer + 4 survivors

        let perk_slots = env::var("PERK_SLOTS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(4);

        Settings {
            stats_cache_ttl,
            recent_limit_cap,
            max_roster,
            perk_slots,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
