//! Pure aggregation helpers behind the designer-facing stats endpoints.

use serde::Serialize;

/// Killer vs. survivor win rates over completed matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinRates {
    pub matches: i64,
    pub killer_win_rate: f64,
    pub survivor_win_rate: f64,
}

impl WinRates {
    /// Build from (killer wins, total matches). Zero matches yields zero
    /// rates rather than a division error.
    pub fn from_counts(killer_wins: i64, matches: i64) -> Self {
        if matches <= 0 {
            return WinRates {
                matches: 0,
                killer_win_rate: 0.0,
                survivor_win_rate: 0.0,
            };
        }
        let killer = killer_wins as f64 / matches as f64;
        WinRates {
            matches,
            killer_win_rate: killer,
            survivor_win_rate: 1.0 - killer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerkUsage {
    pub perk: String,
    pub uses: i64,
    pub pick_rate: f64,
}

/// Attaches a pick rate (uses / roster rows) to raw per-perk counts. Order of
/// the input rows is preserved.
pub fn perk_usage(rows: Vec<(String, i64)>, roster_rows: i64) -> Vec<PerkUsage> {
    rows.into_iter()
        .map(|(perk, uses)| {
            let pick_rate = if roster_rows > 0 {
                uses as f64 / roster_rows as f64
            } else {
                0.0
            };
            PerkUsage {
                perk,
                uses,
                pick_rate,
            }
        })
        .collect()
}
