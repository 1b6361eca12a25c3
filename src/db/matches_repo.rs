use sqlx::PgPool;
use uuid::Uuid;

use crate::db::error::StoreError;
use crate::db::models::{Match, MatchDetail, MatchPlayer, MatchReport};

/// Persists a completed match and its roster in one transaction. Matches are
/// append-only: a duplicate match id is rejected rather than overwritten.
pub async fn ingest(db: &PgPool, report: &MatchReport) -> Result<MatchDetail, StoreError> {
    let mut tx = db.begin().await?;

    let summary = sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (id, duration_seconds, killer_win)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO NOTHING
        RETURNING id, duration_seconds, killer_win, created_at
        "#,
    )
    .bind(&report.match_id)
    .bind(report.duration_seconds)
    .bind(report.killer_win)
    .fetch_optional(&mut *tx)
    .await?
    .ok_or_else(|| {
        StoreError::Validation(format!("match {} already ingested", report.match_id))
    })?;

    let mut players = Vec::with_capacity(report.players.len());
    for entry in &report.players {
        let known =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)")
                .bind(&entry.player_id)
                .fetch_one(&mut *tx)
                .await?;
        if !known {
            // Early return drops the transaction and rolls everything back.
            return Err(StoreError::NotFound(format!("player {}", entry.player_id)));
        }

        let row_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO match_players (match_id, player_id, role, perks_used)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&report.match_id)
        .bind(&entry.player_id)
        .bind(entry.role.as_str())
        .bind(&entry.perks_used)
        .fetch_one(&mut *tx)
        .await?;

        players.push(MatchPlayer {
            id: row_id,
            match_id: report.match_id.clone(),
            player_id: entry.player_id.clone(),
            role: entry.role,
            perks_used: entry.perks_used.clone(),
        });
    }

    tx.commit().await?;
    Ok(MatchDetail { summary, players })
}

pub async fn get(db: &PgPool, match_id: &str) -> Result<MatchDetail, StoreError> {
    let summary = sqlx::query_as::<_, Match>(
        "SELECT id, duration_seconds, killer_win, created_at FROM matches WHERE id = $1",
    )
    .bind(match_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| StoreError::NotFound(format!("match {match_id}")))?;

    let rows = sqlx::query_as::<_, (Uuid, String, String, String, Vec<String>)>(
        r#"
        SELECT id, match_id, player_id, role, perks_used
          FROM match_players
         WHERE match_id = $1
         ORDER BY role, player_id
        "#,
    )
    .bind(match_id)
    .fetch_all(db)
    .await?;

    let players = rows
        .into_iter()
        .map(|(id, match_id, player_id, role, perks_used)| {
            Ok(MatchPlayer {
                id,
                match_id,
                player_id,
                role: role.parse()?,
                perks_used,
            })
        })
        .collect::<Result<Vec<_>, StoreError>>()?;

    Ok(MatchDetail { summary, players })
}

/// Newest-first match summaries, without rosters.
pub async fn recent(db: &PgPool, limit: i64) -> Result<Vec<Match>, StoreError> {
    let rows = sqlx::query_as::<_, Match>(
        r#"
        SELECT id, duration_seconds, killer_win, created_at
          FROM matches
         ORDER BY created_at DESC, id
         LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// (killer wins, total matches) over everything ingested so far.
pub async fn outcome_counts(db: &PgPool) -> Result<(i64, i64), StoreError> {
    let counts = sqlx::query_as::<_, (i64, i64)>(
        "SELECT COUNT(*) FILTER (WHERE killer_win), COUNT(*) FROM matches",
    )
    .fetch_one(db)
    .await?;
    Ok(counts)
}

/// Per-perk usage counts across all rosters, most used first.
pub async fn perk_usage(db: &PgPool, limit: i64) -> Result<Vec<(String, i64)>, StoreError> {
    let rows = sqlx::query_as::<_, (String, i64)>(
        r#"
        SELECT perk, COUNT(*) AS uses
          FROM match_players, UNNEST(perks_used) AS perk
         GROUP BY perk
         ORDER BY uses DESC, perk
         LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

/// Total number of roster rows; the denominator for pick rates.
pub async fn roster_count(db: &PgPool) -> Result<i64, StoreError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM match_players")
        .fetch_one(db)
        .await?;
    Ok(count)
}
