use sqlx::PgPool;

use crate::db::error::StoreError;
use crate::db::models::Player;

/// Registers a new player. Ids come from the game platform, so the server
/// never mints them.
pub async fn register(db: &PgPool, player_id: &str) -> Result<Player, StoreError> {
    if player_id.trim().is_empty() {
        return Err(StoreError::Validation("player_id must not be empty".into()));
    }

    let inserted = sqlx::query_as::<_, Player>(
        r#"
        INSERT INTO players (id)
        VALUES ($1)
        ON CONFLICT (id) DO NOTHING
        RETURNING id, total_xp, created_at
        "#,
    )
    .bind(player_id)
    .fetch_optional(db)
    .await?;

    inserted.ok_or_else(|| StoreError::Validation(format!("player {player_id} already registered")))
}

pub async fn get(db: &PgPool, player_id: &str) -> Result<Player, StoreError> {
    sqlx::query_as::<_, Player>("SELECT id, total_xp, created_at FROM players WHERE id = $1")
        .bind(player_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| StoreError::NotFound(format!("player {player_id}")))
}

/// Returns true if the given player is registered.
pub async fn exists(db: &PgPool, player_id: &str) -> Result<bool, StoreError> {
    let known = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)")
        .bind(player_id)
        .fetch_one(db)
        .await?;
    Ok(known)
}

/// Atomically adds XP and returns the new total. Grants are additive and
/// non-negative, which keeps total_xp monotonic over a player's lifetime.
pub async fn grant_xp(db: &PgPool, player_id: &str, amount: i64) -> Result<i64, StoreError> {
    if amount < 0 {
        return Err(StoreError::Validation(
            "xp grant must be non-negative".into(),
        ));
    }

    sqlx::query_scalar::<_, i64>(
        "UPDATE players
             SET total_xp = total_xp + $2
           WHERE id = $1
       RETURNING total_xp",
    )
    .bind(player_id)
    .bind(amount)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| StoreError::NotFound(format!("player {player_id}")))
}
