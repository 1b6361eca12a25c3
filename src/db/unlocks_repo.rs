use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::error::StoreError;
use crate::db::models::{Unlock, UnlockType};
use crate::db::players_repo;

/// Grants a piece of content to a player. Ownership is unique per
/// (player, unlock) pair, so a second grant of the same content fails.
pub async fn grant(
    db: &PgPool,
    player_id: &str,
    unlock_id: &str,
    unlock_type: UnlockType,
) -> Result<Unlock, StoreError> {
    if unlock_id.trim().is_empty() {
        return Err(StoreError::Validation("unlock_id must not be empty".into()));
    }
    if !players_repo::exists(db, player_id).await? {
        return Err(StoreError::NotFound(format!("player {player_id}")));
    }

    let inserted = sqlx::query_as::<_, (Uuid, DateTime<Utc>)>(
        r#"
        INSERT INTO unlocks (player_id, unlock_id, unlock_type)
        VALUES ($1, $2, $3)
        ON CONFLICT (player_id, unlock_id) DO NOTHING
        RETURNING id, granted_at
        "#,
    )
    .bind(player_id)
    .bind(unlock_id)
    .bind(unlock_type.as_str())
    .fetch_optional(db)
    .await?;

    let (id, granted_at) = inserted.ok_or_else(|| {
        StoreError::Validation(format!("player {player_id} already owns {unlock_id}"))
    })?;

    Ok(Unlock {
        id,
        player_id: player_id.to_owned(),
        unlock_id: unlock_id.to_owned(),
        unlock_type,
        granted_at,
    })
}

/// Everything a player owns, optionally filtered by unlock type.
pub async fn for_player(
    db: &PgPool,
    player_id: &str,
    filter: Option<UnlockType>,
) -> Result<Vec<Unlock>, StoreError> {
    if !players_repo::exists(db, player_id).await? {
        return Err(StoreError::NotFound(format!("player {player_id}")));
    }

    let rows = sqlx::query_as::<_, (Uuid, String, String, String, DateTime<Utc>)>(
        r#"
        SELECT id, player_id, unlock_id, unlock_type, granted_at
          FROM unlocks
         WHERE player_id = $1
           AND ($2::TEXT IS NULL OR unlock_type = $2)
         ORDER BY granted_at, unlock_id
        "#,
    )
    .bind(player_id)
    .bind(filter.map(|t| t.as_str()))
    .fetch_all(db)
    .await?;

    rows.into_iter()
        .map(|(id, player_id, unlock_id, unlock_type, granted_at)| {
            Ok(Unlock {
                id,
                player_id,
                unlock_id,
                unlock_type: unlock_type.parse()?,
                granted_at,
            })
        })
        .collect()
}
