//! Designer-facing balance stats, cached in Redis with a short TTL.

use actix_web::{get, web, HttpResponse};
use redis::{AsyncCommands, Client as RedisClient};
use serde::Deserialize;
use sqlx::PgPool;

use crate::config::settings;
use crate::db::{matches_repo, StoreError};
use crate::stats;

#[derive(Deserialize)]
pub struct PerkParams {
    pub limit: Option<i64>,
}

async fn cached(redis: &RedisClient, key: &str) -> Option<String> {
    let mut conn = redis.get_multiplexed_async_connection().await.ok()?;
    conn.get::<_, Option<String>>(key).await.ok().flatten()
}

async fn store(redis: &RedisClient, key: &str, body: &str) {
    // Cache writes are best-effort.
    if let Ok(mut conn) = redis.get_multiplexed_async_connection().await {
        let _: () = conn
            .set_ex(key, body, settings().stats_cache_ttl)
            .await
            .unwrap_or(());
    }
}

/// GET /api/stats/winrates
///
/// Are killers winning too often or too rarely? The balance team reads this.
#[get("/stats/winrates")]
pub async fn winrates(
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> Result<HttpResponse, StoreError> {
    let key = "stats:winrates";
    if let Some(body) = cached(&redis, key).await {
        return Ok(HttpResponse::Ok()
            .content_type("application/json")
            .body(body));
    }

    let (killer_wins, total) = matches_repo::outcome_counts(&db).await?;
    let rates = stats::WinRates::from_counts(killer_wins, total);

    let body = serde_json::to_string(&rates)?;
    store(&redis, key, &body).await;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// GET /api/stats/perks?limit=N — top perk pick counts across all rosters.
#[get("/stats/perks")]
pub async fn perks(
    web::Query(params): web::Query<PerkParams>,
    db: web::Data<PgPool>,
    redis: web::Data<RedisClient>,
) -> Result<HttpResponse, StoreError> {
    let cap = settings().recent_limit_cap;
    let limit = params.limit.unwrap_or(20).clamp(1, cap);

    let key = format!("stats:perks:{limit}");
    if let Some(body) = cached(&redis, &key).await {
        return Ok(HttpResponse::Ok()
            .content_type("application/json")
            .body(body));
    }

    let rows = matches_repo::perk_usage(&db, limit).await?;
    let rosters = matches_repo::roster_count(&db).await?;
    let usage = stats::perk_usage(rows, rosters);

    let body = serde_json::to_string(&usage)?;
    store(&redis, &key, &body).await;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(winrates).service(perks);
}
