//! Match ingest & history endpoints.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::config::settings;
use crate::db::models::MatchReport;
use crate::db::{matches_repo, StoreError};
use crate::http::auth::ApiKey;

#[derive(Deserialize)]
pub struct RecentParams {
    pub limit: Option<i64>,
}

/// POST /api/matches — called by game servers once a match completes.
#[post("/matches")]
pub async fn ingest(
    _auth: ApiKey,
    report: web::Json<MatchReport>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, StoreError> {
    let cfg = settings();
    report.validate(cfg.max_roster, cfg.perk_slots)?;

    let detail = matches_repo::ingest(&db, &report).await?;
    Ok(HttpResponse::Created().json(detail))
}

/// GET /api/matches/recent?limit=N
#[get("/matches/recent")]
pub async fn recent(
    web::Query(params): web::Query<RecentParams>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, StoreError> {
    let cap = settings().recent_limit_cap;
    let limit = params.limit.unwrap_or(cap).clamp(1, cap);

    let rows = matches_repo::recent(&db, limit).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/matches/{id}
#[get("/matches/{id}")]
pub async fn get_match(
    path: web::Path<String>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, StoreError> {
    let detail = matches_repo::get(&db, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(detail))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // `recent` must be mounted before the `{id}` catch-all.
    cfg.service(ingest).service(recent).service(get_match);
}
