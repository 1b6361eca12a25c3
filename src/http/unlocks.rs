//! Content-grant endpoints.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::models::UnlockType;
use crate::db::{unlocks_repo, StoreError};
use crate::http::auth::ApiKey;

#[derive(Deserialize)]
pub struct GrantRequest {
    pub player_id: String,
    pub unlock_id: String,
    pub unlock_type: UnlockType,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub unlock_type: Option<String>,
}

/// POST /api/unlocks
#[post("/unlocks")]
pub async fn grant(
    _auth: ApiKey,
    info: web::Json<GrantRequest>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, StoreError> {
    let unlock =
        unlocks_repo::grant(&db, &info.player_id, &info.unlock_id, info.unlock_type).await?;
    Ok(HttpResponse::Created().json(unlock))
}

/// GET /api/unlocks/{player_id}?unlock_type=perk|cosmetic
#[get("/unlocks/{player_id}")]
pub async fn list(
    path: web::Path<String>,
    web::Query(params): web::Query<ListParams>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, StoreError> {
    let filter = params
        .unlock_type
        .as_deref()
        .map(str::parse::<UnlockType>)
        .transpose()?;

    let unlocks = unlocks_repo::for_player(&db, &path.into_inner(), filter).await?;
    Ok(HttpResponse::Ok().json(unlocks))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(grant).service(list);
}
