//! Player registration & progression endpoints.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;

use crate::db::models::{Player, Unlock};
use crate::db::{players_repo, unlocks_repo, StoreError};
use crate::http::auth::ApiKey;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub player_id: String,
}

#[derive(Deserialize)]
pub struct XpGrantRequest {
    pub amount: i64,
}

/// The "player with their unlocks" view.
#[derive(Serialize)]
pub struct PlayerWithUnlocks {
    #[serde(flatten)]
    pub player: Player,
    pub unlocks: Vec<Unlock>,
}

/// POST /api/players
#[post("/players")]
pub async fn register(
    _auth: ApiKey,
    info: web::Json<RegisterRequest>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, StoreError> {
    let player = players_repo::register(&db, &info.player_id).await?;
    Ok(HttpResponse::Created().json(player))
}

/// GET /api/players/{id}
#[get("/players/{id}")]
pub async fn get_player(
    path: web::Path<String>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, StoreError> {
    let player = players_repo::get(&db, &path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(player))
}

/// POST /api/players/{id}/xp
#[post("/players/{id}/xp")]
pub async fn grant_xp(
    _auth: ApiKey,
    path: web::Path<String>,
    info: web::Json<XpGrantRequest>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, StoreError> {
    let player_id = path.into_inner();
    let total_xp = players_repo::grant_xp(&db, &player_id, info.amount).await?;
    Ok(HttpResponse::Ok().json(json!({ "player_id": player_id, "total_xp": total_xp })))
}

/// GET /api/players/{id}/unlocks
#[get("/players/{id}/unlocks")]
pub async fn player_unlocks(
    path: web::Path<String>,
    db: web::Data<PgPool>,
) -> Result<HttpResponse, StoreError> {
    let player = players_repo::get(&db, &path.into_inner()).await?;
    let unlocks = unlocks_repo::for_player(&db, &player.id, None).await?;
    Ok(HttpResponse::Ok().json(PlayerWithUnlocks { player, unlocks }))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(grant_xp)
        .service(player_unlocks)
        .service(get_player);
}
