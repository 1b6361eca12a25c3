//! Ingest API-key guard for mutating endpoints.

use actix_web::{
    dev::Payload, error::ErrorUnauthorized, FromRequest, HttpRequest, Result as ActixResult,
};
use futures_util::future::{ready, Ready};
use std::env;

/// Extractor that checks the `X-Api-Key` header against `INGEST_API_KEY`.
/// Game servers hold the key; read-only designer endpoints stay open.
#[derive(Debug, Clone)]
pub struct ApiKey;

impl FromRequest for ApiKey {
    type Error = actix_web::Error;
    type Future = Ready<ActixResult<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _pl: &mut Payload) -> Self::Future {
        let res = (|| {
            let expected =
                env::var("INGEST_API_KEY").map_err(|_| ErrorUnauthorized("server mis-config"))?;

            let presented = req
                .headers()
                .get("X-Api-Key")
                .and_then(|v| v.to_str().ok())
                .ok_or_else(|| ErrorUnauthorized("missing X-Api-Key header"))?;

            if presented != expected {
                return Err(ErrorUnauthorized("invalid API key"));
            }

            Ok(ApiKey)
        })();

        ready(res)
    }
}
