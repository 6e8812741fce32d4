// src/api/handlers/health.rs
use actix_web::{HttpResponse, Result};
use serde_json::json;

pub async fn ping() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "message": "pong"
    })))
}
