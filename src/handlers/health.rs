use actix_web::HttpResponse;
use serde_json::json;
use chrono::Utc;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "service": "decentralized-file-storage-backend",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
