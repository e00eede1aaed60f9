use actix_web::{get, HttpResponse};

use crate::{models::dto::response::HealthResponse, services::http_helpers::success_json};

#[get("/")]
pub async fn health_check() -> HttpResponse {
    success_json(HealthResponse {
        status: "online",
        mode: "preview_mode",
    })
}
