use actix_web::{http::StatusCode, HttpResponse};

use crate::models::dto::response::DetailResponse;

/// Creates a `{"detail": ...}` error response with the given status
pub fn detail_response(status: StatusCode, message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(DetailResponse {
        detail: message.to_string(),
    })
}

/// Creates a success JSON response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(data)
}
