pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use quiz_handler::{generate_quiz_preview, json_config};

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health_check)
        .service(generate_quiz_preview);
}
