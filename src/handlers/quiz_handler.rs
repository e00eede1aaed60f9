use std::{any::Any, panic::AssertUnwindSafe};

use actix_web::{post, web, HttpRequest, HttpResponse};
use futures::FutureExt;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::QuizPreviewRequest, response::PreviewResponse},
    services::http_helpers::success_json,
};

/// Drafts a quiz for the editor to review. Nothing is saved.
#[post("/generate-quiz-preview")]
pub async fn generate_quiz_preview(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<QuizPreviewRequest>,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req);
    let QuizPreviewRequest { course_id, title } = request.into_inner();
    log::info!(
        "[{}] Preview requested for '{}' (course {})",
        request_id,
        title,
        course_id
    );

    let outcome = AssertUnwindSafe(state.quiz_draft_service.draft_quiz(course_id, &title))
        .catch_unwind()
        .await
        .map_err(|panic| {
            let message = panic_message(panic.as_ref());
            log::error!("[{}] Drafting panicked: {}", request_id, message);
            AppError::InternalError(message)
        })?;

    match outcome {
        Ok(draft) => Ok(success_json(PreviewResponse::new(draft))),
        Err(err) => {
            log::warn!("[{}] Drafting failed: {:?}", request_id, err);
            Err(err.into())
        }
    }
}

/// Body extractor config answering malformed or incomplete bodies with 422.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected error".to_string()
    }
}
