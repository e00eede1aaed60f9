pub mod http_helpers;
pub mod model_service;
pub mod quiz_draft_service;

pub use model_service::{GeminiModelService, QuizModel};
pub use quiz_draft_service::QuizDraftService;
