use serde::{Deserialize, Serialize};

/// Body of `POST /generate-quiz-preview`, as sent by the quiz editor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizPreviewRequest {
    pub course_id: i64,
    pub title: String,
}
