use std::{sync::Arc, time::Duration};

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::{
    config::DraftValidation,
    constants::quiz_prompt::{build_context, build_quiz_prompt},
    errors::{DraftError, DraftResult, ModelError},
    models::domain::QuizDraft,
    repositories::LessonRepository,
    services::model_service::QuizModel,
};

const MODEL_LISTING_TIMEOUT: Duration = Duration::from_secs(10);

/// Turns a course's lessons into an unsaved quiz draft. One attempt per call, nothing cached.
pub struct QuizDraftService {
    lessons: Arc<dyn LessonRepository>,
    model: Arc<dyn QuizModel>,
    validation: DraftValidation,
    generation_timeout: Duration,
    listing_timeout: Duration,
}

impl QuizDraftService {
    pub fn new(
        lessons: Arc<dyn LessonRepository>,
        model: Arc<dyn QuizModel>,
        validation: DraftValidation,
        generation_timeout: Duration,
    ) -> Self {
        Self {
            lessons,
            model,
            validation,
            generation_timeout,
            listing_timeout: MODEL_LISTING_TIMEOUT,
        }
    }

    /// Bounds the diagnostic model listing that follows an unknown-model failure.
    pub fn with_listing_timeout(mut self, listing_timeout: Duration) -> Self {
        self.listing_timeout = listing_timeout;
        self
    }

    pub async fn draft_quiz(&self, course_id: i64, title: &str) -> DraftResult<Value> {
        log::info!("Fetching lessons for '{}' (course {})", title, course_id);

        let lessons = self.lessons.find_by_course(course_id).await?;
        if lessons.is_empty() {
            return Err(DraftError::NoLessons);
        }

        let context = build_context(&lessons);
        let prompt = build_quiz_prompt(&context, title);

        let reply = self.generate(&prompt).await?;
        let draft = parse_draft(&reply)?;

        if self.validation == DraftValidation::Strict {
            validate_draft(&draft)?;
        }

        log::info!("Quiz draft generated for course {}", course_id);
        Ok(draft)
    }

    async fn generate(&self, prompt: &str) -> DraftResult<String> {
        match tokio::time::timeout(self.generation_timeout, self.model.generate(prompt)).await {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(err)) => {
                log::error!("Quiz generation failed: {}", err);
                if matches!(err, ModelError::UnknownModel { .. }) {
                    self.log_available_models().await;
                }
                Err(err.into())
            }
            Err(_) => Err(DraftError::Generation(format!(
                "model call timed out after {:?}",
                self.generation_timeout
            ))),
        }
    }

    async fn log_available_models(&self) {
        match tokio::time::timeout(self.listing_timeout, self.model.list_models()).await {
            Ok(Ok(models)) => log::info!("Models available for this key: {:?}", models),
            Ok(Err(err)) => log::warn!("Could not list available models: {}", err),
            Err(_) => log::warn!(
                "Model listing gave no answer within {:?}",
                self.listing_timeout
            ),
        }
    }
}

/// Parses the model reply. Any valid JSON is accepted as is.
pub fn parse_draft(reply: &str) -> DraftResult<Value> {
    serde_json::from_str(reply)
        .map_err(|e| DraftError::Generation(format!("model reply is not valid JSON: {}", e)))
}

pub fn validate_draft(draft: &Value) -> DraftResult<()> {
    let typed = QuizDraft::deserialize(draft).map_err(|e| DraftError::InvalidDraft(e.to_string()))?;
    typed
        .validate()
        .map_err(|e| DraftError::InvalidDraft(e.to_string()))
}
