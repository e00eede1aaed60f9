use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    db::Database,
    errors::{AppError, AppResult},
    repositories::{LessonRepository, SupabaseLessonRepository},
    services::{GeminiModelService, QuizDraftService, QuizModel},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_draft_service: Arc<QuizDraftService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config)?;

        let lesson_repository: Arc<dyn LessonRepository> =
            Arc::new(SupabaseLessonRepository::new(&db, config.lessons_table.clone()));
        let model: Arc<dyn QuizModel> = Arc::new(
            GeminiModelService::new(&config).map_err(|e| AppError::ConfigError(e.to_string()))?,
        );

        Ok(Self::with_components(config, lesson_repository, model))
    }

    /// Wires the drafting service around the given collaborators.
    pub fn with_components(
        config: Config,
        lesson_repository: Arc<dyn LessonRepository>,
        model: Arc<dyn QuizModel>,
    ) -> Self {
        let quiz_draft_service = Arc::new(QuizDraftService::new(
            lesson_repository,
            model,
            config.draft_validation,
            Duration::from_secs(config.generation_timeout_secs),
        ));

        Self {
            quiz_draft_service,
            config: Arc::new(config),
        }
    }
}
