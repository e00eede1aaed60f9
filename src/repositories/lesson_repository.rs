use async_trait::async_trait;

use crate::{
    db::Database,
    errors::{DraftError, DraftResult},
    models::domain::Lesson,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LessonRepository: Send + Sync {
    /// Every lesson of the course, in the order the store returns them.
    async fn find_by_course(&self, course_id: i64) -> DraftResult<Vec<Lesson>>;
}

pub struct SupabaseLessonRepository {
    db: Database,
    table: String,
}

impl SupabaseLessonRepository {
    pub fn new(db: &Database, table: impl Into<String>) -> Self {
        Self {
            db: db.clone(),
            table: table.into(),
        }
    }
}

fn course_filter(course_id: i64) -> [(&'static str, String); 2] {
    [
        ("select", "title,content".to_string()),
        ("course_id", format!("eq.{}", course_id)),
    ]
}

#[async_trait]
impl LessonRepository for SupabaseLessonRepository {
    async fn find_by_course(&self, course_id: i64) -> DraftResult<Vec<Lesson>> {
        let response = self
            .db
            .select(&self.table)
            .query(&course_filter(course_id))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DraftError::DataSource(format!("{}: {}", status, body)));
        }

        let lessons: Vec<Lesson> = response.json().await?;
        log::info!(
            "Fetched {} lessons for course {} from '{}'",
            lessons.len(),
            course_id,
            self.table
        );
        Ok(lessons)
    }
}
