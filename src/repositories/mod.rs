pub mod lesson_repository;

pub use lesson_repository::{LessonRepository, SupabaseLessonRepository};
