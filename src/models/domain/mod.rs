pub mod lesson;
pub mod quiz_draft;
pub use lesson::Lesson;
pub use quiz_draft::{DraftOption, DraftQuestion, QuizDraft};
