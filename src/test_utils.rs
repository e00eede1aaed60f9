#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::domain::Lesson;

    /// The two lessons of course 42, "Linux Basics"
    pub fn linux_lessons() -> Vec<Lesson> {
        vec![
            Lesson::new("Filesystem", "Everything is a file."),
            Lesson::new("Permissions", "chmod changes the mode bits."),
        ]
    }

    /// A well-formed draft: `questions` questions of 5 options, the second one correct.
    pub fn quiz_json(questions: usize) -> Value {
        let questions: Vec<Value> = (0..questions)
            .map(|i| {
                json!({
                    "content": format!("Question {}?", i + 1),
                    "options": (0..5)
                        .map(|o| json!({ "content": format!("Option {}", o), "is_correct": o == 1 }))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        json!({
            "quiz_title": "Avaliação: Linux Basics",
            "description": "Teste auditado baseado no material do curso.",
            "questions": questions
        })
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_linux_lessons() {
        let lessons = linux_lessons();
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].title, "Filesystem");
    }

    #[test]
    fn test_fixtures_quiz_json_shape() {
        let quiz = quiz_json(10);
        let questions = quiz["questions"].as_array().unwrap();

        assert_eq!(questions.len(), 10);
        for question in questions {
            let options = question["options"].as_array().unwrap();
            assert_eq!(options.len(), 5);
            assert_eq!(options.iter().filter(|o| o["is_correct"] == true).count(), 1);
        }
    }
}
