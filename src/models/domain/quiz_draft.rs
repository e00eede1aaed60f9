use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Typed view of a generated quiz. Only strict validation decodes into it; the lenient
/// path hands the model's JSON back untouched.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct QuizDraft {
    pub quiz_title: String,
    pub description: String,
    #[validate(length(min = 1), nested)]
    pub questions: Vec<DraftQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate, JsonSchema)]
pub struct DraftQuestion {
    pub content: String,
    #[validate(
        length(equal = 5),
        custom(function = "exactly_one_correct")
    )]
    pub options: Vec<DraftOption>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct DraftOption {
    pub content: String,
    pub is_correct: bool,
}

#[allow(clippy::ptr_arg)]
fn exactly_one_correct(options: &Vec<DraftOption>) -> Result<(), ValidationError> {
    let correct = options.iter().filter(|o| o.is_correct).count();
    if correct == 1 {
        Ok(())
    } else {
        let mut err = ValidationError::new("exactly_one_correct");
        err.message = Some(format!("expected exactly one correct option, found {}", correct).into());
        Err(err)
    }
}
