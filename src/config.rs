use std::{env, str::FromStr};

use secrecy::SecretString;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// How much the drafting service trusts the structure of the model output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftValidation {
    /// Any syntactically valid JSON is handed back unchanged.
    #[default]
    Lenient,
    /// The JSON must decode into a `QuizDraft` with 5 options and one correct answer per question.
    Strict,
}

impl FromStr for DraftValidation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(DraftValidation::Lenient),
            "strict" => Ok(DraftValidation::Strict),
            other => Err(AppError::ConfigError(format!(
                "DRAFT_VALIDATION must be 'lenient' or 'strict', got '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_key: SecretString,
    pub lessons_table: String,
    pub gemini_api_key: SecretString,
    pub gemini_api_base: String,
    pub gemini_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub generation_timeout_secs: u64,
    pub data_store_timeout_secs: u64,
    pub draft_validation: DraftValidation,
}

impl Config {
    /// Reads the process environment. The data store URL and both keys have no defaults.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            supabase_url: required("SUPABASE_URL")?,
            supabase_key: SecretString::from(required("SUPABASE_KEY")?),
            lessons_table: env::var("LESSONS_TABLE").unwrap_or_else(|_| "lessons".to_string()),
            gemini_api_key: SecretString::from(required("GEMINI_API_KEY")?),
            gemini_api_base: env::var("GEMINI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            generation_timeout_secs: env::var("GENERATION_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            data_store_timeout_secs: env::var("DATA_STORE_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(10),
            draft_validation: match env::var("DRAFT_VALIDATION") {
                Ok(value) => value.parse()?,
                Err(_) => DraftValidation::default(),
            },
        })
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            supabase_url: "http://127.0.0.1:54321".to_string(),
            supabase_key: SecretString::from("test_supabase_key".to_string()),
            lessons_table: "lessons".to_string(),
            gemini_api_key: SecretString::from("test_gemini_key".to_string()),
            gemini_api_base: "http://127.0.0.1:9/v1beta/openai".to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            generation_timeout_secs: 5,
            data_store_timeout_secs: 1,
            draft_validation: DraftValidation::Lenient,
        }
    }
}

fn required(key: &str) -> AppResult<String> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
}
