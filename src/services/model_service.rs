use std::time::Duration;

use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{config::Config, errors::ModelError};

const LIST_MODELS_TIMEOUT: Duration = Duration::from_secs(10);
const GENERATE_CONTENT: &str = "generateContent";

/// A generative model that answers a prompt with JSON text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizModel: Send + Sync {
    /// Raw text of the model reply. Sampling is deterministic and the reply is requested as JSON.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;

    /// Model identifiers the configured key can use for content generation. Diagnostic only.
    async fn list_models(&self) -> Result<Vec<String>, ModelError>;
}

/// Gemini through its OpenAI-compatible endpoint.
pub struct GeminiModelService {
    client: Client<OpenAIConfig>,
    http: reqwest::Client,
    api_base: String,
    api_key: SecretString,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(alias = "models")]
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    #[serde(alias = "name")]
    id: String,
    /// Only present on the native listing; the OpenAI-compatible one omits it.
    #[serde(default, alias = "supportedGenerationMethods")]
    supported_generation_methods: Option<Vec<String>>,
}

impl ModelEntry {
    fn generates_content(&self) -> bool {
        self.supported_generation_methods
            .as_ref()
            .map_or(true, |methods| methods.iter().any(|m| m == GENERATE_CONTENT))
    }
}

/// A backoff that gives up on the first failure, so upstream errors surface unchanged.
fn no_retry() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

impl GeminiModelService {
    pub fn new(config: &Config) -> Result<Self, ModelError> {
        let api_base = config.gemini_api_base.trim_end_matches('/').to_string();
        let openai_config = OpenAIConfig::new()
            .with_api_base(api_base.clone())
            .with_api_key(config.gemini_api_key.expose_secret());

        log::info!("Model client configured for '{}' at {}", config.gemini_model, api_base);

        let http = reqwest::Client::builder()
            .timeout(LIST_MODELS_TIMEOUT)
            .build()
            .map_err(|e| ModelError::Request(e.to_string()))?;

        Ok(Self {
            client: Client::with_config(openai_config).with_backoff(no_retry()),
            http,
            api_base,
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        })
    }

    fn chat_request(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.0,
            "response_format": { "type": "json_object" }
        })
    }

    fn classify(&self, err: OpenAIError) -> ModelError {
        let message = err.to_string();
        if is_unknown_model(&message) {
            ModelError::UnknownModel {
                model: self.model.clone(),
                message,
            }
        } else {
            ModelError::Request(message)
        }
    }
}

#[async_trait]
impl QuizModel for GeminiModelService {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        log::info!("Requesting quiz from '{}' (temperature 0)", self.model);

        let response: Value = self
            .client
            .chat()
            .create_byot(self.chat_request(prompt))
            .await
            .map_err(|e| self.classify(e))?;

        message_content(&response)
            .map(str::to_string)
            .ok_or_else(|| ModelError::Request("model reply has no message content".to_string()))
    }

    async fn list_models(&self) -> Result<Vec<String>, ModelError> {
        let response = self
            .http
            .get(format!("{}/models", self.api_base))
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ModelError::Request(e.to_string()))?;

        let list: ModelList = response
            .json()
            .await
            .map_err(|e| ModelError::Request(e.to_string()))?;

        Ok(content_models(list))
    }
}

fn content_models(list: ModelList) -> Vec<String> {
    list.data
        .into_iter()
        .filter(ModelEntry::generates_content)
        .map(|m| m.id)
        .collect()
}

fn message_content(response: &Value) -> Option<&str> {
    response
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}

/// Whether an upstream error message says the requested model does not exist.
fn is_unknown_model(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    lower.contains("model_not_found")
        || (lower.contains("model")
            && (lower.contains("not found")
                || lower.contains("does not exist")
                || lower.contains("is not supported")))
}
