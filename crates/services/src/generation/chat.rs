use std::env;

use async_trait::async_trait;
use quiz_core::model::Question;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::parse::parse_questions;
use super::prompt::{SYSTEM_PROMPT, build_prompt};
use super::{GenerationRequest, QuestionSource};
use crate::error::QuestionSourceError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl GeneratorConfig {
    /// Read `QUIZ_AI_API_KEY`, `QUIZ_AI_BASE_URL` and `QUIZ_AI_MODEL`.
    ///
    /// Returns `None` when no API key is set.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("QUIZ_AI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("QUIZ_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let model = env::var("QUIZ_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Generates questions through an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct ChatQuestionSource {
    client: Client,
    config: Option<GeneratorConfig>,
}

impl ChatQuestionSource {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(GeneratorConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<GeneratorConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    async fn complete(
        &self,
        config: &GeneratorConfig,
        prompt: String,
    ) -> Result<String, QuestionSourceError> {
        let url = format!(
            "{}/chat/completions",
            config.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.9,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(QuestionSourceError::EmptyResponse)
    }
}

#[async_trait]
impl QuestionSource for ChatQuestionSource {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<Question>, QuestionSourceError> {
        let config = self.config.as_ref().ok_or(QuestionSourceError::Disabled)?;
        tracing::debug!(
            section = request.section.key(),
            difficulty = request.difficulty.key(),
            model = %config.model,
            "requesting generated questions"
        );
        let content = self.complete(config, build_prompt(request)).await?;
        parse_questions(&content)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
