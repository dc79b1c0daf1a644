//! Gemini client for answer generation via the Generative Language API
//!
//! Authenticates with an API key; the system instruction, context, and
//! question travel as three separate segments of the request.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::{Error, Result};
use crate::generation::AnswerEngine;

/// Gemini client
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    timeout: Duration,
    max_retries: u32,
}

impl GeminiClient {
    /// Create a new Gemini client sharing the given HTTP client
    pub fn new(client: reqwest::Client, config: &LlmConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout: Duration::from_secs(config.timeout_secs),
            max_retries: config.max_retries,
        }
    }

    /// Get the generateContent endpoint URL
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[derive(serde::Serialize)]
struct GenerateRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: SystemInstruction,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(serde::Serialize)]
struct Part {
    text: String,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(serde::Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(serde::Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(serde::Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Pull the first textual part out of a decoded response, if any
fn response_text(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .filter(|t| !t.is_empty())
}

#[async_trait]
impl AnswerEngine for GeminiClient {
    async fn complete(
        &self,
        system: &str,
        context: &str,
        question: &str,
    ) -> Result<Option<String>> {
        let request = GenerateRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: system.to_string(),
                }],
            },
            contents: vec![
                Content {
                    role: "user".to_string(),
                    parts: vec![Part {
                        text: context.to_string(),
                    }],
                },
                Content {
                    role: "user".to_string(),
                    parts: vec![Part {
                        text: question.to_string(),
                    }],
                },
            ],
            generation_config: GenerationConfig {
                temperature: self.temperature,
            },
        };

        // Client-level transport retries only; a decoded response is final.
        let mut attempt = 0;
        let response = loop {
            let result = self
                .client
                .post(self.endpoint())
                .timeout(self.timeout)
                .json(&request)
                .send()
                .await;

            match result {
                Ok(response) => break response,
                Err(e) if attempt < self.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        "Gemini request failed (attempt {}/{}): {}",
                        attempt,
                        self.max_retries,
                        e
                    );
                }
                Err(e) => return Err(Error::Llm(format!("Gemini request failed: {}", e))),
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!(
                "Gemini generation failed ({}): {}",
                status, body
            )));
        }

        let gen_response: GenerateResponse = response
            .json()
            .await
            .map_err(|e| Error::Llm(format!("Failed to parse Gemini response: {}", e)))?;

        Ok(response_text(gen_response))
    }

    async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/models?key={}", self.base_url, self.api_key);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Gemini health check failed: {}", e)))?;

        Ok(response.status().is_success())
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_reads_first_candidate_part() {
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "The answer."}],
                    "role": "model"
                }
            }]
        });
        let response: GenerateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response_text(response), Some("The answer.".to_string()));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let response: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(response_text(response), None);
    }

    #[test]
    fn response_with_empty_text_has_no_text() {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": ""}]}}]
        });
        let response: GenerateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response_text(response), None);
    }
}
