use async_trait::async_trait;
use serde_json::json;

use super::ProviderError;
use crate::models::users;

/// AI-backed worker matching and chat assistance, behind a trait so the
/// handlers stay testable without live network calls.
#[async_trait]
pub trait MatchingProvider: Send + Sync {
    /// Rank candidate workers against a job description. Returns the
    /// provider's JSON ranking: `[{"worker_id", "score", "reason"}]`.
    async fn match_workers(
        &self,
        job_description: &str,
        requirements: &[String],
        location: Option<&str>,
        candidates: &[users::Model],
    ) -> Result<serde_json::Value, ProviderError>;

    /// Free-form assistant chat.
    async fn chat(&self, message: &str) -> Result<String, ProviderError>;
}

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

const ASSISTANT_SYSTEM_PROMPT: &str = "You are a helpful assistant for LabourMandi, a \
construction labor marketplace in India. Help users with finding suitable workers, job \
posting best practices, equipment rental advice, and construction industry guidance. \
Keep responses concise and practical.";

/// OpenAI-backed implementation of [`MatchingProvider`].
pub struct OpenAiMatching {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl OpenAiMatching {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: "gpt-4o".to_string(),
        }
    }

    async fn completion(&self, body: serde_json::Value) -> Result<serde_json::Value, ProviderError> {
        let response = self
            .client
            .post(OPENAI_CHAT_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    fn message_content(response: &serde_json::Value) -> Result<String, ProviderError> {
        response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::BadResponse("no message content in completion".into()))
    }
}

#[async_trait]
impl MatchingProvider for OpenAiMatching {
    async fn match_workers(
        &self,
        job_description: &str,
        requirements: &[String],
        location: Option<&str>,
        candidates: &[users::Model],
    ) -> Result<serde_json::Value, ProviderError> {
        // Cap the candidate list so the prompt stays a reasonable size.
        let shortlist: Vec<_> = candidates.iter().take(10).collect();

        let prompt = format!(
            "You are ranking workers for a construction labor marketplace.\n\
             Given the following job requirements, rank the workers by suitability.\n\n\
             Job Description: {job_description}\n\
             Requirements: {}\n\
             Location: {}\n\n\
             Available Workers (JSON):\n{}\n\n\
             Return a JSON array of worker ids ranked by suitability, with a brief \
             explanation for each. Format: [{{\"worker_id\": \"...\", \"score\": 0-100, \
             \"reason\": \"...\"}}]",
            if requirements.is_empty() {
                "None specified".to_string()
            } else {
                requirements.join(", ")
            },
            location.unwrap_or("Any"),
            serde_json::to_string_pretty(&shortlist)
                .map_err(|e| ProviderError::BadResponse(e.to_string()))?,
        );

        let response = self
            .completion(json!({
                "model": self.model,
                "messages": [{"role": "user", "content": prompt}],
                "response_format": {"type": "json_object"},
            }))
            .await?;

        let content = Self::message_content(&response)?;
        serde_json::from_str(&content)
            .map_err(|e| ProviderError::BadResponse(format!("invalid ranking JSON: {e}")))
    }

    async fn chat(&self, message: &str) -> Result<String, ProviderError> {
        let response = self
            .completion(json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": ASSISTANT_SYSTEM_PROMPT},
                    {"role": "user", "content": message},
                ],
            }))
            .await?;

        Self::message_content(&response)
    }
}
