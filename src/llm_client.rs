use std::time::Duration;

use crate::config::LlmConfig;
use crate::consts;
use crate::errors::QaError;
use crate::models::generate::{GenerateRequest, GenerateResponse};

pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    pub fn new(config: &LlmConfig) -> Result<Self, QaError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(consts::CONNECT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            model: config.model_name.clone(),
        })
    }

    pub async fn complete(&self, prompt: &str) -> Result<String, QaError> {
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}{}", self.base_url, "/api/generate"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(QaError::UpstreamError(format!(
                "status {status}, text {text}"
            )));
        }

        let generated: GenerateResponse = response.json().await?;
        log::debug!(
            "completion done={} prompt_eval_count={:?} eval_count={:?}",
            generated.done,
            generated.prompt_eval_count,
            generated.eval_count
        );

        Ok(generated.response)
    }
}
