use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::config::LlmConfig;
use crate::errors::QaError;
use crate::llm_client::OllamaClient;
use crate::models::response::AnswerResponse;
use crate::prompts;
use crate::store::ReportStore;
use crate::suggestions;

pub struct QaService {
    store: Arc<ReportStore>,
    llm_config: LlmConfig,
    client: OnceCell<Result<OllamaClient, QaError>>,
}

impl QaService {
    pub fn new(store: Arc<ReportStore>, llm_config: LlmConfig) -> Self {
        Self {
            store,
            llm_config,
            client: OnceCell::new(),
        }
    }

    /// Builds the backend client on first use. The outcome is kept for the
    /// lifetime of the service, so a failed initialization is not retried.
    async fn client(&self) -> Result<&OllamaClient, QaError> {
        self.client
            .get_or_init(|| async { OllamaClient::new(&self.llm_config) })
            .await
            .as_ref()
            .map_err(|e| e.clone())
    }

    pub async fn answer_question(
        &self,
        session_id: &str,
        question: &str,
    ) -> Result<AnswerResponse, QaError> {
        let report = match self.store.get(session_id).await {
            Some(report) => report,
            None => {
                return Err(QaError::NotFoundError(format!(
                    "no report for session {session_id}"
                )));
            }
        };

        let client = self.client().await?;

        let answer_prompt = prompts::build_answer_prompt(&report, question);
        let followup_prompt = prompts::build_followup_prompt(&report, question);

        log::debug!("requesting answer and follow-ups for session {session_id}");
        let (answer, followup_text) = tokio::try_join!(
            client.complete(&answer_prompt),
            client.complete(&followup_prompt),
        )?;

        Ok(AnswerResponse {
            answer: answer.trim().to_string(),
            suggestions: suggestions::parse_suggestions(&followup_text),
        })
    }
}
