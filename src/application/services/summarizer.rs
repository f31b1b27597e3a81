use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::Transcript;

use super::summary_prompt::summary_system_prompt;

pub struct Summarizer {
    llm_client: Arc<dyn LlmClient>,
    system_prompt: String,
}

impl Summarizer {
    pub fn new(llm_client: Arc<dyn LlmClient>, summary_language: &str) -> Self {
        Self {
            llm_client,
            system_prompt: summary_system_prompt(summary_language),
        }
    }

    /// Produces an HTML-formatted summary of the transcript.
    pub async fn summarize(&self, transcript: &Transcript) -> Result<String, SummaryError> {
        let summary = self
            .llm_client
            .complete(&self.system_prompt, transcript.as_str())
            .await
            .map_err(SummaryError::Completion)?;

        let summary = summary.trim();
        if summary.is_empty() {
            return Err(SummaryError::EmptySummary);
        }

        tracing::info!(chars = summary.len(), "Summary generated");
        Ok(summary.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("completion: {0}")]
    Completion(#[source] LlmClientError),
    #[error("model returned an empty summary")]
    EmptySummary,
}
