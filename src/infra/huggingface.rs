use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use crate::domain::summary::{Summary, SummaryOptions};
use crate::error::{AppError, AppResult};
use crate::services::SummarizerService;

/// Hosted summarization over the Hugging Face inference API.
pub struct HuggingFaceClient {
    http: Client,
    endpoint: String,
    model: String,
    token: Option<String>,
}

impl HuggingFaceClient {
    pub fn new(endpoint: String, model: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint,
            model,
            token,
        }
    }

    fn model_url(&self) -> String {
        format!(
            "{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.model.trim_matches('/')
        )
    }
}

#[async_trait]
impl SummarizerService for HuggingFaceClient {
    async fn summarize(&self, prompt: &str, options: &SummaryOptions) -> AppResult<Vec<Summary>> {
        let url = self.model_url();
        tracing::debug!(%url, prompt_len = prompt.len(), "requesting summary");

        let mut request = self
            .http
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&SummarizationRequest::new(prompt, options));
        if let Some(token) = self.token.as_deref() {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(|err| {
            AppError::Summarizer(format!("failed to call Hugging Face: {err}"))
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| {
            AppError::Summarizer(format!("failed to read Hugging Face response: {err}"))
        })?;

        if !status.is_success() {
            let detail = parse_error_message(&body).unwrap_or(body);
            return Err(AppError::Summarizer(format!(
                "Hugging Face responded with {status}: {detail}"
            )));
        }

        parse_summaries(&body)
    }
}

#[derive(Serialize)]
struct SummarizationRequest<'a> {
    inputs: &'a str,
    parameters: &'a SummaryOptions,
}

impl<'a> SummarizationRequest<'a> {
    fn new(inputs: &'a str, parameters: &'a SummaryOptions) -> Self {
        Self { inputs, parameters }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SummarizationResponse {
    Summaries(Vec<Summary>),
    Failure { error: String },
}

fn parse_summaries(body: &str) -> AppResult<Vec<Summary>> {
    match serde_json::from_str::<SummarizationResponse>(body) {
        Ok(SummarizationResponse::Summaries(summaries)) => Ok(summaries),
        Ok(SummarizationResponse::Failure { error }) => Err(AppError::Summarizer(format!(
            "Hugging Face reported an error: {error}"
        ))),
        Err(err) => Err(AppError::Summarizer(format!(
            "failed to parse Hugging Face response: {err}"
        ))),
    }
}

fn parse_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<SummarizationResponse>(body) {
        Ok(SummarizationResponse::Failure { error }) => Some(error),
        _ => None,
    }
}
