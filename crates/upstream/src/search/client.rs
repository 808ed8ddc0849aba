use std::time::Duration;

use async_trait::async_trait;
use icebreak_common::error::IcebreakResult;
use icebreak_config::SearchConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};

use super::models::{SearchRequest, SearchResponse, UpsertRecord};
use super::RecordSearch;
use crate::error::UpstreamError;

/// Client for the hosted records API of the vector index.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// For testing: point the client at a specific host (e.g., wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.config.index_host = base_url.to_string();
        self
    }

    pub fn namespace(&self) -> &str {
        &self.config.namespace
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/records/namespaces/{}/{action}",
            self.config.index_host, self.config.namespace
        )
    }

    /// Query the `top_k` nearest records to `text`. No retry.
    pub async fn search_records(
        &self,
        text: &str,
        top_k: u32,
    ) -> Result<SearchResponse, UpstreamError> {
        let response = self
            .client
            .post(self.endpoint("search"))
            .header("Api-Key", &self.config.api_key)
            .header("X-Pinecone-API-Version", &self.config.api_version)
            .json(&SearchRequest::new(text, top_k))
            .send()
            .await?;

        let response = ensure_success(response).await?;
        let body = response.json::<SearchResponse>().await?;

        tracing::debug!(
            top_k,
            hits = body.result.hits.len(),
            namespace = %self.config.namespace,
            "record search completed"
        );
        Ok(body)
    }

    /// Upsert a batch of records as newline-delimited JSON.
    pub async fn upsert_records(&self, records: &[UpsertRecord]) -> Result<(), UpstreamError> {
        if records.is_empty() {
            return Ok(());
        }

        let lines = records
            .iter()
            .map(serde_json::to_string)
            .collect::<Result<Vec<_>, _>>()?;

        let response = self
            .client
            .post(self.endpoint("upsert"))
            .header("Api-Key", &self.config.api_key)
            .header("X-Pinecone-API-Version", &self.config.api_version)
            .header(CONTENT_TYPE, "application/x-ndjson")
            .body(lines.join("\n"))
            .send()
            .await?;

        ensure_success(response).await?;
        tracing::debug!(records = records.len(), "upsert batch accepted");
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!(%status, %body, "vector index request failed");
    Err(UpstreamError::HttpError { status, body })
}

#[async_trait]
impl RecordSearch for SearchClient {
    async fn search(&self, text: &str, top_k: u32) -> IcebreakResult<SearchResponse> {
        Ok(self.search_records(text, top_k).await?)
    }
}
