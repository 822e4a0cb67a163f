use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{
    common::entities::app_errors::CoreError,
    common::{LLMConfig, RetrievalConfig},
    retrieval::{entities::AlternativeItem, ports::AlternativesIndex},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Similarity-alternatives adapter: embeds the query with the Gemini
/// embedding model, then runs a filtered vector query against a
/// Pinecone-style index endpoint.
///
/// With an empty endpoint the adapter is disabled and every lookup
/// resolves to no results.
#[derive(Debug, Clone)]
pub struct HttpAlternativesIndex {
    endpoint: String,
    api_key: String,
    embed_api_key: String,
    embed_model: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: Embedding,
}

#[derive(Debug, Deserialize)]
struct Embedding {
    values: Vec<f32>,
}

#[derive(Debug, Serialize)]
struct QueryRequest {
    vector: Vec<f32>,
    #[serde(rename = "topK")]
    top_k: usize,
    filter: serde_json::Value,
    #[serde(rename = "includeMetadata")]
    include_metadata: bool,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
    id: String,
    #[serde(default)]
    metadata: MatchMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct MatchMetadata {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    allergens: Vec<String>,
}

impl HttpAlternativesIndex {
    pub fn new(retrieval: RetrievalConfig, llm: LLMConfig) -> Self {
        Self {
            endpoint: retrieval.endpoint,
            api_key: retrieval.api_key,
            embed_api_key: llm.gemini_api_key,
            embed_model: llm.embedding_model,
            client: Client::new(),
        }
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, CoreError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:embedContent?key={}",
            self.embed_model, self.embed_api_key
        );
        let body = json!({
            "model": format!("models/{}", self.embed_model),
            "content": { "parts": [ { "text": text } ] }
        });

        let response = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("embedding request failed: {}", e);
                CoreError::UpstreamFailure(format!("embedding API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::UpstreamFailure(format!(
                "embedding API returned error: {status} - {error_text}"
            )));
        }

        let embed: EmbedResponse = response.json().await.map_err(|e| {
            CoreError::ParseFailure(format!("failed to parse embedding response: {e}"))
        })?;
        Ok(embed.embedding.values)
    }
}

impl AlternativesIndex for HttpAlternativesIndex {
    async fn find_alternatives(
        &self,
        query: &str,
        exclude_allergen: &str,
        top_k: usize,
    ) -> Result<Vec<AlternativeItem>, CoreError> {
        if self.endpoint.is_empty() {
            tracing::debug!("alternatives index not configured, skipping lookup");
            return Ok(Vec::new());
        }

        let vector = self.embed(query).await?;

        let request = QueryRequest {
            vector,
            top_k,
            filter: json!({
                "availability": { "$eq": "in_stock" },
                "allergens": { "$nin": [exclude_allergen] }
            }),
            include_metadata: true,
        };

        let response = self
            .client
            .post(format!("{}/query", self.endpoint.trim_end_matches('/')))
            .timeout(REQUEST_TIMEOUT)
            .header("Api-Key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("vector query failed: {}", e);
                CoreError::UpstreamFailure(format!("vector index error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(CoreError::UpstreamFailure(format!(
                "vector index returned error: {status} - {error_text}"
            )));
        }

        let payload: QueryResponse = response.json().await.map_err(|e| {
            CoreError::ParseFailure(format!("failed to parse vector index response: {e}"))
        })?;

        Ok(payload
            .matches
            .into_iter()
            .map(|m| AlternativeItem {
                id: m.id,
                name: m.metadata.name,
                description: m.metadata.description,
                allergens: m.metadata.allergens,
            })
            .collect())
    }
}
