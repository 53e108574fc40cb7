//! HTTP client for handing final chunk records to the vector store.
//!
//! The engine emits records without identifiers; stable ids are assigned
//! here, at the storage boundary, and nowhere inside the pipeline.

use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::types::ChunkRecord;

/// Client for sending chunk records to the vector store service.
pub struct VectorStoreClient {
    client: Client,
    base_url: String,
    batch_size: usize,
}

/// Request payload for indexing chunks.
#[derive(Debug, Serialize)]
struct IndexChunksRequest {
    chunks: Vec<ChunkForIndexing>,
}

/// One chunk as sent to the vector store.
#[derive(Debug, Serialize)]
struct ChunkForIndexing {
    id: String,
    content: String,
    chunk_type: String,
    start_line: usize,
    end_line: usize,
    metadata: serde_json::Value,
    indexed_at: DateTime<Utc>,
}

/// Response from the vector store.
#[derive(Debug, Deserialize)]
struct IndexChunksResponse {
    indexed_count: usize,
    #[serde(default)]
    errors: Vec<String>,
}

impl VectorStoreClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            batch_size: 100,
        })
    }

    /// Set the batch size for indexing requests.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    /// Send chunk records to the vector store in batches.
    ///
    /// A failed batch is logged and skipped; remaining batches are still
    /// sent. Returns the number of chunks the store reported as indexed.
    pub async fn send_chunks(&self, chunks: &[ChunkRecord]) -> Result<usize> {
        if chunks.is_empty() {
            return Ok(0);
        }

        info!(chunk_count = chunks.len(), "Sending chunks to vector store");

        let mut total_indexed = 0;
        let mut ordinal = 0;

        for batch in chunks.chunks(self.batch_size) {
            let payload = self.build_request(batch, ordinal);
            ordinal += batch.len();

            match self.send_batch(payload).await {
                Ok(count) => {
                    total_indexed += count;
                    debug!(batch_size = batch.len(), indexed = count, "Batch indexed");
                }
                Err(e) => {
                    error!(error = %e, "Failed to index batch");
                }
            }
        }

        info!(total_indexed, "Finished sending chunks to vector store");
        Ok(total_indexed)
    }

    /// Build the request for one batch, assigning boundary-side ids.
    fn build_request(&self, batch: &[ChunkRecord], first_ordinal: usize) -> IndexChunksRequest {
        IndexChunksRequest {
            chunks: batch
                .iter()
                .enumerate()
                .map(|(i, c)| ChunkForIndexing {
                    id: chunk_id(c, first_ordinal + i),
                    content: c.content.clone(),
                    chunk_type: c.chunk_type.to_string(),
                    start_line: c.start_line,
                    end_line: c.end_line,
                    metadata: serde_json::to_value(&c.metadata).unwrap_or_default(),
                    indexed_at: Utc::now(),
                })
                .collect(),
        }
    }

    /// Send a single batch of chunks.
    async fn send_batch(&self, request: IndexChunksRequest) -> Result<usize> {
        let url = format!("{}/index/chunks", self.base_url);

        let response = self.client.post(&url).json(&request).send().await?;

        if response.status().is_success() {
            let result: IndexChunksResponse = response.json().await?;
            for err in &result.errors {
                error!(error = err, "Vector store reported error");
            }
            Ok(result.indexed_count)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(anyhow::anyhow!("vector store returned {}: {}", status, text))
        }
    }

    /// Check if the vector store is reachable.
    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(_) => Ok(false),
        }
    }
}

/// Stable id for a chunk: file path, semantic type, position in the run.
fn chunk_id(chunk: &ChunkRecord, ordinal: usize) -> String {
    let path = chunk.metadata.file_path.as_deref().unwrap_or("unknown");
    format!("{}_{}_{}", path, chunk.chunk_type, ordinal)
}
