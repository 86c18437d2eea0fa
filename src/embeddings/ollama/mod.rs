#[cfg(test)]
mod tests;

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::OllamaConfig;
use crate::{Result, SimError};

/// Vector width of the default model (Ollama's `all-minilm`, MiniLM-L6-v2).
pub const DEFAULT_EMBEDDING_DIMENSION: u32 = 384;

/// Client for Ollama's embedding API.
///
/// Every request is synchronous and made exactly once; a failure aborts the
/// run rather than being retried.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: Url,
    model: String,
    batch_size: usize,
    dimension: usize,
    agent: ureq::Agent,
}

#[derive(Debug, Serialize)]
struct EmbedRequest {
    model: String,
    #[serde(rename = "input")]
    inputs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
pub struct ModelInfo {
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct ModelsResponse {
    models: Vec<ModelInfo>,
}

impl OllamaClient {
    #[inline]
    pub fn new(config: &OllamaConfig) -> Result<Self> {
        let base_url = config
            .ollama_url()
            .map_err(|e| SimError::Config(e.to_string()))?;

        let agent = ureq::Agent::config_builder().build().into();

        Ok(Self {
            base_url,
            model: config.model.clone(),
            batch_size: config.batch_size as usize,
            dimension: config.embedding_dimension as usize,
            agent,
        })
    }

    /// Check that the server is reachable and the configured model is present
    #[inline]
    pub fn health_check(&self) -> Result<()> {
        let models = self.list_models()?;

        if models.iter().any(|m| m.name == self.model) {
            debug!("Model {} is available", self.model);
            return Ok(());
        }

        let available: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        warn!(
            "Model {} not found. Available models: {:?}",
            self.model, available
        );
        Err(SimError::ModelUnavailable(format!(
            "model '{}' is not present on the Ollama server; run `ollama pull {}` (available: {:?})",
            self.model, self.model, available
        )))
    }

    /// List the models known to the Ollama server
    #[inline]
    pub fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let url = self.endpoint("/api/tags")?;
        debug!("Fetching available models from {}", url);

        let body = self
            .agent
            .get(url.as_str())
            .call()
            .and_then(|mut resp| resp.body_mut().read_to_string())
            .map_err(|e| self.classify(e))?;

        let response: ModelsResponse = serde_json::from_str(&body)
            .map_err(|e| SimError::Embedding(format!("failed to parse models response: {e}")))?;

        Ok(response.models)
    }

    /// Embed a batch of texts, one vector per input, preserving order.
    ///
    /// Inputs are sent in chunks of the configured batch size; the chunking
    /// only affects throughput, not results.
    #[inline]
    pub fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        info!("Embedding {} texts with model {}", texts.len(), self.model);

        let bar = if console::user_attended_stderr() {
            ProgressBar::new(texts.len() as u64).with_style(
                ProgressStyle::with_template("{spinner} [{pos}/{len}] Embedding")
                    .expect("style template is valid"),
            )
        } else {
            ProgressBar::hidden()
        };

        let mut rows = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(self.batch_size) {
            rows.extend(self.embed_chunk(chunk)?);
            bar.inc(chunk.len() as u64);
        }
        bar.finish_and_clear();

        debug!("Generated {} embeddings", rows.len());
        Ok(rows)
    }

    /// Embed a single text
    #[inline]
    pub fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        let rows = self.embed_chunk(&[text.to_string()])?;
        rows.into_iter()
            .next()
            .ok_or_else(|| SimError::Embedding("server returned no embedding".to_string()))
    }

    fn embed_chunk(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let request = EmbedRequest {
            model: self.model.clone(),
            inputs: texts.to_vec(),
        };

        let url = self.endpoint("/api/embed")?;
        let request_json = serde_json::to_string(&request)
            .map_err(|e| SimError::Embedding(format!("failed to serialize embed request: {e}")))?;

        let body = self
            .agent
            .post(url.as_str())
            .header("Content-Type", "application/json")
            .send(&request_json)
            .and_then(|mut resp| resp.body_mut().read_to_string())
            .map_err(|e| self.classify(e))?;

        let response: EmbedResponse = serde_json::from_str(&body)
            .map_err(|e| SimError::Embedding(format!("failed to parse embed response: {e}")))?;

        if response.embeddings.len() != texts.len() {
            return Err(SimError::Embedding(format!(
                "requested {} embeddings but received {}",
                texts.len(),
                response.embeddings.len()
            )));
        }

        for row in &response.embeddings {
            if row.len() != self.dimension {
                return Err(SimError::Embedding(format!(
                    "model produced a {}-dimensional vector, expected {}; \
                     check the embedding_dimension setting for model {}",
                    row.len(),
                    self.dimension,
                    self.model
                )));
            }
        }

        Ok(response.embeddings)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| SimError::Embedding(format!("failed to build URL for {path}: {e}")))
    }

    fn classify(&self, error: ureq::Error) -> SimError {
        match error {
            ureq::Error::StatusCode(status) => {
                SimError::Embedding(format!("Ollama returned HTTP {status}"))
            }
            ureq::Error::ConnectionFailed
            | ureq::Error::HostNotFound
            | ureq::Error::Timeout(_)
            | ureq::Error::Io(_) => SimError::ModelUnavailable(format!(
                "cannot reach Ollama at {}: {}. Install it from https://ollama.com, \
                 start the server, and run `ollama pull {}`",
                self.base_url, error, self.model
            )),
            other => SimError::Embedding(format!("request failed: {other}")),
        }
    }
}
