//! Ollama API client.
//!
//! Talks to a local Ollama instance over its `/api/generate` endpoint with
//! retry and exponential backoff. Streaming is disabled; the digest is
//! small enough to take in one response.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::DigestError;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model when none is requested
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Request timeout; local generation on modest hardware can be slow
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Client for a local Ollama instance
pub struct OllamaClient {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
    #[allow(dead_code)]
    done: bool,
}

impl OllamaClient {
    /// Create a client for the given endpoint and model.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, DigestError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| DigestError::Communication(format!("client setup failed: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set the maximum number of retry attempts.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The model this client generates with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate text for a prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if Ollama is not reachable, the model is not
    /// pulled, or the response body cannot be parsed.
    pub async fn generate(&self, prompt: &str) -> Result<String, DigestError> {
        let url = format!("{}/api/generate", self.endpoint);
        let request_body = GenerateRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        return match response.json::<GenerateResponse>().await {
                            Ok(body) => Ok(body.response),
                            Err(e) => Err(DigestError::InvalidResponse(format!(
                                "failed to parse response: {}",
                                e
                            ))),
                        };
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(DigestError::ModelNotAvailable(self.model.clone()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(DigestError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error =
                        Some(DigestError::Communication(format!("request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| DigestError::Communication("max retries exceeded".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = OllamaClient::new(DEFAULT_ENDPOINT, "llama3.2").unwrap();
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.model(), "llama3.2");
        assert_eq!(client.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_client_with_max_retries() {
        let client = OllamaClient::new(DEFAULT_ENDPOINT, "mistral")
            .unwrap()
            .with_max_retries(5);
        assert_eq!(client.max_retries, 5);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_communication_error() {
        let client = OllamaClient::new("http://127.0.0.1:1", "llama3.2")
            .unwrap()
            .with_max_retries(1);

        match client.generate("test").await {
            Err(DigestError::Communication(_)) => {}
            other => panic!("expected Communication error, got {:?}", other.map(|_| ())),
        }
    }

    // Integration test (requires a running Ollama)
    #[tokio::test]
    #[ignore]
    async fn test_generate_against_local_ollama() {
        let client = OllamaClient::new(DEFAULT_ENDPOINT, DEFAULT_MODEL).unwrap();
        let result = client.generate("Say 'hello' and nothing else").await;

        if let Ok(response) = result {
            assert!(!response.is_empty());
        }
    }
}
