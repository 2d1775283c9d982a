//! Classifier transport

use anyhow::Context;

use crate::wire::{ClassifyRequest, ClassifyResponse, Prediction};

/// Anything that can turn a frame data URL into a prediction
pub trait Classifier: Send {
    fn classify(&self, image_data_url: &str) -> anyhow::Result<Prediction>;
}

/// HTTP classifier speaking JSON to an external service
///
/// One request is in flight at a time, issued from the polling thread.
/// There is deliberately no timeout or retry: a slow service just delays
/// that poll, and the next tick fires a fresh request.
pub struct HttpClassifier {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpClassifier {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Classifier for HttpClassifier {
    fn classify(&self, image_data_url: &str) -> anyhow::Result<Prediction> {
        let response: ClassifyResponse = self
            .client
            .post(&self.endpoint)
            .json(&ClassifyRequest {
                image: image_data_url.to_string(),
            })
            .send()
            .with_context(|| format!("posting frame to {}", self.endpoint))?
            .json()
            .context("decoding classifier response")?;
        response.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_is_kept_verbatim() {
        let c = HttpClassifier::new("http://127.0.0.1:5000/predict");
        assert_eq!(c.endpoint(), "http://127.0.0.1:5000/predict");
    }
}
