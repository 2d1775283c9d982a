//! Wire types for the classifier HTTP boundary

use serde::{Deserialize, Serialize};

/// Request body posted to the classifier endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// JPEG data URL of the mirrored camera frame
    pub image: String,
}

/// Response body from the classifier endpoint
///
/// Success carries `label` and `score`; failure carries `error`. The
/// service may omit fields on either path, so all three are optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ClassifyResponse {
    /// Collapse the response into a prediction or an error
    ///
    /// A missing label on the success path means the service saw no hand.
    pub fn into_result(self) -> anyhow::Result<Prediction> {
        if let Some(error) = self.error {
            anyhow::bail!("classifier error: {error}");
        }
        Ok(Prediction {
            label: self.label.unwrap_or_else(|| "No Hand".to_string()),
            score: self.score,
        })
    }
}

/// A single classifier verdict
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Confidence in [0, 1]; absent when the service reports none
    pub score: Option<f64>,
}
