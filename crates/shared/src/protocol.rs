use serde::{Deserialize, Serialize};

use crate::domain::{ConfidenceScores, Sentiment};

pub const STATUS_PATH: &str = "api/status";
pub const TRAIN_PATH: &str = "api/train";
pub const PREDICT_PATH: &str = "api/predict";

pub const STATUS_READY: &str = "ready";
pub const STATUS_NOT_TRAINED: &str = "not_trained";

/// Longest review, in characters, the client will submit for prediction.
pub const MAX_REVIEW_CHARS: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainResponse {
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub review: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub sentiment: Sentiment,
    pub confidence: ConfidenceScores,
}
