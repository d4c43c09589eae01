use shared::{
    domain::{ConfidenceScores, Sentiment},
    protocol::PredictResponse,
};

/// Whether the remote classifier can serve predictions.
///
/// `Unknown` is the state before the status probe has answered (or when it
/// could not reach the service); for gating it behaves like `NotReady`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelReadiness {
    #[default]
    Unknown,
    NotReady,
    Ready,
}

impl ModelReadiness {
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    /// Held-out accuracy in `[0, 1]`.
    pub accuracy: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence: ConfidenceScores,
}

impl From<PredictResponse> for AnalysisResult {
    fn from(value: PredictResponse) -> Self {
        Self {
            sentiment: value.sentiment,
            confidence: value.confidence,
        }
    }
}
