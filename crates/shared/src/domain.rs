use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
}

/// Labels are matched ignoring case and surrounding whitespace.
impl<'de> Deserialize<'de> for Sentiment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            _ => Err(de::Error::unknown_variant(
                raw.trim(),
                &["positive", "negative"],
            )),
        }
    }
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
        }
    }
}

/// Per-class scores in percent. The two values are independent; they are not
/// assumed to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScores {
    pub positive: f64,
    pub negative: f64,
}

impl ConfidenceScores {
    pub fn dominant(&self) -> f64 {
        self.positive.max(self.negative)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    Ready,
    NotTrained(String),
}

impl ModelStatus {
    pub fn from_wire(status: &str) -> Self {
        if status == crate::protocol::STATUS_READY {
            Self::Ready
        } else {
            Self::NotTrained(status.to_string())
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_accepts_upper_and_lower_case() {
        let lower: Sentiment = serde_json::from_str("\"positive\"").expect("lower");
        let upper: Sentiment = serde_json::from_str("\"NEGATIVE\"").expect("upper");
        let mixed: Sentiment = serde_json::from_str("\"pOsItIvE\"").expect("mixed");
        let padded: Sentiment = serde_json::from_str("\"Negative \"").expect("padded");
        assert_eq!(lower, Sentiment::Positive);
        assert_eq!(upper, Sentiment::Negative);
        assert_eq!(mixed, Sentiment::Positive);
        assert_eq!(padded, Sentiment::Negative);
        assert!(serde_json::from_str::<Sentiment>("\"neutral\"").is_err());
        assert!(serde_json::from_str::<Sentiment>("1").is_err());
    }

    #[test]
    fn only_exact_ready_string_is_ready() {
        assert!(ModelStatus::from_wire("ready").is_ready());
        assert_eq!(
            ModelStatus::from_wire("not_trained"),
            ModelStatus::NotTrained("not_trained".to_string())
        );
        assert!(!ModelStatus::from_wire("READY").is_ready());
    }

    #[test]
    fn dominant_picks_larger_score() {
        let scores = ConfidenceScores {
            positive: 12.5,
            negative: 70.0,
        };
        assert_eq!(scores.dominant(), 70.0);
    }
}
