//! Display projections derived from analyzer state. Nothing here owns state.

use std::fmt;

use shared::protocol::MAX_REVIEW_CHARS;

use crate::types::AnalysisResult;

pub const PREVIEW_CHARS: usize = 80;
pub const CHAR_WARNING_THRESHOLD: usize = 900;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceBar {
    pub percentage: String,
    /// Visual fill in `[0, 100]`.
    pub width: f64,
}

impl ConfidenceBar {
    fn new(score: f64) -> Self {
        Self {
            percentage: format_percent(score),
            width: bar_width(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub sentiment_label: &'static str,
    pub dominant_confidence: String,
    pub word_count: usize,
    pub positive: ConfidenceBar,
    pub negative: ConfidenceBar,
}

impl ResultView {
    /// `draft` is the live draft, so the word count follows edits made after
    /// the analysis rather than the text that was submitted.
    pub fn project(result: &AnalysisResult, draft: &str) -> Self {
        Self {
            sentiment_label: result.sentiment.label(),
            dominant_confidence: format_percent(result.confidence.dominant()),
            word_count: word_count(draft),
            positive: ConfidenceBar::new(result.confidence.positive),
            negative: ConfidenceBar::new(result.confidence.negative),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounter {
    pub count: usize,
    pub warning: bool,
}

impl CharCounter {
    pub fn for_draft(draft: &str) -> Self {
        let count = draft.chars().count();
        Self {
            count,
            warning: count > CHAR_WARNING_THRESHOLD,
        }
    }
}

impl fmt::Display for CharCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} characters", self.count, MAX_REVIEW_CHARS)
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.1}")
}

pub fn bar_width(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 100.0)
}

/// `accuracy` is a fraction; the result is a percentage with two decimals.
pub fn format_accuracy(accuracy: f64) -> String {
    format!("{:.2}%", accuracy * 100.0)
}

pub fn training_notice(accuracy: f64) -> String {
    format!(
        "Model trained successfully!\nAccuracy: {}",
        format_accuracy(accuracy)
    )
}

pub fn example_preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use shared::domain::{ConfidenceScores, Sentiment};

    use super::*;

    fn result(positive: f64, negative: f64) -> AnalysisResult {
        AnalysisResult {
            sentiment: if positive >= negative {
                Sentiment::Positive
            } else {
                Sentiment::Negative
            },
            confidence: ConfidenceScores { positive, negative },
        }
    }

    #[test]
    fn projects_dominant_confidence_and_bars() {
        let view = ResultView::project(&result(92.3, 7.7), "Great film!");
        assert_eq!(view.sentiment_label, "POSITIVE");
        assert_eq!(view.dominant_confidence, "92.3");
        assert_eq!(view.word_count, 2);
        assert_eq!(view.positive.percentage, "92.3");
        assert_eq!(view.negative.percentage, "7.7");
        assert_eq!(view.positive.width, 92.3);
    }

    #[test]
    fn scores_need_not_be_complementary() {
        let view = ResultView::project(&result(40.0, 35.5), "meh");
        assert_eq!(view.dominant_confidence, "40.0");
        assert_eq!(view.negative.width, 35.5);
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(130.0), 100.0);
        assert_eq!(bar_width(-4.0), 0.0);
        assert_eq!(bar_width(f64::NAN), 0.0);
    }

    #[test]
    fn word_count_ignores_runs_of_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("  one\t two\n\nthree  "), 3);
    }

    #[test]
    fn accuracy_renders_as_two_decimal_percentage() {
        assert_eq!(format_accuracy(0.87), "87.00%");
        assert_eq!(format_accuracy(1.0), "100.00%");
        assert_eq!(
            training_notice(0.87),
            "Model trained successfully!\nAccuracy: 87.00%"
        );
    }

    #[test]
    fn char_counter_warns_past_threshold() {
        let counter = CharCounter::for_draft(&"a".repeat(901));
        assert!(counter.warning);
        assert_eq!(counter.to_string(), "901/1000 characters");
        assert!(!CharCounter::for_draft(&"a".repeat(900)).warning);
    }

    #[test]
    fn preview_truncates_to_eighty_characters() {
        let preview = example_preview(&"x".repeat(120));
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
        assert_eq!(example_preview("short"), "short...");
    }
}
