//! Plain-text rendering of analyzer state for the terminal.

use std::fmt::Write as _;

use client_core::{
    catalog::{self, ExampleCategory},
    presenter::{example_preview, ResultView},
    AnalyzerState,
};

const BAR_CELLS: usize = 30;

pub fn render_state(state: &AnalyzerState) -> String {
    let mut out = String::new();

    if !state.readiness().is_ready() {
        out.push_str("== Model Not Ready ==\n");
        out.push_str("Train the sentiment analysis model before you can analyze reviews.\n");
        if state.is_busy() {
            out.push_str("Training Model... (this can take 30-60 seconds)\n");
        } else {
            out.push_str("Type /train to train the model.\n");
        }
        if let Some(err) = state.error() {
            let _ = writeln!(out, "! {}", err.message());
        }
        return out;
    }

    out.push_str("== Analyze Movie Review ==  [Model Ready]\n");
    if state.draft().is_empty() {
        out.push_str("(no review entered; type a line of text to set it)\n");
    } else {
        let _ = writeln!(out, "> {}", state.draft());
    }
    let counter = state.char_counter();
    let _ = write!(out, "{counter}{}", if counter.warning { " !" } else { "" });
    if state.can_analyze() {
        out.push_str("   /analyze (or /a) to analyze");
    }
    out.push('\n');
    if state.is_busy() {
        out.push_str("Analyzing...\n");
    }
    if let Some(err) = state.error() {
        let _ = writeln!(out, "! {}", err.message());
    }
    if let Some(view) = state.result_view() {
        out.push_str(&render_result(&view));
    }
    out
}

pub fn render_result(view: &ResultView) -> String {
    let mut out = String::from("== Analysis Results ==\n");
    let _ = writeln!(out, "Sentiment:  {}", view.sentiment_label);
    let _ = writeln!(out, "Confidence: {}%", view.dominant_confidence);
    let _ = writeln!(out, "Words:      {}", view.word_count);
    let _ = writeln!(
        out,
        "Positive {} {}%",
        bar(view.positive.width),
        view.positive.percentage
    );
    let _ = writeln!(
        out,
        "Negative {} {}%",
        bar(view.negative.width),
        view.negative.percentage
    );
    out
}

pub fn render_examples() -> String {
    let mut out = String::from("== Try These Examples ==\n");
    for category in ExampleCategory::ALL {
        let _ = writeln!(out, "{}:", category.title());
        for (idx, text) in catalog::examples(category).iter().enumerate() {
            let _ = writeln!(out, "  /example {category} {}  {}", idx + 1, example_preview(text));
        }
    }
    out
}

fn bar(width: f64) -> String {
    let filled = ((width / 100.0) * BAR_CELLS as f64).round() as usize;
    let filled = filled.min(BAR_CELLS);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_CELLS - filled))
}
