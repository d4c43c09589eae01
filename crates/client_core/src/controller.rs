//! Sequential driver pairing [`AnalyzerState`] with a [`SentimentService`].
//!
//! Each operation runs to completion before returning, so the exclusive
//! borrow of the controller already rules out overlapping calls. The
//! [`crate::session`] actor is the variant that keeps accepting input while
//! a call is in flight.

use std::sync::Arc;

use crate::{
    catalog::{CatalogError, ExampleCategory},
    service::{execute, RemoteCall, SentimentService},
    state::AnalyzerState,
};

pub struct AnalyzerController {
    service: Arc<dyn SentimentService>,
    state: AnalyzerState,
}

impl AnalyzerController {
    pub fn new(service: Arc<dyn SentimentService>) -> Self {
        Self {
            service,
            state: AnalyzerState::default(),
        }
    }

    pub fn state(&self) -> &AnalyzerState {
        &self.state
    }

    /// Runs the status probe. Later calls are no-ops.
    pub async fn initialize(&mut self) {
        if let Some(call) = self.state.begin_status_probe() {
            self.run(call).await;
        }
    }

    /// Returns the training notice on success.
    pub async fn train(&mut self) -> Option<String> {
        let call = self.state.begin_train()?;
        self.run(call).await
    }

    pub async fn analyze(&mut self, review: &str) {
        if let Some(call) = self.state.begin_analyze(review) {
            self.run(call).await;
        }
    }

    pub async fn analyze_draft(&mut self) {
        if let Some(call) = self.state.begin_analyze_draft() {
            self.run(call).await;
        }
    }

    pub fn set_draft(&mut self, text: &str) {
        self.state.set_draft(text);
    }

    pub fn load_example(
        &mut self,
        category: ExampleCategory,
        index: usize,
    ) -> Result<(), CatalogError> {
        self.state.load_example(category, index)
    }

    pub fn clear_all(&mut self) {
        self.state.clear_all();
    }

    async fn run(&mut self, call: RemoteCall) -> Option<String> {
        let completion = execute(Arc::clone(&self.service), call).await;
        self.state.complete(completion)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
