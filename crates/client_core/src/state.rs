//! Analyzer state and its transitions.
//!
//! Every transition is a synchronous method on [`AnalyzerState`]. Starting a
//! remote operation returns the [`RemoteCall`] to dispatch (or `None` when the
//! action is rejected); the call's [`Completion`] is folded back in with
//! [`AnalyzerState::complete`].

use shared::{domain::ModelStatus, protocol::MAX_REVIEW_CHARS};
use tracing::{debug, info, warn};

use crate::{
    catalog::{self, CatalogError, ExampleCategory},
    error::{OperationError, ServiceError},
    presenter::{self, CharCounter, ResultView},
    service::{Completion, RemoteCall},
    types::{AnalysisResult, ModelReadiness, TrainReport},
    validation::validate,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyzerState {
    readiness: ModelReadiness,
    draft: String,
    result: Option<AnalysisResult>,
    error: Option<OperationError>,
    busy: bool,
    status_probed: bool,
}

impl AnalyzerState {
    pub fn readiness(&self) -> ModelReadiness {
        self.readiness
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&OperationError> {
        self.error.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn can_train(&self) -> bool {
        !self.busy
    }

    pub fn can_analyze(&self) -> bool {
        self.readiness.is_ready() && !self.busy && !self.draft.trim().is_empty()
    }

    pub fn result_view(&self) -> Option<ResultView> {
        self.result
            .as_ref()
            .map(|result| ResultView::project(result, &self.draft))
    }

    pub fn char_counter(&self) -> CharCounter {
        CharCounter::for_draft(&self.draft)
    }

    /// Replaces the draft as typed input, keeping at most
    /// [`MAX_REVIEW_CHARS`] characters.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = match text.char_indices().nth(MAX_REVIEW_CHARS) {
            Some((cut, _)) => text[..cut].to_string(),
            None => text.to_string(),
        };
    }

    /// Issues the status probe. Only the first call per state yields a probe.
    pub fn begin_status_probe(&mut self) -> Option<RemoteCall> {
        if self.status_probed {
            return None;
        }
        self.status_probed = true;
        Some(RemoteCall::Status)
    }

    pub fn begin_train(&mut self) -> Option<RemoteCall> {
        if self.busy {
            debug!("train rejected: another operation is in flight");
            return None;
        }
        self.busy = true;
        self.error = None;
        Some(RemoteCall::Train)
    }

    /// Validates `review` and, if it passes, starts a prediction carrying it
    /// unmodified. Validation failures are recorded without any remote call.
    pub fn begin_analyze(&mut self, review: &str) -> Option<RemoteCall> {
        if self.busy {
            debug!("analyze rejected: another operation is in flight");
            return None;
        }
        if !self.readiness.is_ready() {
            warn!(readiness = ?self.readiness, "analyze rejected: model is not ready");
            return None;
        }
        if let Err(err) = validate(review) {
            debug!(error = %err, "analyze rejected by validation");
            self.error = Some(OperationError::validation(err));
            return None;
        }
        self.busy = true;
        self.error = None;
        Some(RemoteCall::Predict {
            review: review.to_string(),
        })
    }

    pub fn begin_analyze_draft(&mut self) -> Option<RemoteCall> {
        let review = self.draft.clone();
        self.begin_analyze(&review)
    }

    /// Folds a remote outcome into the state. Returns a one-time notice for
    /// the user when there is one.
    pub fn complete(&mut self, completion: Completion) -> Option<String> {
        match completion {
            Completion::Status(outcome) => {
                self.finish_status(outcome);
                None
            }
            Completion::Train(outcome) => self.finish_train(outcome),
            Completion::Predict(outcome) => {
                self.finish_analyze(outcome);
                None
            }
        }
    }

    fn finish_status(&mut self, outcome: Result<ModelStatus, ServiceError>) {
        if self.readiness != ModelReadiness::Unknown {
            debug!(readiness = ?self.readiness, "status result ignored: readiness already known");
            return;
        }
        match outcome {
            Ok(status) => {
                self.readiness = if status.is_ready() {
                    ModelReadiness::Ready
                } else {
                    ModelReadiness::NotReady
                };
                info!(readiness = ?self.readiness, "status: probe answered");
            }
            Err(err) => {
                warn!(error = %err, "status: service unreachable");
                self.error = Some(OperationError::status_unreachable());
            }
        }
    }

    fn finish_train(&mut self, outcome: Result<TrainReport, ServiceError>) -> Option<String> {
        self.busy = false;
        match outcome {
            Ok(report) => {
                info!(accuracy = report.accuracy, "train: model ready");
                self.readiness = ModelReadiness::Ready;
                self.error = None;
                Some(presenter::training_notice(report.accuracy))
            }
            Err(err) => {
                warn!(error = %err, "train: remote training failed");
                self.error = Some(OperationError::training(&err));
                None
            }
        }
    }

    fn finish_analyze(&mut self, outcome: Result<AnalysisResult, ServiceError>) {
        self.busy = false;
        match outcome {
            Ok(result) => {
                info!(sentiment = result.sentiment.as_str(), "predict: result received");
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                // The previous result, if any, stays on screen.
                warn!(error = %err, "predict: remote prediction failed");
                self.error = Some(OperationError::prediction(&err));
            }
        }
    }

    pub fn load_example(
        &mut self,
        category: ExampleCategory,
        index: usize,
    ) -> Result<(), CatalogError> {
        let text = catalog::example(category, index)?;
        self.draft = text.to_string();
        self.result = None;
        self.error = None;
        Ok(())
    }

    pub fn clear_all(&mut self) {
        self.draft.clear();
        self.result = None;
        self.error = None;
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
