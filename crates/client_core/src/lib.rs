//! Client side of the sentiment analyzer: the analyzer state machine, the
//! remote service binding, and the pure helpers around them.

pub mod catalog;
pub mod controller;
pub mod error;
pub mod presenter;
pub mod service;
pub mod session;
pub mod state;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::ExampleCategory;
pub use controller::AnalyzerController;
pub use error::{ErrorKind, ErrorOrigin, OperationError, ServiceError};
pub use service::{HttpSentimentService, SentimentService};
pub use session::{SessionEvent, SessionHandle, UserAction};
pub use state::AnalyzerState;
pub use types::{AnalysisResult, ModelReadiness, TrainReport};
