use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use shared::{
    domain::{ConfidenceScores, ModelStatus, Sentiment},
    error::ApiException,
    protocol::STATUS_NOT_TRAINED,
};
use tokio::sync::Notify;

use crate::{
    error::ServiceError,
    service::SentimentService,
    types::{AnalysisResult, TrainReport},
};

fn scripted_failure(message: &str) -> ServiceError {
    ServiceError::Server(ApiException::new(503, message))
}

pub(crate) fn analysis(sentiment: Sentiment, positive: f64, negative: f64) -> AnalysisResult {
    AnalysisResult {
        sentiment,
        confidence: ConfidenceScores { positive, negative },
    }
}

/// In-memory service that replays scripted outcomes and counts calls.
#[derive(Default)]
pub(crate) struct ScriptedService {
    status: Mutex<Option<Result<bool, String>>>,
    train: Mutex<VecDeque<Result<f64, String>>>,
    predict: Mutex<VecDeque<Result<AnalysisResult, String>>>,
    status_gate: Option<Arc<Notify>>,
    train_gate: Option<Arc<Notify>>,
    predict_gate: Option<Arc<Notify>>,
    pub status_calls: AtomicUsize,
    pub train_calls: AtomicUsize,
    pub predict_calls: AtomicUsize,
    pub reviews: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn not_ready() -> Self {
        Self::with_status(Ok(false))
    }

    pub fn ready() -> Self {
        Self::with_status(Ok(true))
    }

    pub fn unreachable() -> Self {
        Self::with_status(Err("connection refused".to_string()))
    }

    fn with_status(status: Result<bool, String>) -> Self {
        Self {
            status: Mutex::new(Some(status)),
            ..Self::default()
        }
    }

    /// The status probe blocks until the returned gate is notified.
    pub fn gated_status(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.status_gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Training blocks until the returned gate is notified.
    pub fn gated_training(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.train_gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    /// Each prediction blocks until the returned gate is notified.
    pub fn gated_prediction(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.predict_gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn then_train(self, outcome: Result<f64, &str>) -> Self {
        self.train
            .lock()
            .expect("train script")
            .push_back(outcome.map_err(str::to_string));
        self
    }

    pub fn then_predict(self, outcome: Result<AnalysisResult, &str>) -> Self {
        self.predict
            .lock()
            .expect("predict script")
            .push_back(outcome.map_err(str::to_string));
        self
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentService for ScriptedService {
    async fn status(&self) -> Result<ModelStatus, ServiceError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.status_gate {
            gate.notified().await;
        }
        let scripted = self.status.lock().expect("status script").clone();
        match scripted.unwrap_or(Ok(false)) {
            Ok(true) => Ok(ModelStatus::Ready),
            Ok(false) => Ok(ModelStatus::NotTrained(STATUS_NOT_TRAINED.to_string())),
            Err(message) => Err(scripted_failure(&message)),
        }
    }

    async fn train(&self) -> Result<TrainReport, ServiceError> {
        self.train_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.train_gate {
            gate.notified().await;
        }
        let next = self.train.lock().expect("train script").pop_front();
        match next.unwrap_or(Ok(0.87)) {
            Ok(accuracy) => Ok(TrainReport { accuracy }),
            Err(message) => Err(scripted_failure(&message)),
        }
    }

    async fn predict(&self, review: &str) -> Result<AnalysisResult, ServiceError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.predict_gate {
            gate.notified().await;
        }
        self.reviews
            .lock()
            .expect("reviews")
            .push(review.to_string());
        let next = self.predict.lock().expect("predict script").pop_front();
        match next {
            Some(Ok(result)) => Ok(result),
            Some(Err(message)) => Err(scripted_failure(&message)),
            None => Err(scripted_failure("no scripted prediction")),
        }
    }
}
