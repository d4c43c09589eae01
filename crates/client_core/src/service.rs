//! Remote sentiment service: the three logical operations and their HTTP binding.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::ModelStatus,
    error::ApiException,
    protocol::{
        PredictRequest, PredictResponse, StatusResponse, TrainResponse, PREDICT_PATH,
        STATUS_PATH, TRAIN_PATH,
    },
};
use tracing::debug;
use url::Url;

use crate::{
    error::ServiceError,
    types::{AnalysisResult, TrainReport},
};

#[async_trait]
pub trait SentimentService: Send + Sync {
    async fn status(&self) -> Result<ModelStatus, ServiceError>;
    async fn train(&self) -> Result<TrainReport, ServiceError>;
    /// `review` is sent verbatim; callers validate it beforehand.
    async fn predict(&self, review: &str) -> Result<AnalysisResult, ServiceError>;
}

/// A remote call the analyzer has decided to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    Status,
    Train,
    Predict { review: String },
}

impl RemoteCall {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Train => "train",
            Self::Predict { .. } => "predict",
        }
    }
}

/// Tagged outcome of a [`RemoteCall`], folded back into analyzer state.
#[derive(Debug)]
pub enum Completion {
    Status(Result<ModelStatus, ServiceError>),
    Train(Result<TrainReport, ServiceError>),
    Predict(Result<AnalysisResult, ServiceError>),
}

pub async fn execute(service: Arc<dyn SentimentService>, call: RemoteCall) -> Completion {
    debug!(call = call.name(), "dispatching remote call");
    match call {
        RemoteCall::Status => Completion::Status(service.status().await),
        RemoteCall::Train => Completion::Train(service.train().await),
        RemoteCall::Predict { review } => Completion::Predict(service.predict(&review).await),
    }
}

pub struct HttpSentimentService {
    http: Client,
    base_url: Url,
}

impl HttpSentimentService {
    pub fn new(server_url: &str) -> Result<Self, ServiceError> {
        Self::with_client(Client::new(), server_url)
    }

    pub fn with_timeout(server_url: &str, timeout: Option<Duration>) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self::with_client(builder.build()?, server_url)
    }

    pub fn with_client(http: Client, server_url: &str) -> Result<Self, ServiceError> {
        Ok(Self {
            http,
            base_url: normalize_base_url(server_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl SentimentService for HttpSentimentService {
    async fn status(&self) -> Result<ModelStatus, ServiceError> {
        let res = self.http.get(self.endpoint(STATUS_PATH)?).send().await?;
        let body: StatusResponse = decode(res).await?;
        Ok(ModelStatus::from_wire(&body.status))
    }

    async fn train(&self) -> Result<TrainReport, ServiceError> {
        let res = self.http.post(self.endpoint(TRAIN_PATH)?).send().await?;
        let body: TrainResponse = decode(res).await?;
        let accuracy = body
            .accuracy
            .ok_or_else(|| ServiceError::Decode("missing accuracy in training response".into()))?;
        Ok(TrainReport { accuracy })
    }

    async fn predict(&self, review: &str) -> Result<AnalysisResult, ServiceError> {
        let res = self
            .http
            .post(self.endpoint(PREDICT_PATH)?)
            .json(&PredictRequest {
                review: review.to_string(),
            })
            .send()
            .await?;
        let body: PredictResponse = decode(res).await?;
        Ok(body.into())
    }
}

fn normalize_base_url(server_url: &str) -> Result<Url, ServiceError> {
    let mut url = Url::parse(server_url.trim())?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ServiceError> {
    let status = res.status();
    let body = res.bytes().await?;
    if !status.is_success() {
        return Err(ApiException::from_body(status.as_u16(), &body).into());
    }
    serde_json::from_slice(&body)
        .map_err(|err| ServiceError::Decode(format!("malformed response body: {err}")))
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
