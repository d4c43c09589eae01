use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body returned by the sentiment service on any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiException {
    pub status: u16,
    pub message: String,
}

impl ApiException {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Builds an exception from a raw error body, falling back to the status
    /// code when the body is not an [`ErrorResponse`].
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(parsed) if !parsed.error.trim().is_empty() => Self::new(status, parsed.error),
            _ => Self::new(status, format!("server returned {status}")),
        }
    }
}

impl From<ApiException> for ErrorResponse {
    fn from(value: ApiException) -> Self {
        Self {
            error: value.message,
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field_from_body() {
        let body = br#"{"error":"Model not trained","details":"trace"}"#;
        let exc = ApiException::from_body(400, body);
        assert_eq!(exc.status, 400);
        assert_eq!(exc.to_string(), "Model not trained");
    }

    #[test]
    fn serialized_error_response_round_trips_message() {
        let body = serde_json::to_vec(&ErrorResponse::new("No review provided")).expect("json");
        assert_eq!(body, br#"{"error":"No review provided"}"#);
        assert_eq!(
            ApiException::from_body(400, &body).message,
            "No review provided"
        );
    }

    #[test]
    fn falls_back_to_status_for_unparseable_body() {
        let exc = ApiException::from_body(502, b"<html>bad gateway</html>");
        assert_eq!(exc.message, "server returned 502");
    }
}
