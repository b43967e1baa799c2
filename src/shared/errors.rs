use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::domain::models::ErrorDetail;
use crate::shared::constants::DETAIL_INTERNAL_ERROR;
use crate::shared::logging;

/// Failures originated by the gateway itself.
///
/// A backend answering with a non-2xx status is not an error here: that
/// response is relayed as-is by the handlers.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Protected route called without a `Cookie` header
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Unreadable request body: {0}")]
    InvalidRequest(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingCredential(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Transport internals never leave the process.
    pub fn detail(&self) -> &'static str {
        match self {
            GatewayError::MissingCredential(detail) => *detail,
            _ => DETAIL_INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match &self {
            GatewayError::MissingCredential(detail) => logging::log_missing_credential(detail),
            other => logging::log_gateway_failure(&other.to_string()),
        }

        (self.status(), Json(ErrorDetail::new(self.detail()))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::{DETAIL_NOT_AUTHENTICATED, DETAIL_NO_REFRESH_TOKEN};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_credential_envelope() {
        let response = GatewayError::MissingCredential(DETAIL_NO_REFRESH_TOKEN).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "detail": "No refresh token found" })
        );
    }

    #[tokio::test]
    async fn test_internal_errors_hide_cause() {
        let parse_error = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let response = GatewayError::MalformedBody(parse_error).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "detail": "Internal server error" })
        );

        let response = GatewayError::InvalidRequest("stream closed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["detail"], "Internal server error");
    }

    #[test]
    fn test_detail_text() {
        assert_eq!(
            GatewayError::MissingCredential(DETAIL_NOT_AUTHENTICATED).detail(),
            "Not authenticated"
        );
    }
}
