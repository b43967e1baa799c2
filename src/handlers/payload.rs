//! Inbound JSON bodies
//!
//! Axum's own `Bytes`/`Json` rejections answer in plain text (413, 415, 422).
//! Here every unreadable or invalid body becomes a `GatewayError`, so the
//! client always gets the `{detail}` envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};

use crate::shared::errors::{GatewayError, Result};

/// Buffer the body, honouring the router's `DefaultBodyLimit`
async fn read_body(request: Request) -> Result<Bytes> {
    Bytes::from_request(request, &())
        .await
        .map_err(|e| GatewayError::InvalidRequest(e.body_text()))
}

/// Any JSON document, kept as a `Value` so unknown fields reach the backend
#[derive(Debug, Clone)]
pub struct JsonPayload(pub serde_json::Value);

impl JsonPayload {
    pub async fn read(request: Request) -> Result<Self> {
        let bytes = read_body(request).await?;
        Ok(Self(serde_json::from_slice(&bytes)?))
    }
}

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(request: Request, _state: &S) -> Result<Self> {
        Self::read(request).await
    }
}
