//! Session cookie guard for protected routes
//!
//! The cookie is an opaque credential: it is never parsed or validated here,
//! only checked for presence and replayed to the backend byte for byte.

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap, HeaderValue},
};

use crate::shared::constants::{DETAIL_NOT_AUTHENTICATED, DETAIL_NO_REFRESH_TOKEN};
use crate::shared::errors::{GatewayError, Result};

/// Raw inbound `Cookie` header of an authenticated request
#[derive(Debug, Clone)]
pub struct SessionCookie(HeaderValue);

impl SessionCookie {
    /// Fails with `MissingCredential(missing_detail)` when no non-blank `Cookie` header is present.
    /// Several `Cookie` headers (HTTP/2 splits them) are joined with `"; "`.
    pub fn from_headers(headers: &HeaderMap, missing_detail: &'static str) -> Result<Self> {
        let values: Vec<&HeaderValue> = headers
            .get_all(COOKIE)
            .iter()
            .filter(|value| !value.as_bytes().iter().all(|b| b.is_ascii_whitespace()))
            .collect();

        match values.as_slice() {
            [] => Err(GatewayError::MissingCredential(missing_detail)),
            [single] => Ok(Self((*single).clone())),
            many => {
                let joined = many
                    .iter()
                    .map(|value| value.as_bytes())
                    .collect::<Vec<_>>()
                    .join(&b"; "[..]);
                HeaderValue::from_bytes(&joined)
                    .map(Self)
                    .map_err(|e| GatewayError::InvalidRequest(e.to_string()))
            }
        }
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.0
    }
}

impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        Self::from_headers(&parts.headers, DETAIL_NOT_AUTHENTICATED)
    }
}

/// Same guard as [`SessionCookie`], with the refresh route's rejection text
#[derive(Debug, Clone)]
pub struct RefreshCookie(pub SessionCookie);

impl<S> FromRequestParts<S> for RefreshCookie
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        SessionCookie::from_headers(&parts.headers, DETAIL_NO_REFRESH_TOKEN).map(Self)
    }
}
