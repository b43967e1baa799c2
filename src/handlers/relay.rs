//! Translation of backend responses into client responses

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use futures::TryStreamExt;

use crate::infrastructure::backend::BackendRoute;
use crate::shared::constants::{HOP_BY_HOP_HEADERS, JSON_CONTENT_TYPE};
use crate::shared::errors::Result;
use crate::shared::logging;

/// Which backend responses get their `Set-Cookie` headers copied to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookiePolicy {
    Discard,
    OnSuccess,
    /// Logout: clearing cookies must reach the browser even when the backend refuses
    Always,
}

impl CookiePolicy {
    pub fn applies(&self, status: StatusCode) -> bool {
        match self {
            CookiePolicy::Discard => false,
            CookiePolicy::OnSuccess => status.is_success(),
            CookiePolicy::Always => true,
        }
    }
}

/// Copy each `Set-Cookie` value as its own header. Returns how many were copied.
pub fn replicate_set_cookies(from: &HeaderMap, to: &mut HeaderMap) -> usize {
    let cookies: Vec<HeaderValue> = from.get_all(SET_COOKIE).iter().cloned().collect();
    let count = cookies.len();
    for cookie in cookies {
        to.append(SET_COOKIE, cookie);
    }
    count
}

/// Relay status and JSON body. A body that is not JSON is a transport failure.
///
/// The backend's bytes are validated, then relayed untouched, so key order and
/// number formatting survive.
pub async fn relay_json(
    route: &BackendRoute<'_>,
    upstream: reqwest::Response,
    cookies: CookiePolicy,
) -> Result<Response> {
    let status = upstream.status();
    let upstream_headers = upstream.headers().clone();

    let bytes = upstream.bytes().await?;
    serde_json::from_slice::<serde::de::IgnoredAny>(&bytes)?;

    let mut response = (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
        bytes,
    )
        .into_response();
    if cookies.applies(status) {
        let count = replicate_set_cookies(&upstream_headers, response.headers_mut());
        if count > 0 {
            logging::log_cookie_replication(route.name(), count);
        }
    }

    Ok(response)
}

/// Like [`relay_json`], except a 204 is answered with an empty 204
pub async fn relay_json_or_empty(
    route: &BackendRoute<'_>,
    upstream: reqwest::Response,
) -> Result<Response> {
    if upstream.status() == StatusCode::NO_CONTENT {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    relay_json(route, upstream, CookiePolicy::Discard).await
}

/// Stream the body through untouched, keeping the backend's headers
pub fn relay_stream(route: &BackendRoute<'_>, upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let upstream_headers = upstream.headers().clone();

    let route_name = route.name();
    let stream = upstream.bytes_stream().inspect_err(move |e| {
        logging::log_gateway_failure(&format!("{} stream interrupted: {}", route_name, e));
    });

    let mut response = Response::new(Body::from_stream(stream));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    for (name, value) in upstream_headers.iter() {
        if !HOP_BY_HOP_HEADERS.contains(&name.as_str()) {
            headers.append(name.clone(), value.clone());
        }
    }

    response
}
