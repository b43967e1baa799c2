//! Auth routes: login, register, current user, logout, refresh
//!
//! Login and register are open; the other three require the session cookie.

use axum::{
    extract::State,
    http::header::COOKIE,
    response::Response,
};

use super::payload::JsonPayload;
use super::relay::{relay_json, CookiePolicy};
use super::session::{RefreshCookie, SessionCookie};
use super::GatewayState;
use crate::infrastructure::backend::BackendRoute;
use crate::shared::errors::Result;

/// POST /api/auth/login
pub async fn login_handler(
    State(state): State<GatewayState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Response> {
    write_through(&state, BackendRoute::Login, &payload).await
}

/// POST /api/auth/register
pub async fn register_handler(
    State(state): State<GatewayState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Response> {
    write_through(&state, BackendRoute::Register, &payload).await
}

/// Forward a JSON body without credentials and hand the new session cookies to the client
async fn write_through(
    state: &GatewayState,
    route: BackendRoute<'_>,
    payload: &serde_json::Value,
) -> Result<Response> {
    let request = state.backend.request(&route, None).json(payload);
    let upstream = state.backend.send(&route, request).await?;

    relay_json(&route, upstream, CookiePolicy::OnSuccess).await
}

/// GET /api/auth/me
pub async fn me_handler(
    State(state): State<GatewayState>,
    session: SessionCookie,
) -> Result<Response> {
    let route = BackendRoute::Me;
    let request = state
        .backend
        .request(&route, None)
        .header(COOKIE, session.header_value().clone());
    let upstream = state.backend.send(&route, request).await?;

    relay_json(&route, upstream, CookiePolicy::Discard).await
}

/// POST /api/auth/logout
///
/// The backend answers with expired cookies; those are passed on whatever the status.
pub async fn logout_handler(
    State(state): State<GatewayState>,
    session: SessionCookie,
) -> Result<Response> {
    let route = BackendRoute::Logout;
    let request = state
        .backend
        .request(&route, None)
        .header(COOKIE, session.header_value().clone());
    let upstream = state.backend.send(&route, request).await?;

    relay_json(&route, upstream, CookiePolicy::Always).await
}

/// POST /api/auth/refresh
pub async fn refresh_handler(
    State(state): State<GatewayState>,
    RefreshCookie(session): RefreshCookie,
) -> Result<Response> {
    let route = BackendRoute::Refresh;
    let request = state
        .backend
        .request(&route, None)
        .header(COOKIE, session.header_value().clone());
    let upstream = state.backend.send(&route, request).await?;

    relay_json(&route, upstream, CookiePolicy::OnSuccess).await
}
