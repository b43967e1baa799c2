//! Structured logging for the gateway
//!
//! Every event carries an `operation` field so forwarding, relaying and
//! failures can be filtered independently.

/// Log operations emitted by the gateway
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    CredentialCheck,
    Forward,
    Relay,
    CookieReplication,
    Failure,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::CredentialCheck => "credential_check",
            LogOperation::Forward => "forward",
            LogOperation::Relay => "relay",
            LogOperation::CookieReplication => "cookie_replication",
            LogOperation::Failure => "failure",
        }
    }
}

/// Log an outbound backend call
pub fn log_forward_start(route: &str, method: &str, url: &str) {
    tracing::debug!(
        operation = LogOperation::Forward.as_str(),
        route = route,
        method = method,
        url = url,
        "Forwarding request to backend"
    );
}

/// Log the backend's answer before it is relayed
pub fn log_backend_response(route: &str, status: u16) {
    if (200..300).contains(&status) {
        tracing::info!(
            operation = LogOperation::Relay.as_str(),
            route = route,
            status = status,
            "Relaying backend response"
        );
    } else {
        tracing::warn!(
            operation = LogOperation::Relay.as_str(),
            route = route,
            status = status,
            "Relaying backend rejection"
        );
    }
}

/// Log how many `Set-Cookie` headers were copied onto the client response
pub fn log_cookie_replication(route: &str, count: usize) {
    tracing::debug!(
        operation = LogOperation::CookieReplication.as_str(),
        route = route,
        cookie_count = count,
        "Replicated Set-Cookie headers"
    );
}

/// Log a protected route rejected before reaching the backend
pub fn log_missing_credential(detail: &str) {
    tracing::info!(
        operation = LogOperation::CredentialCheck.as_str(),
        detail = detail,
        "Rejected request without session cookie"
    );
}

/// Log a transport or body failure hidden behind the generic 500 envelope
pub fn log_gateway_failure(error: &str) {
    tracing::error!(
        operation = LogOperation::Failure.as_str(),
        error = error,
        "Gateway request failed"
    );
}
