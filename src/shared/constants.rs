//! Fixed values of the gateway contract

/// Backend used when no `BACKEND_URL` is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Prefix under which every gateway route is mounted
pub const API_PREFIX: &str = "/api";

/// Upload limit for task creation (10MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub const DETAIL_NOT_AUTHENTICATED: &str = "Not authenticated";
pub const DETAIL_NO_REFRESH_TOKEN: &str = "No refresh token found";
pub const DETAIL_INTERNAL_ERROR: &str = "Internal server error";

pub const MULTIPART_FORM_DATA: &str = "multipart/form-data";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Response headers that describe the backend connection's framing rather than the payload
pub const HOP_BY_HOP_HEADERS: &[&str] = &["content-length", "transfer-encoding", "connection"];
