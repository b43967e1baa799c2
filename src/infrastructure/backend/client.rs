use reqwest::{Client, RequestBuilder, Response};

use super::routes::BackendRoute;
use crate::shared::constants::DEFAULT_BACKEND_URL;
use crate::shared::errors::Result;
use crate::shared::logging;

/// HTTP client bound to the backend base URL.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Clone)]
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full backend URL; `query` is appended verbatim when non-empty
    pub fn url(&self, route: &BackendRoute<'_>, query: Option<&str>) -> String {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}{}?{}", self.base_url, route.path(), query),
            None => format!("{}{}", self.base_url, route.path()),
        }
    }

    /// Start an outbound request for `route`. Headers and body are the caller's job.
    pub fn request(&self, route: &BackendRoute<'_>, query: Option<&str>) -> RequestBuilder {
        self.client.request(route.method(), self.url(route, query))
    }

    /// Send a single attempt. Any non-2xx status is returned as a normal response.
    pub async fn send(&self, route: &BackendRoute<'_>, request: RequestBuilder) -> Result<Response> {
        let request = request.build()?;
        logging::log_forward_start(route.name(), request.method().as_str(), request.url().as_str());

        let response = self.client.execute(request).await?;
        logging::log_backend_response(route.name(), response.status().as_u16());

        Ok(response)
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
