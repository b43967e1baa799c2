//! Task routes: list, create, read, update, delete, result download

use axum::{
    extract::{FromRequest, Multipart, Path, RawQuery, Request, State},
    http::{header::{CONTENT_TYPE, COOKIE}, HeaderMap},
    response::Response,
};
use reqwest::multipart::{Form, Part};

use super::payload::JsonPayload;
use super::relay::{relay_json, relay_json_or_empty, relay_stream, CookiePolicy};
use super::session::SessionCookie;
use super::GatewayState;
use crate::infrastructure::backend::BackendRoute;
use crate::shared::constants::MULTIPART_FORM_DATA;
use crate::shared::errors::{GatewayError, Result};

/// Encoding of an inbound task-creation body, decided from its `Content-Type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Multipart,
    Json,
}

impl BodyKind {
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type {
            Some(value) if value.to_ascii_lowercase().contains(MULTIPART_FORM_DATA) => {
                BodyKind::Multipart
            }
            _ => BodyKind::Json,
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::from_content_type(headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()))
    }
}

/// Task-creation payload ready to be sent to the backend
pub enum TaskBody {
    /// Re-assembled form. reqwest writes the content type and a fresh boundary.
    Multipart(Form),
    Json(serde_json::Value),
}

impl TaskBody {
    pub async fn read(request: Request) -> Result<Self> {
        match BodyKind::from_headers(request.headers()) {
            BodyKind::Multipart => {
                let multipart = Multipart::from_request(request, &())
                    .await
                    .map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
                Ok(TaskBody::Multipart(into_form(multipart).await?))
            }
            BodyKind::Json => {
                let JsonPayload(payload) = JsonPayload::read(request).await?;
                Ok(TaskBody::Json(payload))
            }
        }
    }
}

/// Copy every field as-is: name, file name, part content type and raw bytes.
/// The buffered `Bytes` become the part body without another copy.
async fn into_form(mut multipart: Multipart) -> Result<Form> {
    let mut form = Form::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| GatewayError::InvalidRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;

        let length = data.len() as u64;
        let mut part = Part::stream_with_length(data, length);
        if let Some(file_name) = file_name {
            part = part.file_name(file_name);
        }
        if let Some(content_type) = content_type {
            part = part.mime_str(&content_type)?;
        }

        form = form.part(name, part);
    }

    Ok(form)
}

/// GET /api/tasks
/// Query string (pagination, status filter) goes to the backend verbatim
pub async fn list_tasks_handler(
    State(state): State<GatewayState>,
    session: SessionCookie,
    RawQuery(query): RawQuery,
) -> Result<Response> {
    let route = BackendRoute::ListTasks;
    let request = state
        .backend
        .request(&route, query.as_deref())
        .header(COOKIE, session.header_value().clone());
    let upstream = state.backend.send(&route, request).await?;

    relay_json(&route, upstream, CookiePolicy::Discard).await
}

/// POST /api/tasks
/// Accepts a JSON document or a multipart upload
pub async fn create_task_handler(
    State(state): State<GatewayState>,
    session: SessionCookie,
    request: Request,
) -> Result<Response> {
    let route = BackendRoute::CreateTask;
    let outbound = state
        .backend
        .request(&route, None)
        .header(COOKIE, session.header_value().clone());

    let outbound = match TaskBody::read(request).await? {
        TaskBody::Multipart(form) => outbound.multipart(form),
        TaskBody::Json(payload) => outbound.json(&payload),
    };
    let upstream = state.backend.send(&route, outbound).await?;

    relay_json(&route, upstream, CookiePolicy::Discard).await
}

/// GET /api/tasks/{task_id}
pub async fn get_task_handler(
    State(state): State<GatewayState>,
    session: SessionCookie,
    Path(task_id): Path<String>,
) -> Result<Response> {
    let route = BackendRoute::GetTask(&task_id);
    let request = state
        .backend
        .request(&route, None)
        .header(COOKIE, session.header_value().clone());
    let upstream = state.backend.send(&route, request).await?;

    relay_json(&route, upstream, CookiePolicy::Discard).await
}

/// PUT /api/tasks/{task_id}
pub async fn update_task_handler(
    State(state): State<GatewayState>,
    session: SessionCookie,
    Path(task_id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> Result<Response> {
    let route = BackendRoute::UpdateTask(&task_id);
    let request = state
        .backend
        .request(&route, None)
        .header(COOKIE, session.header_value().clone())
        .json(&payload);
    let upstream = state.backend.send(&route, request).await?;

    relay_json(&route, upstream, CookiePolicy::Discard).await
}

/// DELETE /api/tasks/{task_id}
pub async fn delete_task_handler(
    State(state): State<GatewayState>,
    session: SessionCookie,
    Path(task_id): Path<String>,
) -> Result<Response> {
    let route = BackendRoute::DeleteTask(&task_id);
    let request = state
        .backend
        .request(&route, None)
        .header(COOKIE, session.header_value().clone());
    let upstream = state.backend.send(&route, request).await?;

    relay_json_or_empty(&route, upstream).await
}

/// GET /api/tasks/{task_id}/result
/// Result artifact (markdown, PDF, ...) streamed with the backend's headers
pub async fn task_result_handler(
    State(state): State<GatewayState>,
    session: SessionCookie,
    Path(task_id): Path<String>,
) -> Result<Response> {
    let route = BackendRoute::TaskResult(&task_id);
    let request = state
        .backend
        .request(&route, None)
        .header(COOKIE, session.header_value().clone());
    let upstream = state.backend.send(&route, request).await?;

    Ok(relay_stream(&route, upstream))
}
