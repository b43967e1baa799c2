//! Mapping from gateway operations to backend paths
//!
//! Task detail lives at the unversioned `/tasks/{id}` while listing, creation
//! and results live under `/api/v1/tasks`. The backend exposes exactly these
//! paths, so the mapping keeps both prefixes.

use axum::http::Method;

/// One backend operation the gateway knows how to forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendRoute<'a> {
    Login,
    Register,
    Me,
    Logout,
    Refresh,
    ListTasks,
    CreateTask,
    GetTask(&'a str),
    UpdateTask(&'a str),
    DeleteTask(&'a str),
    TaskResult(&'a str),
}

impl BackendRoute<'_> {
    /// Stable label used in logs
    pub fn name(&self) -> &'static str {
        match self {
            BackendRoute::Login => "auth.login",
            BackendRoute::Register => "auth.register",
            BackendRoute::Me => "auth.me",
            BackendRoute::Logout => "auth.logout",
            BackendRoute::Refresh => "auth.refresh",
            BackendRoute::ListTasks => "tasks.list",
            BackendRoute::CreateTask => "tasks.create",
            BackendRoute::GetTask(_) => "tasks.get",
            BackendRoute::UpdateTask(_) => "tasks.update",
            BackendRoute::DeleteTask(_) => "tasks.delete",
            BackendRoute::TaskResult(_) => "tasks.result",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            BackendRoute::Me
            | BackendRoute::ListTasks
            | BackendRoute::GetTask(_)
            | BackendRoute::TaskResult(_) => Method::GET,
            BackendRoute::UpdateTask(_) => Method::PUT,
            BackendRoute::DeleteTask(_) => Method::DELETE,
            BackendRoute::Login
            | BackendRoute::Register
            | BackendRoute::Logout
            | BackendRoute::Refresh
            | BackendRoute::CreateTask => Method::POST,
        }
    }

    /// Backend path, task ids percent-encoded
    pub fn path(&self) -> String {
        match self {
            BackendRoute::Login => "/auth/login".to_string(),
            BackendRoute::Register => "/auth/register".to_string(),
            BackendRoute::Me => "/auth/me".to_string(),
            BackendRoute::Logout => "/auth/logout".to_string(),
            BackendRoute::Refresh => "/auth/refresh".to_string(),
            BackendRoute::ListTasks | BackendRoute::CreateTask => "/api/v1/tasks".to_string(),
            BackendRoute::GetTask(id) | BackendRoute::UpdateTask(id) | BackendRoute::DeleteTask(id) => {
                format!("/tasks/{}", urlencoding::encode(id))
            }
            BackendRoute::TaskResult(id) => {
                format!("/api/v1/tasks/{}/result", urlencoding::encode(id))
            }
        }
    }
}
