/// Auth routes (login, register, me, logout, refresh)
pub mod auth;

/// Task CRUD, upload and result download
pub mod tasks;

/// Liveness check
pub mod health;

/// Backend response → client response translation
pub mod relay;

/// Session cookie extractors
pub mod session;

/// JSON body extractor with gateway-shaped rejections
pub mod payload;

pub use auth::{login_handler, logout_handler, me_handler, refresh_handler, register_handler};
pub use tasks::{
    create_task_handler, delete_task_handler, get_task_handler, list_tasks_handler,
    task_result_handler, update_task_handler,
};
pub use health::health_handler;
pub use payload::JsonPayload;
pub use session::{RefreshCookie, SessionCookie};

use crate::infrastructure::backend::BackendClient;

/// Shared state of every gateway handler
#[derive(Clone)]
pub struct GatewayState {
    pub backend: BackendClient,
}

impl GatewayState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend: BackendClient::new(backend_url),
        }
    }
}
