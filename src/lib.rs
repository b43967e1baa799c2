// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

pub mod handlers;
pub mod infrastructure;

pub use config::GatewayConfig;
pub use handlers::GatewayState;
pub use infrastructure::api::build_router;
pub use shared::errors::{GatewayError, Result};
