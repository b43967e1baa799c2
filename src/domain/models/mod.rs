// Domain models (backend DTOs)
// Pure Rust, no framework dependencies

pub mod user;
pub mod task;
pub mod error;

pub use user::{User, AuthResponse};
pub use task::{Task, TaskList, TaskStatus};
pub use error::ErrorDetail;
