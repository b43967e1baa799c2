// Domain layer: wire shapes of the backend API
pub mod models;
