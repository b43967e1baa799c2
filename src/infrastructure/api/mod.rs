// Inbound HTTP surface
pub mod routes;

pub use routes::{build_router, router_from_config};
