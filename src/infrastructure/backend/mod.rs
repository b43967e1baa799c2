// Outbound side: the backend API client and its path table
pub mod client;
pub mod routes;

pub use client::BackendClient;
pub use routes::BackendRoute;
