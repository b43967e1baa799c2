// Infrastructure: HTTP server surface and backend client
pub mod api;
pub mod backend;
