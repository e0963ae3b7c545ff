pub mod chat;
pub mod content;
pub mod health;

pub use chat::chat;
pub use content::{content_routes, routes as content_resource_routes};
pub use health::{health_check, metrics_endpoint, readiness_check, root};
