pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use middleware::require_session;
pub use models::*;
pub use services::*;
