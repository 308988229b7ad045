pub mod session;
pub mod store;

pub use session::SessionManager;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
