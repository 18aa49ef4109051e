pub mod guard;
pub mod routes;
pub mod session_store;

pub use guard::{decide, Area, Decision, SessionGuard};
pub use routes::{home_for, navigate, Navigation, Route};
pub use session_store::{FileSessionStore, MemorySessionStore, SessionStore};
