//! `ecosprout-auth`: demo sign-in for the site.
//!
//! There is exactly one account and its credentials are hardcoded. This is
//! not an access-control boundary; nothing in the catalog is gated on it.

pub mod service;
pub mod session;
pub mod user;

pub use service::{AuthError, AuthService, DEMO_EMAIL, DEMO_PASSWORD, DEFAULT_AUTH_DELAY};
pub use session::{FileSessionStore, InMemorySessionStore, SESSION_KEY, SessionError, SessionStore};
pub use user::{User, UserRole};
