//! Session-cookie authentication: per-request resolution, the session
//! endpoint, and logout.
//!
//! Flow Overview: the middleware reads the `session_token` cookie, asks the
//! provider who it belongs to, and attaches the answer to the request.
//! Handlers and server-rendered pages only ever read that request-scoped
//! identity; nothing downstream re-authenticates.

pub mod logout;
pub mod middleware;
pub mod session;
mod state;

pub use middleware::{resolve_session, CurrentUser};
pub use state::AuthConfig;

#[cfg(test)]
mod tests;
