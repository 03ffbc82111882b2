//! # Portiero (Session Gateway)
//!
//! `portiero` sits between an application and an external
//! backend-as-a-service authentication provider. It resolves the
//! `session_token` cookie into a user record once per request, attaches the
//! user to the request context for downstream handlers, and drives logout
//! (remote revocation, cookie deletion, redirect to the login page).
//!
//! ## Session Resolution
//!
//! The auth middleware performs at most one provider call per incoming
//! request. Anonymous requests are first-class: a missing cookie, an
//! unrecognized session, or a provider outage all leave the request without
//! an identity rather than failing it.
//!
//! ## Client Session State
//!
//! [`store::AuthStore`] mirrors the resolved identity into
//! per-client-session state for server-rendered frontends. The store is
//! only ever seeded from a request that already went through the middleware;
//! it never re-authenticates on its own.

pub mod api;
pub mod cli;
pub mod provider;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
