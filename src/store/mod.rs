//! Per-client-session auth state.
//!
//! Server-rendered frontends need the resolved user without calling the
//! provider again. An [`AuthStore`] is created per client session by
//! whoever owns that session and seeded from a request whose middleware
//! already resolved the user. The store holds no credentials, performs no
//! authentication of its own, and is an explicit value handed to its
//! consumers rather than a process-wide singleton.
//!
//! Logout policy: the gateway clears the cookie over HTTP; the owner of the
//! store is expected to call [`AuthStore::clear`] when it drives logout so
//! the in-memory state returns to `Anonymous` as well.

use std::sync::RwLock;

use axum::http::Extensions;

use crate::{api::handlers::auth::CurrentUser, provider::User};

/// The two states a client session can be in.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
}

/// Reactive cell mirroring the identity resolved for one client session.
#[derive(Debug, Default)]
pub struct AuthStore {
    user: RwLock<Option<User>>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a request that already went through the auth
    /// middleware. No-op when the request was anonymous, so an existing
    /// identity is never downgraded by an unauthenticated navigation.
    pub fn hydrate(&self, extensions: &Extensions) {
        if let Some(CurrentUser(user)) = extensions.get::<CurrentUser>() {
            self.set_user(user.clone());
        }
    }

    /// Overwrite the stored identity.
    pub fn set_user(&self, user: User) {
        if let Ok(mut guard) = self.user.write() {
            *guard = Some(user);
        }
    }

    /// Return the session to `Anonymous`, typically on logout.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.user.write() {
            *guard = None;
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.user.read().ok().and_then(|guard| guard.clone())
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.user()
            .map_or(SessionState::Anonymous, SessionState::Authenticated)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), SessionState::Authenticated(_))
    }
}
