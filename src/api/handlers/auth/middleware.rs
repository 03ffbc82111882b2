//! Per-request session resolution.

use axum::{extract::Request, middleware::Next, response::Response, Extension};
use std::sync::Arc;
use tracing::{debug, warn};

use super::session::extract_session_token;
use crate::provider::{ProviderClient, User};

/// Identity resolved from the session cookie, attached to the request for
/// downstream handlers. Written at most once per request, before any
/// handler runs.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub User);

/// Resolve the session cookie into a user before the request reaches its
/// handler.
///
/// Anonymous requests pass through untouched: a missing cookie, a session
/// the provider does not recognize, and a provider outage all leave the
/// request without a [`CurrentUser`]. An outage must never turn anonymous
/// traffic into server errors, so resolution failures are logged and
/// swallowed here.
pub async fn resolve_session(
    Extension(provider): Extension<Arc<ProviderClient>>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = extract_session_token(request.headers()) {
        match provider.resolve_user(&token).await {
            Ok(Some(user)) => {
                request.extensions_mut().insert(CurrentUser(user));
            }
            Ok(None) => debug!("session cookie did not resolve to a user"),
            Err(err) => warn!("Failed to resolve session with provider: {err}"),
        }
    }

    next.run(request).await
}
