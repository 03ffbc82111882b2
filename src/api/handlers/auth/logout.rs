//! Logout route.

use axum::{
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Redirect},
    Extension,
};
use std::sync::Arc;
use tracing::error;

use super::{
    session::{clear_session_cookie, extract_session_token},
    state::AuthConfig,
};
use crate::provider::ProviderClient;

#[utoipa::path(
    get,
    path = "/auth/logout",
    responses(
        (status = 303, description = "Cookie cleared, redirected to the login page")
    ),
    tag = "auth"
)]
pub async fn logout(
    headers: HeaderMap,
    Extension(provider): Extension<Arc<ProviderClient>>,
    Extension(config): Extension<Arc<AuthConfig>>,
) -> impl IntoResponse {
    if let Some(token) = extract_session_token(&headers) {
        // Remote revocation is best effort: the client is logged out locally
        // even when the provider call fails.
        if let Err(err) = provider.sign_out(&token).await {
            error!("Failed to revoke session with provider: {err}");
        }
    }

    // Always clear the cookie, even if there was no session to revoke.
    let mut response_headers = HeaderMap::new();
    response_headers.insert(SET_COOKIE, clear_session_cookie(&config));

    (response_headers, Redirect::to(config.login_path()))
}
