//! Session endpoint and cookie helpers.

use axum::{
    http::{header::COOKIE, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Extension, Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::{middleware::CurrentUser, state::AuthConfig};

pub(crate) const SESSION_COOKIE_NAME: &str = "session_token";

// Static so deletion can never fail header construction; logout must always
// be able to clear the cookie.
const CLEAR_COOKIE: &str = "session_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";
const CLEAR_COOKIE_SECURE: &str = "session_token=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Secure";

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    /// Provider-defined user record, passed through untouched.
    #[schema(value_type = Object)]
    pub user: serde_json::Value,
}

#[utoipa::path(
    get,
    path = "/auth/session",
    responses(
        (status = 200, description = "Session resolved to a user", body = SessionResponse),
        (status = 204, description = "No active session")
    ),
    tag = "auth"
)]
pub async fn session(user: Option<Extension<CurrentUser>>) -> impl IntoResponse {
    // Missing or unresolved cookies read as "no session"; the middleware
    // already decided, no provider call happens here.
    match user {
        Some(Extension(CurrentUser(user))) => {
            (StatusCode::OK, Json(SessionResponse { user: user.0 })).into_response()
        }
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Pull the session token out of the request's cookie header, if any.
pub(crate) fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        let trimmed = pair.trim();
        let mut parts = trimmed.splitn(2, '=');
        let key = parts.next()?.trim();
        let val = parts.next()?.trim();
        if key == SESSION_COOKIE_NAME {
            return Some(val.to_string());
        }
    }
    None
}

/// Build the `Set-Cookie` value that deletes the session cookie.
pub(crate) fn clear_session_cookie(config: &AuthConfig) -> HeaderValue {
    if config.session_cookie_secure() {
        HeaderValue::from_static(CLEAR_COOKIE_SECURE)
    } else {
        HeaderValue::from_static(CLEAR_COOKIE)
    }
}
