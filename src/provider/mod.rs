//! HTTP client for the external authentication provider.
//!
//! The provider owns sessions, tokens, and user records. This crate only
//! consumes two operations: resolve a session token into a user, and revoke
//! a session. Everything else (token issuance, expiry, storage) is opaque.

use crate::cli::globals::GlobalArgs;
use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, instrument};
use url::Url;

const CLIENT_KEY_HEADER: &str = "x-client-key";

/// Opaque user record returned by the provider.
///
/// The gateway never inspects individual fields; the payload is passed
/// through to consumers untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub Value);

/// Build a full endpoint URL from the provider base URL.
pub fn endpoint_url(base_url: &str, endpoint: &str) -> Result<String> {
    let url = Url::parse(base_url)?;

    let scheme = url.scheme();

    let host = url
        .host()
        .ok_or_else(|| anyhow!("Error parsing URL: no host specified"))?
        .to_owned();

    let port = match url.port() {
        Some(p) => p,
        None => match scheme {
            "http" => 80,
            "https" => 443,
            _ => return Err(anyhow!("Error parsing URL: unsupported scheme {}", scheme)),
        },
    };

    let endpoint_url = format!("{scheme}://{host}:{port}{endpoint}");

    debug!("endpoint URL: {}", endpoint);

    Ok(endpoint_url)
}

/// Client for the provider's session API.
#[derive(Clone, Debug)]
pub struct ProviderClient {
    http: Client,
    base_url: String,
    client_key: SecretString,
}

impl ProviderClient {
    /// Build a client from the global provider credentials.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(globals: &GlobalArgs) -> Result<Self> {
        let http = Client::builder().user_agent(crate::APP_USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url: globals.provider_url.clone(),
            client_key: globals.provider_client_key.clone(),
        })
    }

    /// Exchange a session token for the user it belongs to.
    ///
    /// Returns `Ok(None)` when the provider does not recognize the session;
    /// only transport-level or unexpected provider failures surface as `Err`.
    #[instrument(skip(self, token))]
    pub async fn resolve_user(&self, token: &str) -> Result<Option<User>> {
        let user_url = endpoint_url(&self.base_url, "/v1/auth/user")?;

        let response = self
            .http
            .get(&user_url)
            .header(CLIENT_KEY_HEADER, self.client_key.expose_secret())
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::NOT_FOUND {
            debug!("session not recognized by provider: {}", status);
            return Ok(None);
        }

        if !status.is_success() {
            let json_response: Value = response.json().await?;

            return Err(anyhow!(
                "{} - {}, {}",
                user_url,
                status,
                json_response["errors"][0].as_str().unwrap_or("")
            ));
        }

        let json_response: Value = response.json().await?;

        match json_response.get("user") {
            None | Some(Value::Null) => Ok(None),
            Some(user) => Ok(Some(User(user.clone()))),
        }
    }

    /// Revoke the session behind a token.
    #[instrument(skip(self, token))]
    pub async fn sign_out(&self, token: &str) -> Result<()> {
        let signout_url = endpoint_url(&self.base_url, "/v1/auth/signout")?;

        let mut map = HashMap::new();
        map.insert("session_token", token);

        let response = self
            .http
            .post(&signout_url)
            .header(CLIENT_KEY_HEADER, self.client_key.expose_secret())
            .json(&map)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let json_response: Value = response.json().await?;

            return Err(anyhow!(
                "{} - {}, {}",
                signout_url,
                status,
                json_response["errors"][0].as_str().unwrap_or("")
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use serde_json::json;

    #[test]
    fn test_endpoint_url_explicit_port() -> Result<()> {
        let url = endpoint_url("https://auth.tld:8443", "/v1/auth/user")?;
        assert_eq!(url, "https://auth.tld:8443/v1/auth/user");
        Ok(())
    }

    #[test]
    fn test_endpoint_url_default_ports() -> Result<()> {
        assert_eq!(
            endpoint_url("http://auth.tld", "/v1/auth/user")?,
            "http://auth.tld:80/v1/auth/user"
        );
        assert_eq!(
            endpoint_url("https://auth.tld", "/v1/auth/signout")?,
            "https://auth.tld:443/v1/auth/signout"
        );
        Ok(())
    }

    #[test]
    fn test_endpoint_url_unsupported_scheme() {
        assert!(endpoint_url("ftp://auth.tld", "/v1/auth/user").is_err());
    }

    #[test]
    fn test_user_is_transparent_json() -> Result<()> {
        let user: User = serde_json::from_value(json!({"id": 1, "name": "Alice"}))?;
        assert_eq!(user.0["name"], "Alice");
        assert_eq!(serde_json::to_value(&user)?, json!({"id": 1, "name": "Alice"}));
        Ok(())
    }

    #[test]
    fn test_client_from_globals() -> Result<()> {
        let globals = GlobalArgs::new(
            "https://auth.tld".to_string(),
            SecretString::from("client-key".to_string()),
        );
        let client = ProviderClient::new(&globals)?;
        assert_eq!(client.base_url, "https://auth.tld");
        Ok(())
    }
}
