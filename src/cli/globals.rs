use secrecy::SecretString;

/// Cross-cutting provider credentials shared by every outbound call.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub provider_url: String,
    pub provider_client_key: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(provider_url: String, provider_client_key: SecretString) -> Self {
        Self {
            provider_url,
            provider_client_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(
            "https://auth.tld".to_string(),
            SecretString::from("client-key".to_string()),
        );
        assert_eq!(args.provider_url, "https://auth.tld");
        assert_eq!(args.provider_client_key.expose_secret(), "client-key");
    }
}
