use crate::cli::actions::Action;
use anyhow::Result;
use secrecy::SecretString;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    Ok(Action::Server {
        port: matches.get_one::<u16>("port").copied().unwrap_or(8080),
        provider_url: matches
            .get_one("provider-url")
            .map(|s: &String| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --provider-url"))?,
        provider_client_key: matches
            .get_one("provider-client-key")
            .map(|s: &String| SecretString::from(s.to_string()))
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --provider-client-key"))?,
        frontend_url: matches
            .get_one("frontend-url")
            .map_or_else(|| "http://localhost:3000".to_string(), |s: &String| s.to_string()),
        login_path: matches
            .get_one("login-path")
            .map_or_else(|| "/login".to_string(), |s: &String| s.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;

    #[test]
    fn test_handler_builds_server_action() -> Result<()> {
        let matches = commands::new().get_matches_from(vec![
            "portiero",
            "--port",
            "9090",
            "--provider-url",
            "https://auth.tld",
            "--provider-client-key",
            "client-key",
            "--frontend-url",
            "https://app.tld",
            "--login-path",
            "/signin",
        ]);

        let Action::Server {
            port,
            provider_url,
            provider_client_key,
            frontend_url,
            login_path,
        } = handler(&matches)?;

        assert_eq!(port, 9090);
        assert_eq!(provider_url, "https://auth.tld");
        assert_eq!(provider_client_key.expose_secret(), "client-key");
        assert_eq!(frontend_url, "https://app.tld");
        assert_eq!(login_path, "/signin");

        Ok(())
    }
}
