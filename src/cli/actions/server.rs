use crate::{
    api,
    api::handlers::auth::AuthConfig,
    cli::{actions::Action, globals::GlobalArgs},
    provider::ProviderClient,
};
use anyhow::Result;
use std::sync::Arc;

/// Handle the server action
pub async fn handle(action: Action) -> Result<()> {
    match action {
        Action::Server {
            port,
            provider_url,
            provider_client_key,
            frontend_url,
            login_path,
        } => {
            let globals = GlobalArgs::new(provider_url, provider_client_key);

            let provider = Arc::new(ProviderClient::new(&globals)?);

            let config = AuthConfig::new(frontend_url).with_login_path(login_path);

            api::new(port, config, provider).await?;
        }
    }

    Ok(())
}
