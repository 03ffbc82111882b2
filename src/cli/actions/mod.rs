pub mod server;

use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        provider_url: String,
        provider_client_key: SecretString,
        frontend_url: String,
        login_path: String,
    },
}
