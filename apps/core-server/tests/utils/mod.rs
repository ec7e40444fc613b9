use std::sync::OnceLock;

pub mod api_clients;
pub mod context;
pub mod mock_server;

pub fn client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}
