use gitops_api::config::Config;
use gitops_api::startup::{Server, ServerHandle};
use reqwest::Client;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: Client,
    handle: ServerHandle,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(Config::default()).await
    }

    pub async fn spawn_with(mut config: Config) -> Self {
        config.port = 0; // Random port for testing

        let server = Server::bind(config)
            .await
            .expect("Failed to bind test server");
        let handle = server.spawn();
        let port = handle.port();

        TestApp {
            address: format!("http://127.0.0.1:{port}"),
            port,
            client: Client::new(),
            handle,
        }
    }

    pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let response = self
            .client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request");
        let status = response.status();
        let body = response.json().await.expect("Failed to parse JSON");
        (status, body)
    }

    /// Stops the server and releases its port.
    pub async fn shutdown(self) {
        let TestApp { client, handle, .. } = self;
        drop(client);
        handle.shutdown().await.expect("Server did not shut down cleanly");
    }
}
