//! Shared utilities for integration testing.

use berry_stats::config::AppConfig;
use berry_stats::http::HttpServer;

/// Build a config pointing the upstream client at a mock server.
pub fn test_config(upstream_base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.pokeapi.base_url = upstream_base_url.to_string();
    config.pokeapi.timeout_secs = 5;
    config
}

/// Start the service on an ephemeral local port and return its base URL.
///
/// The listener is bound before the server task is spawned, so requests can
/// be issued immediately.
pub async fn start_service(config: AppConfig) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).expect("Failed to build server");
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{}", addr)
}
