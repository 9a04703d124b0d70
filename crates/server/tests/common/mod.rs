//! # Common Test Utilities
//!
//! The `TestApp` harness spawns the real server on a random port with its
//! provider pointed at an `httpmock::MockServer` standing in for the Gemini
//! endpoint, so the full proxy contract can be exercised end to end.

#![allow(unused)]

use anyhow::Result;
use httpmock::MockServer;
use reqwest::Client;
use safeguard_server::{config::Config, run};
use tokio::net::TcpListener;
use tokio::time::{sleep, Duration};

pub const GEMINI_PATH: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";
pub const TEST_API_KEY: &str = "test-key";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();
        let config = Config {
            port: 0,
            moderation_api_url: mock_server.url(GEMINI_PATH),
            gemini_api_key: Some(TEST_API_KEY.to_string()),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let port = listener.local_addr()?.port();
        let address = format!("http://127.0.0.1:{port}");

        tokio::spawn(async move {
            if let Err(e) = run(listener, config).await {
                eprintln!("Server error: {e}");
            }
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
        })
    }
}
