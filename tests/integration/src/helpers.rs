//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests
//! with self-asserted identity headers.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use pool_api::server::{create_app, create_app_state};
use pool_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, IdentityConfig, PlacesConfig,
    ServerConfig,
};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::TestUser;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server against a fresh in-memory database
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request without identity headers
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request as a user
    pub async fn get_as(&self, path: &str, who: &TestUser) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("x-user-name", &who.name)
            .header("x-user-email", &who.email)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body as a user
    pub async fn post_as<T: Serialize>(
        &self,
        path: &str,
        who: &TestUser,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("x-user-name", &who.name)
            .header("x-user-email", &who.email)
            .json(body)
            .send()
            .await?)
    }

    /// Make a PUT request as a user
    pub async fn put_as(&self, path: &str, who: &TestUser) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .put(&url)
            .header("x-user-name", &who.name)
            .header("x-user-email", &who.email)
            .send()
            .await?)
    }

    /// Make a DELETE request as a user
    pub async fn delete_as(&self, path: &str, who: &TestUser) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .delete(&url)
            .header("x-user-name", &who.name)
            .header("x-user-email", &who.email)
            .send()
            .await?)
    }
}

/// Test configuration: in-memory SQLite and self-asserted identities
///
/// A single connection keeps every request on the same in-memory database.
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            name: "pool-engine-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        identity: IdentityConfig {
            allowed_domain: "hyderabad.bits-pilani.ac.in".to_string(),
            assertion_secret: None,
        },
        cors: CorsConfig::default(),
        places: PlacesConfig::default(),
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
