//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests with
//! the `JWT` authorization scheme.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use gourmet_api::{create_app, create_app_state};
use gourmet_common::AppConfig;
use gourmet_db::{create_pool, run_migrations, PoolConfig};
use reqwest::{multipart::Form, Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Upload directory, removed when the server is dropped
    pub media_dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on a free port with migrations applied
    pub async fn start() -> Result<Self> {
        let media_dir = tempfile::tempdir()?;
        let config = test_config(&media_dir)?;

        let pool = create_pool(&PoolConfig::from(&config.database)).await?;
        run_migrations(&pool).await?;

        // Create app state and build application
        let state = create_app_state(config).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            media_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header("Authorization", jwt(token))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.patch(self.url(path)).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    /// Make a multipart POST request with auth token
    pub async fn post_form(&self, path: &str, token: &str, form: Form) -> Result<Response> {
        Ok(self
            .client
            .post(self.url(path))
            .header("Authorization", jwt(token))
            .multipart(form)
            .send()
            .await?)
    }

    /// Make a multipart PATCH request with auth token
    pub async fn patch_form(&self, path: &str, token: &str, form: Form) -> Result<Response> {
        Ok(self
            .client
            .patch(self.url(path))
            .header("Authorization", jwt(token))
            .multipart(form)
            .send()
            .await?)
    }

    /// Make a multipart PUT request with auth token
    pub async fn put_form(&self, path: &str, token: &str, form: Form) -> Result<Response> {
        Ok(self
            .client
            .put(self.url(path))
            .header("Authorization", jwt(token))
            .multipart(form)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token
    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .delete(self.url(path))
            .header("Authorization", jwt(token))
            .send()
            .await?)
    }
}

fn jwt(token: &str) -> String {
    format!("JWT {token}")
}

/// Create a test configuration
///
/// Reads the environment, filling in a port, a JWT secret and a generous rate
/// limit when they are not set. Uploads go to `media_dir`.
pub fn test_config(media_dir: &TempDir) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let overrides: HashMap<&str, String> = HashMap::from([
        ("UPLOAD_DIR", media_dir.path().display().to_string()),
        ("API_PORT", "0".to_string()),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1000".to_string()),
        ("RATE_LIMIT_BURST", "1000".to_string()),
    ]);

    let config = AppConfig::from_lookup(|key| {
        overrides
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .or_else(|| (key == "JWT_SECRET").then(|| "integration-test-secret".to_string()))
    })
    .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}
