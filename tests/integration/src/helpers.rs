//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use town_api::{create_app, AppState};
use town_common::{
    AdminConfig, AppConfig, AppSettings, DatabaseConfig, Environment, ServerConfig,
};
use town_db::{create_pool, install_schema, PoolConfig};
use town_service::ServiceContext;

use crate::fixtures::unique_name;

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub pool: PgPool,
    /// Super-admin username configured for this server
    pub super_admin: String,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with its own super-admin name
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        // Connect and install the schema fixture
        let pool = create_pool(&PoolConfig::from(&config.database)).await?;
        install_schema(&pool).await?;

        let super_admin = config.admin.super_admin_username.clone();
        let context = ServiceContext::from_pool(pool.clone(), config.admin.clone());
        let app = create_app(AppState::new(context, config));

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            pool,
            super_admin,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request to a plain path
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Start a request against a subsystem endpoint with `?action=`
    pub fn action(&self, method: Method, path: &str, action: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(), path);
        self.client.request(method, url).query(&[("action", action)])
    }

    /// Start an admin request carrying the id and, when given, the code header
    pub fn admin(
        &self,
        method: Method,
        action: &str,
        admin_id: i32,
        code: Option<&str>,
    ) -> RequestBuilder {
        let builder = self
            .action(method, "/admin", action)
            .header("X-Admin-Id", admin_id.to_string());
        match code {
            Some(code) => builder.header("X-Admin-Code", code),
            None => builder,
        }
    }
}

/// Create a test configuration from `DATABASE_URL`
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let url = std::env::var("DATABASE_URL")?;

    Ok(AppConfig {
        app: AppSettings {
            name: "russian-town-test".to_string(),
            env: Environment::Development,
        },
        api: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url,
            max_connections: 10,
            min_connections: 1,
        },
        admin: AdminConfig {
            super_admin_username: unique_name("wagner"),
        },
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
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

/// Assert response status and return the `error` message
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]
        .as_str()
        .map(ToString::to_string)
        .ok_or_else(|| anyhow::anyhow!("No error field in {body}"))
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
