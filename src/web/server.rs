//! Web server for Music Hub.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::Config;
use crate::file::MediaStorage;
use crate::{Database, MusicHubError, Result};

use super::handlers::AppState;
use super::router::{create_openapi_router, create_router, create_static_router};

/// Web server for the API and front end.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// Maximum accepted request body in bytes.
    max_upload_size: usize,
    /// Front-end directory.
    static_path: PathBuf,
}

impl WebServer {
    /// Create a new web server.
    pub fn new(config: &Config, db: Database, storage: MediaStorage) -> Result<Self> {
        let addr = config
            .listen_addr()
            .parse()
            .map_err(|e| MusicHubError::Config(format!("Invalid listen address: {e}")))?;

        Ok(Self {
            addr,
            app_state: Arc::new(AppState::new(db, storage)),
            max_upload_size: config.files.max_upload_size_bytes(),
            static_path: PathBuf::from(&config.web.static_path),
        })
    }

    /// Get the server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Build the complete application router.
    pub fn router(&self) -> Router {
        let mut router = create_router(self.app_state.clone(), self.max_upload_size)
            .merge(create_openapi_router());

        if let Some(static_router) = create_static_router(&self.static_path) {
            router = router.merge(static_router);
        }

        router
    }

    /// Run the web server until Ctrl-C.
    pub async fn run(self) -> std::result::Result<(), std::io::Error> {
        let router = self.router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Web server stopped");
        self.app_state.db.close().await;
        Ok(())
    }

    /// Run the server in the background and return the actual bound address.
    ///
    /// This is useful for testing when binding to port 0.
    pub async fn run_with_addr(self) -> std::result::Result<SocketAddr, std::io::Error> {
        let router = self.router();

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                tracing::error!("Web server error: {}", e);
            }
        });

        Ok(local_addr)
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config(dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;
        config.files.upload_dir = dir.path().join("uploads").to_string_lossy().into_owned();
        config.web.static_path = dir.path().join("static").to_string_lossy().into_owned();
        config
    }

    async fn create_test_server(config: &Config) -> WebServer {
        let storage = MediaStorage::new(&config.files.upload_dir).unwrap();
        let db = Database::open_in_memory().await.unwrap();
        WebServer::new(config, db, storage).unwrap()
    }

    #[tokio::test]
    async fn test_web_server_new() {
        let dir = TempDir::new().unwrap();
        let config = create_test_config(&dir);

        let server = create_test_server(&config).await;
        assert_eq!(server.addr().ip().to_string(), "127.0.0.1");
    }

    #[tokio::test]
    async fn test_web_server_invalid_addr() {
        let dir = TempDir::new().unwrap();
        let mut config = create_test_config(&dir);
        config.server.host = "not an address".to_string();

        let storage = MediaStorage::new(&config.files.upload_dir).unwrap();
        let db = Database::open_in_memory().await.unwrap();
        let result = WebServer::new(&config, db, storage);
        assert!(matches!(result, Err(MusicHubError::Config(_))));
    }

    #[tokio::test]
    async fn test_web_server_run() {
        let dir = TempDir::new().unwrap();
        let config = create_test_config(&dir);

        let server = create_test_server(&config).await;
        let addr = server.run_with_addr().await.unwrap();

        let client = reqwest::Client::new();
        let resp = client
            .get(format!("http://{}/api/health", addr))
            .send()
            .await
            .unwrap();

        assert!(resp.status().is_success());
        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["uploads_folder"], true);
    }

    #[tokio::test]
    async fn test_web_server_serves_front_end() {
        let dir = TempDir::new().unwrap();
        let config = create_test_config(&dir);
        std::fs::create_dir_all(&config.web.static_path).unwrap();
        std::fs::write(
            PathBuf::from(&config.web.static_path).join("index.html"),
            "<title>Music Hub</title>",
        )
        .unwrap();

        let server = create_test_server(&config).await;
        let addr = server.run_with_addr().await.unwrap();

        let resp = reqwest::get(format!("http://{}/", addr)).await.unwrap();
        assert!(resp.status().is_success());
        assert!(resp.text().await.unwrap().contains("Music Hub"));
    }
}
