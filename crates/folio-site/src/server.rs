//! Server lifecycle: bind, serve, shut down on Ctrl+C.

use std::future::Future;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::{Error, Result};
use crate::router::create_router;
use crate::state::{AppState, DEFAULT_TITLE};

/// Settings the server needs at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub site_title: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            static_dir: PathBuf::from("public"),
            site_title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ServerConfig {
    /// `host:port` as passed to the listener.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// The portfolio site server.
pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router without binding.
    pub fn router(&self) -> Router {
        let state = AppState::new(
            self.config.site_title.clone(),
            self.config.static_dir.clone(),
        );
        create_router(state)
    }

    /// Bind the listener. Port 0 picks a free port.
    pub async fn bind(self) -> Result<BoundServer> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        Ok(BoundServer {
            listener,
            router: self.router(),
        })
    }
}

/// A server with its listener bound, ready to accept connections.
pub struct BoundServer {
    listener: TcpListener,
    router: Router,
}

impl BoundServer {
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(Error::Serve)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn serve_until<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = self.listener.local_addr() {
            info!("Listening on http://{addr}");
        }
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(Error::Serve)?;
        info!("Server stopped");
        Ok(())
    }

    /// Serve until Ctrl+C.
    pub async fn serve(self) -> Result<()> {
        self.serve_until(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down gracefully..."),
        Err(e) => tracing::warn!("Failed to listen for Ctrl+C: {e}"),
    }
}
