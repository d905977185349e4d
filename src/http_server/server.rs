//! # HTTP Server
//!
//! Combines the album and health routers behind CORS and request tracing,
//! and runs them until Ctrl-C.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::album::{AlbumRepository, DuplicatePolicy, InMemoryAlbumStore};

use super::album_routes::album_routes;
use super::config::HttpServerConfig;
use super::observability_routes::health_routes;

/// HTTP server for the album catalogue
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over a seeded in-memory store with default configuration
    pub fn new() -> Self {
        let store = Arc::new(InMemoryAlbumStore::seeded(DuplicatePolicy::default()));
        Self::with_store(HttpServerConfig::default(), store)
    }

    /// Create a server over the given store
    pub fn with_store<S: AlbumRepository + 'static>(
        config: HttpServerConfig,
        store: Arc<S>,
    ) -> Self {
        let router = Self::build_router(&config, store);
        Self { config, router }
    }

    fn build_router<S: AlbumRepository + 'static>(
        config: &HttpServerConfig,
        store: Arc<S>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Origins from `Config` are already validated.
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|origin| match origin.parse() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(%origin, "ignoring unparseable CORS origin");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(album_routes(store))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "album service listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("album service stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
