//! # HTTP Server
//!
//! Builds the service router and runs it until Ctrl-C.

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::{
    ResponseHeaders, API_VERSION_HEADER, DEFAULT_API_VERSION, DEFAULT_DEVELOPER, DEVELOPER_HEADER,
};
use super::user_routes::{route_not_found, user_routes, UsersState};
use crate::config::ServiceConfig;
use crate::store::FileStore;

/// HTTP server for the record service
pub struct HttpServer {
    config: ServiceConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: ServiceConfig) -> Self {
        let router = build_router(&config);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.server.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server, returning once Ctrl-C has drained it
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.socket_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!(
            address = %addr,
            data_file = %self.config.store.data_file.display(),
            strict = self.config.store.strict,
            "record service listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("record service stopped");
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router with all endpoints
pub fn build_router(config: &ServiceConfig) -> Router {
    let users_state = Arc::new(UsersState::new(FileStore::from_config(&config.store)));
    let (api_version, developer) = header_values(&config.headers);

    Router::new()
        .merge(user_routes(users_state))
        .fallback(route_not_found)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(API_VERSION_HEADER),
            api_version,
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(DEVELOPER_HEADER),
            developer,
        ))
        .layer(TraceLayer::new_for_http())
}

fn header_values(headers: &ResponseHeaders) -> (HeaderValue, HeaderValue) {
    headers.values().unwrap_or_else(|field| {
        warn!(field, "invalid response header value, using defaults");
        (
            HeaderValue::from_static(DEFAULT_API_VERSION),
            HeaderValue::from_static(DEFAULT_DEVELOPER),
        )
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
