//! HTTP server implementation for the blog API

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use crate::core::error::{Error, Result};
use crate::service::SharedService;

/// Creates the application router with all routes and middleware.
///
/// With a configured origin, CORS is restricted to it and credentials are
/// allowed; without one, any origin is accepted without credentials.
pub fn create_app(service: SharedService, cors_origin: Option<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);
    let cors = match cors_origin {
        Some(origin) => cors.allow_origin(origin).allow_credentials(true),
        None => cors.allow_origin(Any),
    };

    Router::new()
        // Blog routes
        .route("/blogs", get(handlers::list_blogs))
        .route("/blogs", post(handlers::create_blog))
        .route("/blogs/:id", get(handlers::get_blog))
        .route("/blogs/:id", put(handlers::update_blog))
        .route("/blogs/:id", delete(handlers::delete_blog))
        // System routes
        .route("/health", get(handlers::health_check))
        // Apply middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        // Add the service as shared state
        .with_state(service)
}

/// Start the HTTP server and serve until the shutdown future resolves.
pub async fn start_server(
    addr: SocketAddr,
    service: SharedService,
    cors_origin: Option<HeaderValue>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let app = create_app(service, cors_origin);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::config(format!("HTTP server failed: {}", e)))?;

    Ok(())
}
