//! Access-enforcing web gateway for the Historia CMS.
//!
//! The gateway fronts the single-page application: it owns the session
//! cookie, resolves the viewer against the backend on every navigation,
//! and applies the access guard before any part of the app shell is
//! served.

mod config;
mod middleware;
mod readiness;
mod routes;
mod session;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, middleware::from_fn_with_state, routing::get};
use historia_access::SessionSource;
use historia_guard::{AccessGuard, RouteTable};
use tokio::sync::watch;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::GatewayConfig;
use crate::readiness::BackendReadiness;
use crate::session::HttpSessionSource;

/// Shared application state.
pub struct AppState {
    /// Gateway configuration.
    pub config: GatewayConfig,
    /// The access guard consulted on every navigation.
    pub guard: AccessGuard,
    /// Session resolution against the backend.
    pub session_source: Box<dyn SessionSource>,
    /// Latest known backend readiness.
    pub readiness: watch::Receiver<BackendReadiness>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = GatewayConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    // Probe the backend until it answers; requests observe the latest state
    let readiness = readiness::spawn_probe(
        config.backend_url.clone(),
        Duration::from_secs(config.probe.interval_seconds),
    );

    let session_source: Box<dyn SessionSource> =
        Box::new(HttpSessionSource::new(config.backend_url.clone()));

    let guard = AccessGuard::new(RouteTable::historia(), config.guard.clone());

    let listen_addr = config.listen_addr.clone();
    let asset_dir = std::path::PathBuf::from(&config.asset_dir);
    let index = asset_dir.join("index.html");

    let state = Arc::new(AppState {
        config,
        guard,
        session_source,
        readiness,
    });

    // The SPA bundle, gated behind the guard; unknown paths fall back to
    // the shell so client-side routing can take over
    let spa = Router::new()
        .fallback_service(ServeDir::new(&asset_dir).not_found_service(ServeFile::new(index)))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::guard_navigation,
        ));

    let app = Router::new()
        // Auth routes
        .route("/auth/login", get(routes::login))
        .route("/auth/callback", get(routes::callback))
        .route("/auth/logout", get(routes::logout))
        .merge(spa)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", listen_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
    tracing::info!("shutting down");
}
