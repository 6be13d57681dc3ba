//! # inventory: HTTP CRUD service for stock items
//!
//! `inventory` exposes a small JSON API over a single `products` table. Each product records a
//! name, category, quantity, unit of measure, price and an optional expiry date, together with
//! creation and last-update timestamps maintained by the store.
//!
//! ## Architecture
//!
//! The HTTP layer is built on [Axum](https://github.com/tokio-rs/axum). Handlers in [`api`] decode
//! requests, call the product store through the [`db::handlers::ProductRepository`] trait and map
//! store failures to status codes via [`errors::Error`]. Two stores implement the trait:
//!
//! - [`db::handlers::Products`]: PostgreSQL via `sqlx`, used in production
//! - [`db::handlers::InMemoryProducts`]: process-local, for tests and throwaway instances
//!
//! Every request runs under a deadline (`request_timeout`). When it elapses, or the client goes
//! away, the request future is dropped and any in-flight query is cancelled with it.
//!
//! ## Routes
//!
//! | Method | Path | |
//! |---|---|---|
//! | `POST` | `/api/v1/products` | create, `201` with the stored product |
//! | `GET` | `/api/v1/products` | list all products |
//! | `GET` | `/api/v1/products/{id}` | fetch one, `404` if absent |
//! | `PUT` | `/api/v1/products/{id}` | replace every field |
//! | `DELETE` | `/api/v1/products/{id}` | remove, `204` |
//! | `GET` | `/healthz` | liveness |
//! | `GET` | `/docs`, `/api-docs/openapi.json` | API documentation |
//! | `GET` | `/internal/metrics` | Prometheus metrics (when `enable_metrics` is set) |
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use inventory::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = inventory::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     inventory::telemetry::init_telemetry(config.enable_otel_export)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     }).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Database Setup
//!
//! The service does not create or migrate its schema. The `products` table is described in
//! `migrations/`; apply it with your migration tooling of choice before starting the service.
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.
pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
mod types;

#[cfg(test)]
pub mod test_utils;

use crate::{
    config::{CorsOrigin, DatabaseConfig},
    db::handlers::{InMemoryProducts, ProductRepository, Products},
    openapi::ApiDoc,
};
use anyhow::Context;
use axum::{Json, Router, http::HeaderValue, routing::get};
use axum_prometheus::PrometheusMetricLayer;
use bon::Builder;
pub use config::Config;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub use types::{Operation, ProductId};

/// Application state shared across all request handlers.
///
/// ```ignore
/// let state = AppState::builder()
///     .products(Arc::new(InMemoryProducts::new()))
///     .config(config)
///     .build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
    pub config: Config,
}

/// Open the product store selected by `database`.
///
/// Returns the pool alongside the store for PostgreSQL so it can be closed on shutdown.
async fn setup_store(config: &Config) -> anyhow::Result<(Arc<dyn ProductRepository>, Option<PgPool>)> {
    match &config.database {
        DatabaseConfig::Postgres { url } => {
            let pool = PgPool::connect(url).await.context("Failed to connect to PostgreSQL")?;
            info!("Connected to PostgreSQL product store");
            Ok((Arc::new(Products::new(pool.clone())), Some(pool)))
        }
        DatabaseConfig::Memory => {
            info!("Using in-memory product store; data will not survive a restart");
            Ok((Arc::new(InMemoryProducts::new()), None))
        }
    }
}

/// Create CORS layer from configuration. `None` when no origins are configured.
fn create_cors_layer(config: &Config) -> anyhow::Result<Option<CorsLayer>> {
    let cors_config = &config.cors;
    if cors_config.allowed_origins.is_empty() {
        return Ok(None);
    }

    let allow_origin = if cors_config.allowed_origins.iter().any(|o| matches!(o, CorsOrigin::Wildcard)) {
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &cors_config.allowed_origins {
            if let CorsOrigin::Url(url) = origin {
                // Url::as_str adds a trailing slash that browsers never send in Origin
                origins.push(url.origin().ascii_serialization().parse::<HeaderValue>()?);
            }
        }
        AllowOrigin::list(origins)
    };

    let mut cors = CorsLayer::new().allow_origin(allow_origin).allow_methods(Any).allow_headers(Any);

    if let Some(max_age) = cors_config.max_age {
        cors = cors.max_age(std::time::Duration::from_secs(max_age));
    }

    Ok(Some(cors))
}

/// Build the application router with all endpoints and middleware.
///
/// Layers, outermost first: tracing, request timeout, CORS, and Prometheus metrics when enabled.
pub fn build_router(state: &AppState) -> anyhow::Result<Router> {
    use api::handlers::products;

    let api_routes = Router::new()
        .route("/products", get(products::list_products).post(products::create_product))
        .route("/products/", get(products::list_products).post(products::create_product))
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .with_state(state.clone());

    let mut router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .nest("/api/v1", api_routes)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    if state.config.enable_metrics {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route("/internal/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer);
    }

    if let Some(cors_layer) = create_cors_layer(&state.config)? {
        router = router.layer(cors_layer);
    }

    // Dropping the request future on timeout cancels any pending store call
    #[allow(deprecated)]
    let timeout_layer = TimeoutLayer::new(state.config.request_timeout);

    let router = router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(timeout_layer),
    );

    Ok(router)
}

/// Main application struct that owns the router, configuration and database pool.
///
/// # Lifecycle
///
/// 1. **Create**: [`Application::new`] opens the configured store and builds the router
/// 2. **Serve**: [`Application::serve`] binds to a TCP port and starts handling requests
/// 3. **Shutdown**: When the shutdown future resolves, in-flight requests finish, then the
///    pool is closed and pending spans are flushed
pub struct Application {
    router: Router,
    config: Config,
    pool: Option<PgPool>,
}

impl Application {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting inventory service with configuration: {:#?}", config);

        let (products, pool) = setup_store(&config).await?;

        let app_state = AppState::builder().products(products).config(config.clone()).build();
        let router = build_router(&app_state)?;

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("Inventory service listening on http://{}", listener.local_addr()?);

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        if let Some(pool) = self.pool {
            info!("Closing database connections...");
            pool.close().await;
        }

        info!("Shutting down telemetry...");
        telemetry::shutdown_telemetry();

        Ok(())
    }
}
