use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, patch, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::{MemStore, Storage, StoreError};
use crate::models::NewUser;
use crate::services::{ExportService, StoreExportService};

mod error;
mod export;
mod observability;
mod system;
mod tool_config;
mod tools;
pub mod types;
mod users;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub store: Arc<dyn Storage>,

    pub export_service: Arc<dyn ExportService>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn store(&self) -> &Arc<dyn Storage> {
        &self.store
    }
}

/// Builds the shared state around an existing store and creates the
/// configured default user.
pub async fn create_app_state(
    config: Config,
    store: Arc<dyn Storage>,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    if let Some(default_user) = &config.catalog.default_user {
        let user = NewUser {
            username: default_user.username.clone(),
            password: default_user.password.clone(),
        };
        match store.create_user(user).await {
            Ok(user) => info!(user_id = user.id, "Default user '{}' created", user.username),
            Err(StoreError::Conflict(msg)) => warn!("Skipping default user: {}", msg),
            Err(err) => return Err(err.into()),
        }
    }

    let export_service = Arc::new(StoreExportService::new(store.clone()));

    Ok(Arc::new(AppState {
        config: Arc::new(config),
        store,
        export_service,
        start_time: std::time::Instant::now(),
        prometheus_handle,
    }))
}

pub async fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = if config.catalog.seed_tools {
        MemStore::seeded()
    } else {
        MemStore::without_catalog()
    };
    create_app_state(config, Arc::new(store), prometheus_handle).await
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/tools", get(tools::list_tools))
        .route(
            "/tools/category/{category}",
            get(tools::list_tools_by_category),
        )
        .route("/tools/{id}", get(tools::get_tool))
        .route("/tools/{id}/status", patch(tools::update_tool_status))
        .route("/categories", get(tools::list_categories))
        .route(
            "/system-status",
            get(system::get_system_status).patch(system::update_system_status),
        )
        .route("/tool-config", post(tool_config::save_tool_config))
        .route(
            "/tool-config/{tool_id}/{user_id}",
            get(tool_config::get_tool_config),
        )
        .route("/export/{format}", get(export::export_data))
        .route("/users", post(users::create_user))
        .route("/users/{id}", get(users::get_user))
        .route("/health", get(system::health))
        .route("/metrics", get(observability::get_metrics))
        .route_layer(middleware::from_fn(observability::logging_middleware))
        .with_state(state);

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
