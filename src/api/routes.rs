//! HTTP server setup and shared state.

use std::sync::Arc;
use tokio::sync::Mutex;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::storage::create_store;
use crate::task::{FilterState, FocusTracker, TaskStore};

use super::filter as filter_api;
use super::page;
use super::tasks as tasks_api;
use super::types::*;

/// Shared application state.
///
/// Locks are always taken in field order (`tasks`, `filter`, `focus`) so that a
/// request observes and mutates the list as one event.
pub struct AppState {
    pub config: Config,
    /// The task list and its persistence
    pub tasks: Mutex<TaskStore>,
    /// Currently selected filter
    pub filter: Mutex<FilterState>,
    /// Previous-render bookkeeping for the HTML page
    pub focus: Mutex<FocusTracker>,
}

impl AppState {
    /// Open the configured store and load the task list from it.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let storage = create_store(config.store_type, config.data_dir.clone()).await?;
        tracing::info!(
            "Using {} store at {}",
            storage.backend_name(),
            config.data_dir.display()
        );
        let tasks = TaskStore::load(storage).await;
        Ok(Self::with_store(config, tasks))
    }

    pub fn with_store(config: Config, tasks: TaskStore) -> Self {
        Self {
            config,
            tasks: Mutex::new(tasks),
            filter: Mutex::new(FilterState::new()),
            focus: Mutex::new(FocusTracker::new()),
        }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let page_routes = Router::new()
        .route("/", get(page::index))
        .route("/tasks", post(page::add_task))
        .route("/tasks/:id/toggle", post(page::toggle_task))
        .route("/tasks/:id/edit", post(page::edit_task))
        .route("/tasks/:id/delete", post(page::delete_task))
        .route("/filter", post(page::set_filter));

    let api_routes = Router::new()
        .route("/api/health", get(health))
        .nest("/api/tasks", tasks_api::routes())
        .nest("/api/filter", filter_api::routes());

    Router::new()
        .merge(page_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.addr();
    let state = Arc::new(AppState::new(config).await?);
    let app = router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await?;

    Ok(())
}

/// Wait for a shutdown signal.
///
/// Nothing needs flushing: every mutation was saved when it happened.
async fn shutdown_signal(state: Arc<AppState>) {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    let count = state.tasks.lock().await.len();
    tracing::info!("Shutdown signal received with {} tasks held, stopping", count);
}

/// Health check endpoint.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let tasks = state.tasks.lock().await;
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        storage: tasks.storage().backend_name().to_string(),
        persistent: tasks.storage().is_persistent(),
        task_count: tasks.len(),
    })
}
