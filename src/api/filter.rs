//! Current filter endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::routes::AppState;
use super::types::{FilterResponse, SetFilterRequest};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(get_filter).put(set_filter))
}

/// GET /api/filter
async fn get_filter(State(state): State<Arc<AppState>>) -> Json<FilterResponse> {
    let filter = state.filter.lock().await.current();
    Json(FilterResponse { filter })
}

/// PUT /api/filter
/// Unknown names are rejected and the current filter is kept.
async fn set_filter(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetFilterRequest>,
) -> Result<Json<FilterResponse>, (StatusCode, String)> {
    let filter = state
        .filter
        .lock()
        .await
        .set_filter(&req.filter)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    tracing::debug!(%filter, "Filter changed");
    Ok(Json(FilterResponse { filter }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::test_support::memory_state;
    use crate::task::Filter;

    #[tokio::test]
    async fn test_default_is_all() {
        let state = memory_state().await;
        let Json(resp) = get_filter(State(state)).await;
        assert_eq!(resp.filter, Filter::All);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let state = memory_state().await;
        let Json(resp) = set_filter(
            State(Arc::clone(&state)),
            Json(SetFilterRequest {
                filter: "Completed".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(resp.filter, Filter::Completed);

        let Json(resp) = get_filter(State(state)).await;
        assert_eq!(resp.filter, Filter::Completed);
    }

    #[tokio::test]
    async fn test_unknown_filter_rejected() {
        let state = memory_state().await;
        let err = set_filter(
            State(Arc::clone(&state)),
            Json(SetFilterRequest {
                filter: "Done".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);

        let Json(resp) = get_filter(State(state)).await;
        assert_eq!(resp.filter, Filter::All);
    }
}
