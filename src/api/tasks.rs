//! Task list JSON endpoints.
//!
//! Unknown ids are accepted by every per-task endpoint and leave the list
//! unchanged. A 500 means the change was applied in memory but could not be
//! saved.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};

use crate::task::{Filter, Task, TaskId, TaskView};
use crate::util::internal_error;

use super::routes::AppState;
use super::types::{CreateTaskRequest, EditTaskRequest, ListTasksQuery};

/// Create task routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_tasks))
        .route("/", post(create_task))
        .route("/:id", patch(edit_task))
        .route("/:id", delete(delete_task))
        .route("/:id/toggle", post(toggle_task))
}

/// GET /api/tasks
/// Visible tasks and heading, for `?filter=` or the current filter.
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<TaskView>, (StatusCode, String)> {
    let tasks = state.tasks.lock().await;
    let filter = match query.filter.as_deref() {
        Some(name) => name
            .parse::<Filter>()
            .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?,
        None => state.filter.lock().await.current(),
    };
    Ok(Json(TaskView::compose(tasks.tasks(), filter)))
}

/// POST /api/tasks
async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), (StatusCode, String)> {
    let mut tasks = state.tasks.lock().await;
    let task = tasks.add(&req.name).await.map_err(internal_error)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PATCH /api/tasks/:id
async fn edit_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<EditTaskRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut tasks = state.tasks.lock().await;
    tasks
        .edit(&TaskId::new(id), &req.name)
        .await
        .map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/tasks/:id/toggle
async fn toggle_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut tasks = state.tasks.lock().await;
    tasks
        .toggle_completed(&TaskId::new(id))
        .await
        .map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/tasks/:id
async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let mut tasks = state.tasks.lock().await;
    tasks
        .delete(&TaskId::new(id))
        .await
        .map_err(internal_error)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::test_support::memory_state;

    async fn add(state: &Arc<AppState>, name: &str) -> Task {
        let (status, Json(task)) = create_task(
            State(Arc::clone(state)),
            Json(CreateTaskRequest {
                name: name.to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        task
    }

    async fn list(state: &Arc<AppState>, filter: Option<&str>) -> TaskView {
        let Json(view) = list_tasks(
            State(Arc::clone(state)),
            Query(ListTasksQuery {
                filter: filter.map(str::to_string),
            }),
        )
        .await
        .unwrap();
        view
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let state = memory_state().await;
        let task = add(&state, "Buy milk").await;
        assert_eq!(task.name, "Buy milk");
        assert!(!task.completed);

        let view = list(&state, None).await;
        assert_eq!(view.filter, Filter::All);
        assert_eq!(view.heading, "1 task remaining");
        assert_eq!(view.tasks, vec![task]);
    }

    #[tokio::test]
    async fn test_toggle_then_filter_views() {
        let state = memory_state().await;
        let task = add(&state, "Buy milk").await;

        let status = toggle_task(State(Arc::clone(&state)), Path(task.id.to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let active = list(&state, Some("Active")).await;
        assert!(active.tasks.is_empty());
        assert_eq!(active.heading, "0 tasks remaining");

        let completed = list(&state, Some("completed")).await;
        assert_eq!(completed.tasks.len(), 1);
        assert_eq!(completed.heading, "1 task remaining");
    }

    #[tokio::test]
    async fn test_edit_and_delete() {
        let state = memory_state().await;
        let a = add(&state, "A").await;
        let b = add(&state, "B").await;

        edit_task(
            State(Arc::clone(&state)),
            Path(b.id.to_string()),
            Json(EditTaskRequest {
                name: "Bee".to_string(),
            }),
        )
        .await
        .unwrap();
        delete_task(State(Arc::clone(&state)), Path(a.id.to_string()))
            .await
            .unwrap();

        let view = list(&state, None).await;
        assert_eq!(view.tasks.len(), 1);
        assert_eq!(view.tasks[0].id, b.id);
        assert_eq!(view.tasks[0].name, "Bee");
    }

    #[tokio::test]
    async fn test_unknown_id_returns_no_content() {
        let state = memory_state().await;
        add(&state, "Only").await;

        let status = delete_task(State(Arc::clone(&state)), Path("nope".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        let status = toggle_task(State(Arc::clone(&state)), Path("nope".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(list(&state, None).await.tasks.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_filter_is_bad_request() {
        let state = memory_state().await;
        let err = list_tasks(
            State(state),
            Query(ListTasksQuery {
                filter: Some("Someday".to_string()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
        assert!(err.1.contains("Someday"));
    }
}
