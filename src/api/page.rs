//! Server-rendered task list page.
//!
//! Every control is a plain HTML form. Mutating forms post to a `/tasks/...`
//! route which redirects back to `/`, so each user action renders the page
//! once. Focus hints from the view are emitted as a `data-focus` attribute
//! and applied by a one-line script.

use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, Redirect},
};

use crate::task::view::focus_for_render;
use crate::task::{Filter, Focus, Task, TaskId, TaskView};
use crate::util::{html_escape, internal_error, url_encode};

use super::routes::AppState;
use super::types::{NameForm, PageQuery};

const FOCUS_SCRIPT: &str =
    r#"<script>document.querySelector("[data-focus]")?.focus();</script>"#;

/// GET /
pub(super) async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let tasks = state.tasks.lock().await;
    let filter = state.filter.lock().await.current();
    let mut tracker = state.focus.lock().await;

    let editing = query
        .edit
        .map(TaskId::new)
        .filter(|id| tasks.get(id).is_some());
    let edited = query.edited.map(TaskId::new);
    let focus = focus_for_render(&mut tracker, tasks.len(), editing.as_ref(), edited.as_ref());

    let view = TaskView::compose(tasks.tasks(), filter);
    Html(render_page(&view, editing.as_ref(), focus.as_ref()))
}

/// POST /tasks
pub(super) async fn add_task(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NameForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let mut tasks = state.tasks.lock().await;
    tasks.add(&form.name).await.map_err(internal_error)?;
    Ok(Redirect::to("/"))
}

/// POST /tasks/:id/toggle
pub(super) async fn toggle_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Redirect, (StatusCode, String)> {
    let mut tasks = state.tasks.lock().await;
    tasks
        .toggle_completed(&TaskId::new(id))
        .await
        .map_err(internal_error)?;
    Ok(Redirect::to("/"))
}

/// POST /tasks/:id/edit
pub(super) async fn edit_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(form): Form<NameForm>,
) -> Result<Redirect, (StatusCode, String)> {
    let mut tasks = state.tasks.lock().await;
    let id = TaskId::new(id);
    tasks.edit(&id, &form.name).await.map_err(internal_error)?;
    Ok(Redirect::to(&format!("/?edited={}", url_encode(id.as_str()))))
}

/// POST /tasks/:id/delete
pub(super) async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Redirect, (StatusCode, String)> {
    let mut tasks = state.tasks.lock().await;
    tasks
        .delete(&TaskId::new(id))
        .await
        .map_err(internal_error)?;
    Ok(Redirect::to("/"))
}

/// POST /filter
pub(super) async fn set_filter(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NameForm>,
) -> Result<Redirect, (StatusCode, String)> {
    state
        .filter
        .lock()
        .await
        .set_filter(&form.name)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
    Ok(Redirect::to("/"))
}

fn focus_attr(focus: Option<&Focus>, target: &Focus) -> &'static str {
    if focus == Some(target) {
        " data-focus"
    } else {
        ""
    }
}

/// Render the full page.
pub fn render_page(view: &TaskView, editing: Option<&TaskId>, focus: Option<&Focus>) -> String {
    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Local Storage Task List</title>
<style>.visually-hidden{position:absolute;width:1px;height:1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap}</style>
</head>
<body>
<main>
<h1>Local Storage Task List</h1>
"#,
    );

    // Add form
    html.push_str(
        r#"<form method="post" action="/tasks">
<h2><label for="new-todo-input">What needs to be done?</label></h2>
<input type="text" id="new-todo-input" name="name" autocomplete="off" placeholder="Buy milk">
<button type="submit">Add Task</button>
</form>
"#,
    );

    html.push_str(&render_filters(view.filter));

    html.push_str(&format!(
        "<h2 id=\"list-heading\" tabindex=\"-1\"{}>{}</h2>\n",
        focus_attr(focus, &Focus::ListHeading),
        html_escape(&view.heading)
    ));

    html.push_str("<ul role=\"list\" aria-labelledby=\"list-heading\">\n");
    for task in &view.tasks {
        let item = if editing == Some(&task.id) {
            render_editing(task, focus)
        } else {
            render_task(task, focus)
        };
        html.push_str("<li>");
        html.push_str(&item);
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n</main>\n");

    if focus.is_some() {
        html.push_str(FOCUS_SCRIPT);
        html.push('\n');
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// One toggle button per filter; exactly the current one is pressed.
fn render_filters(current: Filter) -> String {
    let mut html = String::from("<div class=\"filters\">\n");
    for filter in Filter::ALL {
        html.push_str(&format!(
            r#"<form method="post" action="/filter"><input type="hidden" name="name" value="{name}"><button type="submit" aria-pressed="{pressed}"><span class="visually-hidden">Show </span><span>{name}</span><span class="visually-hidden"> tasks</span></button></form>"#,
            name = filter.as_str(),
            pressed = filter == current,
        ));
        html.push('\n');
    }
    html.push_str("</div>\n");
    html
}

fn render_task(task: &Task, focus: Option<&Focus>) -> String {
    let id = html_escape(task.id.as_str());
    let path = html_escape(&url_encode(task.id.as_str()));
    let name = html_escape(&task.name);
    let checked = if task.completed { " checked" } else { "" };
    let edit_focus = focus_attr(focus, &Focus::EditButton(task.id.clone()));

    format!(
        r#"<form method="post" action="/tasks/{path}/toggle"><input type="checkbox" id="todo-{id}" onchange="this.form.submit()"{checked}><label for="todo-{id}">{name}</label><noscript><button type="submit">Toggle</button></noscript></form>
<form method="get" action="/"><input type="hidden" name="edit" value="{id}"><button type="submit" id="edit-{id}"{edit_focus}>Edit <span class="visually-hidden">{name}</span></button></form>
<form method="post" action="/tasks/{path}/delete"><button type="submit">Delete <span class="visually-hidden">{name}</span></button></form>"#
    )
}

fn render_editing(task: &Task, focus: Option<&Focus>) -> String {
    let id = html_escape(task.id.as_str());
    let path = html_escape(&url_encode(task.id.as_str()));
    let name = html_escape(&task.name);
    let field_focus = focus_attr(focus, &Focus::EditField(task.id.clone()));

    format!(
        r#"<form method="post" action="/tasks/{path}/edit">
<label for="rename-{id}">New name for {name}</label>
<input type="text" id="rename-{id}" name="name" placeholder="{name}"{field_focus}>
<a href="/?edited={path}">Cancel <span class="visually-hidden">renaming {name}</span></a>
<button type="submit">Save <span class="visually-hidden">new name for {name}</span></button>
</form>"#
    )
}
