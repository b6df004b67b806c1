use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::Local;
use tracing::info;

use crate::{
    AppState, editor::SubmitError, error::ApiError, models::SeminarForm, session::LoadStatus,
};

async fn render_page(state: &AppState) -> Result<Html<String>, ApiError> {
    // Server-local date, not the UTC date a browser `toISOString()` would give.
    let today = Local::now().date_naive();
    let view = state.session.view(today).await;
    Ok(Html(state.renderer.render(&view)?))
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Seminar list page", content_type = "text/html")),
    tag = "seminars"
)]
pub async fn list_page(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.session.remount_if_failed().await;
    render_page(&state).await
}

#[utoipa::path(get, path = "/healthz/live", tag = "health")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    get,
    path = "/healthz/ready",
    responses(
        (status = 200, description = "Initial load has settled"),
        (status = 503, description = "Initial load still running or failed")
    ),
    tag = "health"
)]
pub async fn healthz_ready(State(state): State<AppState>) -> impl IntoResponse {
    let (status, label) = match state.session.load_status().await {
        LoadStatus::Loading => (StatusCode::SERVICE_UNAVAILABLE, "loading"),
        LoadStatus::Failed => (StatusCode::SERVICE_UNAVAILABLE, "failed"),
        LoadStatus::Loaded => (StatusCode::OK, "ok"),
    };
    (status, Json(serde_json::json!({"status": label})))
}

#[utoipa::path(
    post,
    path = "/seminars/{id}/delete",
    params(("id" = i64, Path, description = "Seminar id")),
    responses((status = 303, description = "Delete attempted, back to the list")),
    tag = "seminars"
)]
pub async fn delete_seminar(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    info!(seminar_id = id, "delete requested");
    state.session.delete(id).await;
    Redirect::to("/")
}

#[utoipa::path(
    post,
    path = "/seminars/{id}/edit",
    params(("id" = i64, Path, description = "Seminar id")),
    responses(
        (status = 303, description = "Editor opened"),
        (status = 404, description = "Seminar not in the list")
    ),
    tag = "seminars"
)]
pub async fn open_editor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, ApiError> {
    if !state.session.open_editor(id).await {
        return Err(ApiError::NotFound(format!("Seminar {id} not found")));
    }
    Ok(Redirect::to("/"))
}

#[utoipa::path(
    post,
    path = "/editor/close",
    responses((status = 303, description = "Editor closed")),
    tag = "seminars"
)]
pub async fn close_editor(State(state): State<AppState>) -> Redirect {
    state.session.close_editor().await;
    Redirect::to("/")
}

#[utoipa::path(
    post,
    path = "/editor",
    request_body(content = SeminarForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Update request sent"),
        (status = 404, description = "No seminar is being edited"),
        (status = 409, description = "A submission is already pending"),
        (status = 422, description = "Required fields missing", content_type = "text/html")
    ),
    tag = "seminars"
)]
pub async fn submit_editor(
    State(state): State<AppState>,
    Form(form): Form<SeminarForm>,
) -> Result<Response, ApiError> {
    match state.session.submit(form).await {
        Ok(()) => Ok(Redirect::to("/").into_response()),
        Err(SubmitError::Invalid(_)) => {
            let page = render_page(&state).await?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Err(err) => Err(err.into()),
    }
}
