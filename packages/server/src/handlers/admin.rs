use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use tera::Context;
use tracing::{info, instrument, warn};

use crate::error::AppError;
use crate::handlers::today;
use crate::models::admin::{AdminArenaForm, ArenaFormView};
use crate::models::arena::{ArenaConfigData, ArenaConfigResponse};
use crate::state::AppState;
use crate::views::render;

const ADMIN_HOME: &str = "/admin";

fn form_page(
    state: &AppState,
    title: &str,
    view: &ArenaFormView,
    error: Option<&str>,
) -> Result<Response, AppError> {
    let mut ctx = Context::new();
    ctx.insert("title", title);
    ctx.insert("config", view);
    ctx.insert("error", &error);
    Ok(render(&state.templates, "form.html", &ctx)?.into_response())
}

#[instrument(skip(state))]
pub async fn list_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let configs: Vec<ArenaConfigResponse> = state
        .arenas
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let mut ctx = Context::new();
    ctx.insert("title", "Arena configurations");
    ctx.insert("configs", &configs);
    Ok(render(&state.templates, "list.html", &ctx)?.into_response())
}

#[instrument(skip(state))]
pub async fn new_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let view = ArenaFormView::new_entry(ArenaConfigData::default_for(today()));
    form_page(&state, view.title(), &view, None)
}

/// Unknown or malformed ids go back to the list.
#[instrument(skip(state))]
pub async fn edit_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(id) = id.parse::<i32>() else {
        return Ok(Redirect::to(ADMIN_HOME).into_response());
    };
    let Some(model) = state.arenas.find_by_id(id).await? else {
        return Ok(Redirect::to(ADMIN_HOME).into_response());
    };

    let view = ArenaFormView::from(model);
    form_page(&state, view.title(), &view, None)
}

#[instrument(skip(state, form))]
pub async fn save(
    State(state): State<AppState>,
    Form(form): Form<AdminArenaForm>,
) -> Result<Response, AppError> {
    if form.date.trim().is_empty() {
        let view = ArenaFormView::resubmission(form);
        let mut page = form_page(&state, view.title(), &view, Some("Date must not be empty"))?;
        *page.status_mut() = StatusCode::BAD_REQUEST;
        return Ok(page);
    }

    let data = ArenaConfigData::from(form).validated()?;
    let (model, outcome) = state.arenas.upsert_by_date(data).await?;
    info!(id = model.id, date = %model.date, ?outcome, "Saved arena config from admin");

    Ok(Redirect::to(ADMIN_HOME).into_response())
}

/// Always lands back on the list, whatever happened.
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if let Ok(id) = id.parse::<i32>() {
        match state.arenas.soft_delete(id).await {
            Ok(true) => info!(id, "Deleted arena config from admin"),
            Ok(false) => {}
            Err(e) => warn!(id, error = %e, "Failed to delete arena config"),
        }
    }
    Redirect::to(ADMIN_HOME)
}
