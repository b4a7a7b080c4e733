use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::handlers::today;
use crate::models::arena::{
    ArenaConfigData, ArenaConfigResponse, ArenaListResponse, ArenaResponse, ArenaSaveResponse,
    MessageResponse,
};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/arena/today",
    tag = "Arena",
    operation_id = "getTodayArena",
    summary = "Get today's configuration",
    description = "Returns the configuration stored for today's date (server local time). \
        When none exists the built-in default line-up is returned; it is not persisted.",
    responses(
        (status = 200, description = "Today's configuration", body = ArenaResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn get_today_arena(
    State(state): State<AppState>,
) -> Result<Json<ArenaResponse>, AppError> {
    let today = today();
    let date = today.format("%Y-%m-%d").to_string();

    let response: ArenaResponse = match state.arenas.find_by_date(&date).await? {
        Some(model) => model.into(),
        None => ArenaConfigData::default_for(today).into(),
    };
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/arena/{date}",
    tag = "Arena",
    operation_id = "getArenaByDate",
    summary = "Get the configuration for a date",
    params(("date" = String, Path, description = "Date in YYYY-MM-DD form", example = "2026-01-22")),
    responses(
        (status = 200, description = "Configuration", body = ArenaResponse),
        (status = 404, description = "No configuration for that date (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_arena_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<ArenaResponse>, AppError> {
    let model = state
        .arenas
        .find_by_date(&date)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No configuration for {date}")))?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/api/arena/list",
    tag = "Arena",
    operation_id = "listArenas",
    summary = "List all configurations",
    description = "Returns every stored configuration, newest date first. Meme columns are JSON-encoded strings.",
    responses(
        (status = 200, description = "All configurations", body = ArenaListResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn list_arenas(
    State(state): State<AppState>,
) -> Result<Json<ArenaListResponse>, AppError> {
    let list: Vec<ArenaConfigResponse> = state
        .arenas
        .list()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(ArenaListResponse {
        total: list.len(),
        list,
    }))
}

#[utoipa::path(
    post,
    path = "/api/arena",
    tag = "Arena",
    operation_id = "saveArena",
    summary = "Create or replace the configuration for a date",
    description = "Upserts by `date`. An existing configuration keeps its id and creation time and \
        has every other field replaced. Meme fields accept a JSON-encoded string or an array of URLs.",
    request_body = ArenaConfigData,
    responses(
        (status = 200, description = "Saved configuration", body = ArenaSaveResponse),
        (status = 400, description = "Malformed body or empty date (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Concurrent first save for the same date (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn save_arena(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ArenaConfigData>,
) -> Result<Json<ArenaSaveResponse>, AppError> {
    let data = payload.validated()?;
    let (model, outcome) = state.arenas.upsert_by_date(data).await?;
    info!(id = model.id, date = %model.date, ?outcome, "Saved arena config");

    Ok(Json(ArenaSaveResponse {
        message: outcome.message(),
        data: model.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/arena/{id}",
    tag = "Arena",
    operation_id = "deleteArena",
    summary = "Delete a configuration",
    description = "Soft-deletes the configuration. It disappears from every read.",
    params(("id" = i32, Path, description = "Configuration ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageResponse),
        (status = 400, description = "Non-numeric id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "No such configuration (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_arena(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id: i32 = id
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid id: {id}")))?;

    if !state.arenas.soft_delete(id).await? {
        return Err(AppError::NotFound(format!("Configuration {id} not found")));
    }
    info!(id, "Deleted arena config");

    Ok(Json(MessageResponse {
        message: "Deleted successfully",
    }))
}
