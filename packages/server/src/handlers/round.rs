use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use sea_orm::*;
use tracing::instrument;

use crate::entity::round;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminUser;
use crate::extractors::json::AppJson;
use crate::models::round::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/admin/rounds",
    tag = "Rounds",
    operation_id = "listRounds",
    summary = "List all rounds",
    description = "Returns all rounds ordered by start time, with status derived from the time window at response time.",
    responses(
        (status = 200, description = "List of rounds", body = Vec<RoundResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn list_rounds(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<RoundResponse>>, AppError> {
    let rounds = round::Entity::find()
        .order_by_asc(round::Column::StartTime)
        .all(&state.db)
        .await?;

    Ok(Json(rounds.into_iter().map(RoundResponse::from).collect()))
}

#[utoipa::path(
    post,
    path = "/admin/rounds",
    tag = "Rounds",
    operation_id = "createRound",
    summary = "Create a new round",
    description = "Creates a round after validating the window invariants (end after start, upload deadline inside the window). A caller-supplied status is ignored; status is derived from the window on every read.",
    request_body = CreateRoundRequest,
    responses(
        (status = 201, description = "Round created", body = RoundResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, admin, payload), fields(name = %payload.name))]
pub async fn create_round(
    admin: AdminUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateRoundRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_round(&payload)?;

    let now = chrono::Utc::now();
    let new_round = round::ActiveModel {
        name: Set(payload.name.trim().to_string()),
        description: Set(payload.description),
        start_time: Set(payload.start_time),
        end_time: Set(payload.end_time),
        upload_deadline: Set(payload.upload_deadline),
        created_by: Set(admin.username),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_round.insert(&state.db).await?;

    Ok((StatusCode::CREATED, Json(RoundResponse::from(model))))
}

#[utoipa::path(
    put,
    path = "/admin/rounds/{id}",
    tag = "Rounds",
    operation_id = "updateRound",
    summary = "Update an existing round",
    description = "Partially updates a round. The window invariants are re-validated across the merged result, not just the changed fields, so an update can never leave the stored window inconsistent.",
    params(("id" = i32, Path, description = "Round ID")),
    request_body = UpdateRoundRequest,
    responses(
        (status = 200, description = "Round updated", body = RoundResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Round not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin, payload), fields(id))]
pub async fn update_round(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateRoundRequest>,
) -> Result<Json<RoundResponse>, AppError> {
    validate_update_round(&payload)?;

    if payload == UpdateRoundRequest::default() {
        let existing = find_round(&state.db, id).await?;
        return Ok(Json(existing.into()));
    }

    let txn = state.db.begin().await?;
    let existing = find_round(&txn, id).await?;

    // Window validation against the merged result
    let effective_start = payload.start_time.unwrap_or(existing.start_time);
    let effective_end = payload.end_time.unwrap_or(existing.end_time);
    let effective_deadline = payload.upload_deadline.unwrap_or(existing.upload_deadline);
    validate_time_window(effective_start, effective_end, effective_deadline)?;

    let mut active: round::ActiveModel = existing.into();

    if let Some(ref name) = payload.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(start_time) = payload.start_time {
        active.start_time = Set(start_time);
    }
    if let Some(end_time) = payload.end_time {
        active.end_time = Set(end_time);
    }
    if let Some(upload_deadline) = payload.upload_deadline {
        active.upload_deadline = Set(upload_deadline);
    }
    active.updated_at = Set(chrono::Utc::now());

    let model = active.update(&txn).await?;
    txn.commit().await?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    delete,
    path = "/admin/rounds/{id}",
    tag = "Rounds",
    operation_id = "deleteRound",
    summary = "Delete a round by ID",
    description = "Permanently deletes a round. Evaluations that reference it keep their nullable round reference.",
    params(("id" = i32, Path, description = "Round ID")),
    responses(
        (status = 200, description = "Round deleted", body = serde_json::Value),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Round not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin), fields(id))]
pub async fn delete_round(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let existing = find_round(&state.db, id).await?;
    let active: round::ActiveModel = existing.into();
    active.delete(&state.db).await?;

    tracing::info!(id, "Deleted round");

    Ok(Json(serde_json::json!({
        "message": format!("Round {} deleted", id)
    })))
}

async fn find_round<C: ConnectionTrait>(db: &C, id: i32) -> Result<round::Model, AppError> {
    round::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Round not found".into()))
}
