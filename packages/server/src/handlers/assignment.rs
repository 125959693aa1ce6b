use axum::Json;
use axum::extract::{Path, State};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{assignment, judge, team};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminUser;
use crate::extractors::json::AppJson;
use crate::models::assignment::AssignRequest;
use crate::models::judge::JudgeResponse;
use crate::models::team::TeamView;
use crate::state::AppState;
use crate::utils::team::{find_team_view, list_team_views};

#[utoipa::path(
    get,
    path = "/admin/evaluation",
    tag = "Assignment",
    operation_id = "listJudges",
    summary = "List judges",
    description = "Returns all judges as a projection without credential fields.",
    responses(
        (status = 200, description = "List of judges", body = Vec<JudgeResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn list_judges(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<JudgeResponse>>, AppError> {
    let judges = judge::Entity::find()
        .order_by_asc(judge::Column::Id)
        .all(&state.db)
        .await?;

    Ok(Json(judges.into_iter().map(JudgeResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/admin/evaluation/teams",
    tag = "Assignment",
    operation_id = "listTeamsForAssignment",
    summary = "List teams with their evaluation state",
    description = "Returns every team combined with its assignment and evaluation outcome records.",
    responses(
        (status = 200, description = "List of team views", body = Vec<TeamView>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn list_teams(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamView>>, AppError> {
    Ok(Json(list_team_views(&state.db).await?))
}

#[utoipa::path(
    post,
    path = "/admin/evaluation/assign",
    tag = "Assignment",
    operation_id = "assignJudge",
    summary = "Assign a judge to a team",
    description = "Sets the judge responsible for a team. Re-assigning always succeeds and overwrites the previous judge; any in-flight evaluation by that judge stays in the ledger, orphaned.",
    request_body = AssignRequest,
    responses(
        (status = 200, description = "Team view after assignment", body = TeamView),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Team or judge not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin, payload), fields(team_id = payload.team_id, judge_id = payload.judge_id))]
pub async fn assign_judge(
    _admin: AdminUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<AssignRequest>,
) -> Result<Json<TeamView>, AppError> {
    team::Entity::find_by_id(payload.team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".into()))?;
    judge::Entity::find_by_id(payload.judge_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Judge not found".into()))?;

    let active = assignment::ActiveModel {
        team_id: Set(payload.team_id),
        judge_id: Set(payload.judge_id),
        assigned_at: Set(chrono::Utc::now()),
    };

    // Atomic upsert keyed on the team: one row per team, overwrite on
    // re-assign.
    assignment::Entity::insert(active)
        .on_conflict(
            OnConflict::column(assignment::Column::TeamId)
                .update_columns([
                    assignment::Column::JudgeId,
                    assignment::Column::AssignedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(&state.db)
        .await?;

    tracing::info!(
        team_id = payload.team_id,
        judge_id = payload.judge_id,
        "Assigned judge to team"
    );

    Ok(Json(find_team_view(&state.db, payload.team_id).await?))
}

#[utoipa::path(
    patch,
    path = "/admin/evaluation/unassign/{team_id}",
    tag = "Assignment",
    operation_id = "unassignJudge",
    summary = "Unassign a team's judge",
    description = "Removes the team's assignment record, which resets the derived evaluation status to `unassigned` and hides its score regardless of prior state. The evaluation itself stays in the ledger. Idempotent for already-unassigned teams.",
    params(("team_id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team view after unassignment", body = TeamView),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Team not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin), fields(team_id))]
pub async fn unassign_judge(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<Json<TeamView>, AppError> {
    team::Entity::find_by_id(team_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".into()))?;

    let result = assignment::Entity::delete_by_id(team_id)
        .exec(&state.db)
        .await?;

    if result.rows_affected > 0 {
        tracing::info!(team_id, "Unassigned judge from team");
    }

    Ok(Json(find_team_view(&state.db, team_id).await?))
}
