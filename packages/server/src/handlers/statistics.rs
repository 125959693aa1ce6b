use axum::Json;
use axum::extract::State;
use sea_orm::*;
use tracing::instrument;

use crate::entity::{assignment, evaluation, evaluation_outcome, judge, round, team};
use crate::entity::evaluation::{STATUS_DRAFT, STATUS_SUBMITTED};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AdminUser;
use crate::models::statistics::{JudgeStatistics, PlatformStatistics};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/admin/evaluation/statistics",
    tag = "Statistics",
    operation_id = "judgeStatistics",
    summary = "Per-judge workload statistics",
    description = "For each active judge, the number of teams currently assigned and how many of those have a submitted evaluation. Every count is a fresh read.",
    responses(
        (status = 200, description = "Per-judge statistics", body = Vec<JudgeStatistics>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn judge_statistics(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<JudgeStatistics>>, AppError> {
    let judges = judge::Entity::find()
        .filter(judge::Column::IsActive.eq(true))
        .order_by_asc(judge::Column::Id)
        .all(&state.db)
        .await?;

    // A per-judge loop is fine at this scale; what matters is that each
    // count hits storage, not a cache.
    let mut stats = Vec::with_capacity(judges.len());
    for j in judges {
        let team_ids: Vec<i32> = assignment::Entity::find()
            .filter(assignment::Column::JudgeId.eq(j.id))
            .select_only()
            .column(assignment::Column::TeamId)
            .into_tuple()
            .all(&state.db)
            .await?;

        let completed = if team_ids.is_empty() {
            0
        } else {
            evaluation_outcome::Entity::find()
                .filter(evaluation_outcome::Column::TeamId.is_in(team_ids.clone()))
                .count(&state.db)
                .await?
        };

        stats.push(JudgeStatistics {
            judge_id: j.id,
            username: j.username,
            name: j.name,
            assigned_teams: team_ids.len() as u64,
            completed_teams: completed,
        });
    }

    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/admin/statistics",
    tag = "Statistics",
    operation_id = "platformStatistics",
    summary = "Platform-wide aggregate counts",
    description = "Dashboard counts over teams, judges, rounds, assignments and the evaluation ledger. Read-only; no caching.",
    responses(
        (status = 200, description = "Aggregate counts", body = PlatformStatistics),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn platform_statistics(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<PlatformStatistics>, AppError> {
    let active_teams = team::Entity::find()
        .filter(team::Column::IsActive.eq(true))
        .count(&state.db)
        .await?;

    let active_judge_ids: Vec<i32> = judge::Entity::find()
        .filter(judge::Column::IsActive.eq(true))
        .select_only()
        .column(judge::Column::Id)
        .into_tuple()
        .all(&state.db)
        .await?;
    let active_judges = active_judge_ids.len() as u64;

    let rounds = round::Entity::find().count(&state.db).await?;

    let (assigned_teams, completed_teams) = if active_judge_ids.is_empty() {
        (0, 0)
    } else {
        let assigned_ids: Vec<i32> = assignment::Entity::find()
            .filter(assignment::Column::JudgeId.is_in(active_judge_ids))
            .select_only()
            .column(assignment::Column::TeamId)
            .into_tuple()
            .all(&state.db)
            .await?;
        let completed = if assigned_ids.is_empty() {
            0
        } else {
            evaluation_outcome::Entity::find()
                .filter(evaluation_outcome::Column::TeamId.is_in(assigned_ids.clone()))
                .count(&state.db)
                .await?
        };
        (assigned_ids.len() as u64, completed)
    };

    let draft_evaluations = evaluation::Entity::find()
        .filter(evaluation::Column::Status.eq(STATUS_DRAFT))
        .count(&state.db)
        .await?;
    let submitted_evaluations = evaluation::Entity::find()
        .filter(evaluation::Column::Status.eq(STATUS_SUBMITTED))
        .count(&state.db)
        .await?;

    Ok(Json(PlatformStatistics {
        active_teams,
        active_judges,
        rounds,
        assigned_teams,
        completed_teams,
        draft_evaluations,
        submitted_evaluations,
    }))
}
