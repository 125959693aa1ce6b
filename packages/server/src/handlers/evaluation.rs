use std::collections::HashMap;

use axum::Json;
use axum::extract::{Path, State};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;
use tracing::instrument;

use crate::entity::evaluation::{STATUS_DRAFT, STATUS_SUBMITTED};
use crate::entity::{evaluation, evaluation_outcome, judge, team};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::{AdminUser, AuthJudge};
use crate::extractors::json::AppJson;
use crate::models::evaluation::*;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/judge/team-evaluation/submit",
    tag = "Evaluation",
    operation_id = "submitEvaluation",
    summary = "Submit an evaluation for a team",
    description = "Upserts the caller's evaluation for the team (at most one per team/judge pair) and writes the outcome back to the team, both in a single transaction. Scores are recomputed server-side.",
    request_body = EvaluationRequest,
    responses(
        (status = 200, description = "Stored evaluation with derived scores", body = SubmitEvaluationResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_judge, payload), fields(judge_id = auth_judge.judge_id, team_id = payload.team_id))]
pub async fn submit_evaluation(
    auth_judge: AuthJudge,
    State(state): State<AppState>,
    AppJson(payload): AppJson<EvaluationRequest>,
) -> Result<Json<SubmitEvaluationResponse>, AppError> {
    let model = upsert_evaluation(&state, &auth_judge, payload, STATUS_SUBMITTED).await?;

    tracing::info!(
        judge_id = auth_judge.judge_id,
        team_id = model.team_id,
        total_score = model.total_score,
        "Evaluation submitted"
    );

    Ok(Json(SubmitEvaluationResponse {
        total_score: model.total_score,
        average_score: model.average_score,
        evaluation: model.into(),
    }))
}

#[utoipa::path(
    post,
    path = "/judge/team-evaluation/save-draft",
    tag = "Evaluation",
    operation_id = "saveDraftEvaluation",
    summary = "Save an evaluation draft",
    description = "Same upsert as submit, tagged `draft`. Drafts never touch the team's evaluation state.",
    request_body = EvaluationRequest,
    responses(
        (status = 200, description = "Stored draft", body = EvaluationResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 500, description = "Storage failure (INTERNAL_ERROR)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_judge, payload), fields(judge_id = auth_judge.judge_id, team_id = payload.team_id))]
pub async fn save_draft(
    auth_judge: AuthJudge,
    State(state): State<AppState>,
    AppJson(payload): AppJson<EvaluationRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let model = upsert_evaluation(&state, &auth_judge, payload, STATUS_DRAFT).await?;
    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/judge/team-evaluation/{team_id}",
    tag = "Evaluation",
    operation_id = "getOwnEvaluation",
    summary = "Get the caller's evaluation for a team",
    params(("team_id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Evaluation", body = EvaluationResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Evaluation not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_judge), fields(judge_id = auth_judge.judge_id, team_id))]
pub async fn get_own_evaluation(
    auth_judge: AuthJudge,
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let model = evaluation::Entity::find()
        .filter(evaluation::Column::TeamId.eq(team_id))
        .filter(evaluation::Column::JudgeId.eq(auth_judge.judge_id))
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Evaluation not found".into()))?;

    Ok(Json(model.into()))
}

#[utoipa::path(
    get,
    path = "/judge/team-evaluation",
    tag = "Evaluation",
    operation_id = "listOwnEvaluations",
    summary = "List the caller's evaluations",
    description = "Returns all of the caller's evaluations, most recently updated first.",
    responses(
        (status = 200, description = "List of evaluations", body = Vec<EvaluationResponse>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_judge), fields(judge_id = auth_judge.judge_id))]
pub async fn list_own_evaluations(
    auth_judge: AuthJudge,
    State(state): State<AppState>,
) -> Result<Json<Vec<EvaluationResponse>>, AppError> {
    let models = evaluation::Entity::find()
        .filter(evaluation::Column::JudgeId.eq(auth_judge.judge_id))
        .order_by_desc(evaluation::Column::UpdatedAt)
        .all(&state.db)
        .await?;

    Ok(Json(models.into_iter().map(EvaluationResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/admin/evaluation/all",
    tag = "Evaluation",
    operation_id = "listAllEvaluations",
    summary = "List every evaluation",
    description = "Admin view of the full ledger, joined with team category and judge name for display.",
    responses(
        (status = 200, description = "List of evaluations", body = Vec<AdminEvaluationView>),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, _admin))]
pub async fn list_all_evaluations(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminEvaluationView>>, AppError> {
    let models = evaluation::Entity::find()
        .order_by_desc(evaluation::Column::UpdatedAt)
        .all(&state.db)
        .await?;

    let categories: HashMap<i32, String> = team::Entity::find()
        .all(&state.db)
        .await?
        .into_iter()
        .map(|t| (t.id, t.category))
        .collect();
    let judge_names: HashMap<i32, String> = judge::Entity::find()
        .all(&state.db)
        .await?
        .into_iter()
        .map(|j| (j.id, j.name))
        .collect();

    let items = models
        .into_iter()
        .map(|m| AdminEvaluationView {
            team_category: categories.get(&m.team_id).cloned().unwrap_or_default(),
            judge_name: judge_names.get(&m.judge_id).cloned().unwrap_or_default(),
            evaluation: m.into(),
        })
        .collect();

    Ok(Json(items))
}

/// Shared write path for submit and save-draft.
///
/// One atomic `INSERT ... ON CONFLICT (team_id, judge_id) DO UPDATE` against
/// the ledger's unique index, never a find-then-create, so a concurrent
/// double-submit resolves to a single row. On submit the outcome write-back
/// joins the same transaction: either both effects land or neither does.
async fn upsert_evaluation(
    state: &AppState,
    auth_judge: &AuthJudge,
    payload: EvaluationRequest,
    status: &str,
) -> Result<evaluation::Model, AppError> {
    validate_evaluation(&payload)?;

    let total = payload.total_score();
    let average = f64::from(total) / 8.0;
    let now = chrono::Utc::now();

    let txn = state.db.begin().await?;

    // Identification must resolve before anything is written.
    let team_exists = team::Entity::find_by_id(payload.team_id)
        .one(&txn)
        .await?
        .is_some();
    if !team_exists {
        return Err(AppError::Validation(format!(
            "Unknown team_id {}",
            payload.team_id
        )));
    }

    let active = evaluation::ActiveModel {
        team_id: Set(payload.team_id),
        judge_id: Set(auth_judge.judge_id),
        round_id: Set(payload.round_id),
        team_name: Set(payload.team_name.trim().to_string()),
        problem_solution_fit: Set(payload.problem_solution_fit),
        functionality_features: Set(payload.functionality_features),
        technical_feasibility: Set(payload.technical_feasibility),
        innovation_creativity: Set(payload.innovation_creativity),
        user_experience: Set(payload.user_experience),
        impact_value: Set(payload.impact_value),
        presentation_demo_quality: Set(payload.presentation_demo_quality),
        team_collaboration: Set(payload.team_collaboration),
        personalized_feedback: Set(payload.personalized_feedback),
        total_score: Set(total),
        average_score: Set(average),
        status: Set(status.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    // created_at survives replacement; updated_at is refreshed.
    evaluation::Entity::insert(active)
        .on_conflict(
            OnConflict::columns([evaluation::Column::TeamId, evaluation::Column::JudgeId])
                .update_columns([
                    evaluation::Column::RoundId,
                    evaluation::Column::TeamName,
                    evaluation::Column::ProblemSolutionFit,
                    evaluation::Column::FunctionalityFeatures,
                    evaluation::Column::TechnicalFeasibility,
                    evaluation::Column::InnovationCreativity,
                    evaluation::Column::UserExperience,
                    evaluation::Column::ImpactValue,
                    evaluation::Column::PresentationDemoQuality,
                    evaluation::Column::TeamCollaboration,
                    evaluation::Column::PersonalizedFeedback,
                    evaluation::Column::TotalScore,
                    evaluation::Column::AverageScore,
                    evaluation::Column::Status,
                    evaluation::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

    let model = evaluation::Entity::find()
        .filter(evaluation::Column::TeamId.eq(payload.team_id))
        .filter(evaluation::Column::JudgeId.eq(auth_judge.judge_id))
        .one(&txn)
        .await?
        .ok_or_else(|| AppError::Internal("Evaluation missing after upsert".into()))?;

    if status == STATUS_SUBMITTED {
        let outcome = evaluation_outcome::ActiveModel {
            team_id: Set(payload.team_id),
            judge_id: Set(auth_judge.judge_id),
            average_score: Set(average),
            submitted_at: Set(now),
        };
        evaluation_outcome::Entity::insert(outcome)
            .on_conflict(
                OnConflict::column(evaluation_outcome::Column::TeamId)
                    .update_columns([
                        evaluation_outcome::Column::JudgeId,
                        evaluation_outcome::Column::AverageScore,
                        evaluation_outcome::Column::SubmittedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;

    Ok(model)
}
