use std::collections::HashMap;

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::entity::{assignment, evaluation_outcome, team};
use crate::error::AppError;
use crate::models::team::{TeamEvaluationStatus, TeamView};

/// Combine a team with its assignment and outcome records.
///
/// The only place the two writer-owned records meet: evaluation status and
/// score are derived here and never stored on the team itself. An outcome
/// without an assignment is hidden: unassigning discards the team's score
/// reference while the underlying evaluation stays in the ledger.
pub fn combine(
    team: team::Model,
    assignment: Option<&assignment::Model>,
    outcome: Option<&evaluation_outcome::Model>,
) -> TeamView {
    let (status, judge, score) = match (assignment, outcome) {
        (None, _) => (TeamEvaluationStatus::Unassigned, None, None),
        (Some(a), None) => (TeamEvaluationStatus::Assigned, Some(a.judge_id), None),
        (Some(a), Some(o)) => (
            TeamEvaluationStatus::Completed,
            Some(a.judge_id),
            Some(o.average_score),
        ),
    };

    TeamView {
        id: team.id,
        team_name: team.team_name,
        email: team.email,
        members: team.members,
        category: team.category,
        is_active: team.is_active,
        assigned_judge: judge,
        evaluation_status: status,
        evaluation_score: score,
    }
}

/// Load the combined view for one team, returning 404 if the team is absent.
pub async fn find_team_view<C: ConnectionTrait>(db: &C, team_id: i32) -> Result<TeamView, AppError> {
    let team = team::Entity::find_by_id(team_id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Team not found".into()))?;
    let assignment = assignment::Entity::find_by_id(team_id).one(db).await?;
    let outcome = evaluation_outcome::Entity::find_by_id(team_id).one(db).await?;

    Ok(combine(team, assignment.as_ref(), outcome.as_ref()))
}

/// Load combined views for every team, ordered by id.
///
/// Three bulk reads joined in memory; team counts are tens to low hundreds.
pub async fn list_team_views<C: ConnectionTrait>(db: &C) -> Result<Vec<TeamView>, AppError> {
    let teams = team::Entity::find()
        .order_by_asc(team::Column::Id)
        .all(db)
        .await?;
    let assignments: HashMap<i32, assignment::Model> = assignment::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|a| (a.team_id, a))
        .collect();
    let outcomes: HashMap<i32, evaluation_outcome::Model> = evaluation_outcome::Entity::find()
        .all(db)
        .await?
        .into_iter()
        .map(|o| (o.team_id, o))
        .collect();

    Ok(teams
        .into_iter()
        .map(|t| {
            let a = assignments.get(&t.id);
            let o = outcomes.get(&t.id);
            combine(t, a, o)
        })
        .collect())
}
