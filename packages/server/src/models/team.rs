use serde::Serialize;

/// Team evaluation status as exposed on the wire.
///
/// `in-progress` is part of the historical vocabulary and is kept for
/// client compatibility, but nothing derives it: draft saves must not
/// surface on the team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TeamEvaluationStatus {
    Unassigned,
    Assigned,
    InProgress,
    Completed,
}

/// A team combined with its assignment and evaluation outcome.
///
/// Built in the read layer only (`utils::team::combine`); the underlying
/// records each have a single writer.
#[derive(Serialize, utoipa::ToSchema)]
pub struct TeamView {
    pub id: i32,
    pub team_name: String,
    pub email: String,
    /// Member names as a JSON array.
    pub members: serde_json::Value,
    pub category: String,
    pub is_active: bool,
    pub assigned_judge: Option<i32>,
    pub evaluation_status: TeamEvaluationStatus,
    /// Average score on the canonical 0-10 scale; present only once the
    /// assigned judge has submitted.
    pub evaluation_score: Option<f64>,
}
