use serde::Serialize;

/// Per-judge workload row for the admin dashboard.
#[derive(Serialize, utoipa::ToSchema)]
pub struct JudgeStatistics {
    pub judge_id: i32,
    pub username: String,
    pub name: String,
    /// Teams currently assigned to this judge.
    pub assigned_teams: u64,
    /// Assigned teams whose evaluation has been submitted.
    pub completed_teams: u64,
}

/// Platform-wide aggregate counts.
#[derive(Serialize, utoipa::ToSchema)]
pub struct PlatformStatistics {
    pub active_teams: u64,
    pub active_judges: u64,
    pub rounds: u64,
    /// Teams assigned across all active judges.
    pub assigned_teams: u64,
    /// Assigned teams (active judges) with a submitted evaluation.
    pub completed_teams: u64,
    pub draft_evaluations: u64,
    pub submitted_evaluations: u64,
}
