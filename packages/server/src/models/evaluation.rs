use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::validate_name;
use crate::entity::evaluation;
use crate::error::AppError;

/// Request body shared by submit and save-draft.
///
/// `total_score` and `average_score` are deliberately absent: both are
/// recomputed server-side and client-supplied values are never trusted.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct EvaluationRequest {
    pub team_id: i32,
    pub team_name: String,
    #[serde(default)]
    pub round_id: Option<i32>,

    pub problem_solution_fit: i32,
    pub functionality_features: i32,
    pub technical_feasibility: i32,
    pub innovation_creativity: i32,
    pub user_experience: i32,
    pub impact_value: i32,
    pub presentation_demo_quality: i32,
    pub team_collaboration: i32,

    #[serde(default)]
    pub personalized_feedback: String,
}

impl EvaluationRequest {
    /// The eight criteria with their field names, in ledger order.
    pub fn criteria(&self) -> [(&'static str, i32); 8] {
        [
            ("problem_solution_fit", self.problem_solution_fit),
            ("functionality_features", self.functionality_features),
            ("technical_feasibility", self.technical_feasibility),
            ("innovation_creativity", self.innovation_creativity),
            ("user_experience", self.user_experience),
            ("impact_value", self.impact_value),
            ("presentation_demo_quality", self.presentation_demo_quality),
            ("team_collaboration", self.team_collaboration),
        ]
    }

    /// Sum of the eight criteria (8-80 once validated).
    pub fn total_score(&self) -> i32 {
        self.criteria().iter().map(|(_, v)| v).sum()
    }
}

/// Reject malformed criteria and identification fields before any write.
pub fn validate_evaluation(req: &EvaluationRequest) -> Result<(), AppError> {
    validate_name(&req.team_name, "Team name")?;
    for (field, value) in req.criteria() {
        if !(1..=10).contains(&value) {
            return Err(AppError::Validation(format!(
                "{field} must be an integer between 1 and 10"
            )));
        }
    }
    Ok(())
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct EvaluationResponse {
    pub id: i32,
    pub team_id: i32,
    pub judge_id: i32,
    pub round_id: Option<i32>,
    pub team_name: String,

    pub problem_solution_fit: i32,
    pub functionality_features: i32,
    pub technical_feasibility: i32,
    pub innovation_creativity: i32,
    pub user_experience: i32,
    pub impact_value: i32,
    pub presentation_demo_quality: i32,
    pub team_collaboration: i32,

    pub personalized_feedback: String,
    pub total_score: i32,
    pub average_score: f64,
    /// One of: draft, submitted
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<evaluation::Model> for EvaluationResponse {
    fn from(m: evaluation::Model) -> Self {
        Self {
            id: m.id,
            team_id: m.team_id,
            judge_id: m.judge_id,
            round_id: m.round_id,
            team_name: m.team_name,
            problem_solution_fit: m.problem_solution_fit,
            functionality_features: m.functionality_features,
            technical_feasibility: m.technical_feasibility,
            innovation_creativity: m.innovation_creativity,
            user_experience: m.user_experience,
            impact_value: m.impact_value,
            presentation_demo_quality: m.presentation_demo_quality,
            team_collaboration: m.team_collaboration,
            personalized_feedback: m.personalized_feedback,
            total_score: m.total_score,
            average_score: m.average_score,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Submit response: the stored evaluation plus the derived scores at top
/// level, as judge clients expect.
#[derive(Serialize, utoipa::ToSchema)]
pub struct SubmitEvaluationResponse {
    pub evaluation: EvaluationResponse,
    pub total_score: i32,
    pub average_score: f64,
}

/// Admin listing row: a ledger entry joined with team category and judge
/// name for display.
#[derive(Serialize, utoipa::ToSchema)]
pub struct AdminEvaluationView {
    pub evaluation: EvaluationResponse,
    pub team_category: String,
    pub judge_name: String,
}
