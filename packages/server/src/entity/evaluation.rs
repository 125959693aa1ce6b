use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One judge's scored review of one team.
///
/// At most one row per `(team_id, judge_id)`: the pair carries a unique
/// index (`seed::ensure_indexes`) and every write is an atomic
/// insert-or-replace against it. Rows are never deleted by this subsystem.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "evaluation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub team_id: i32,
    #[sea_orm(belongs_to, from = "team_id", to = "id")]
    pub team: BelongsTo<super::team::Entity>,

    pub judge_id: i32,
    #[sea_orm(belongs_to, from = "judge_id", to = "id")]
    pub judge: BelongsTo<super::judge::Entity>,

    /// NULL for evaluations recorded outside a scheduled round.
    pub round_id: Option<i32>,
    #[sea_orm(belongs_to, from = "round_id", to = "id")]
    pub round: BelongsTo<Option<super::round::Entity>>,

    /// Denormalized team name, as submitted by the judge client.
    pub team_name: String,

    // The eight criteria, each an integer in [1, 10].
    pub problem_solution_fit: i32,
    pub functionality_features: i32,
    pub technical_feasibility: i32,
    pub innovation_creativity: i32,
    pub user_experience: i32,
    pub impact_value: i32,
    pub presentation_demo_quality: i32,
    pub team_collaboration: i32,

    #[sea_orm(column_type = "Text")]
    pub personalized_feedback: String,

    /// Sum of the eight criteria (8 to 80). Recomputed server-side on every
    /// write; client-supplied values are ignored.
    pub total_score: i32,
    /// `total_score / 8`, on the canonical 0-10 scale.
    pub average_score: f64,

    /// One of: draft, submitted
    pub status: String,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

/// `status` value for an evaluation that has been saved but not submitted.
pub const STATUS_DRAFT: &str = "draft";
/// `status` value for a submitted evaluation.
pub const STATUS_SUBMITTED: &str = "submitted";
