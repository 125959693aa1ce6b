use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The evaluation result written back for a team on submit.
///
/// Owned by the evaluation ledger and written only when an evaluation is
/// submitted (drafts never touch it), in the same transaction as the
/// evaluation upsert. One row per team, keyed by the team itself.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "evaluation_outcome")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id: i32,
    #[sea_orm(belongs_to, from = "team_id", to = "id")]
    pub team: BelongsTo<super::team::Entity>,

    pub judge_id: i32,
    #[sea_orm(belongs_to, from = "judge_id", to = "id")]
    pub judge: BelongsTo<super::judge::Entity>,

    /// Average score on the canonical 0-10 scale.
    pub average_score: f64,
    pub submitted_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
