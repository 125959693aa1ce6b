use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The judge currently responsible for evaluating a team.
///
/// Owned by the assignment coordinator: `assign` upserts this row keyed on
/// the team, `unassign` deletes it. A row exists exactly when the team is
/// assigned.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_id: i32,
    #[sea_orm(belongs_to, from = "team_id", to = "id")]
    pub team: BelongsTo<super::team::Entity>,

    pub judge_id: i32,
    #[sea_orm(belongs_to, from = "judge_id", to = "id")]
    pub judge: BelongsTo<super::judge::Entity>,

    pub assigned_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
