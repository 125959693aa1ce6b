use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A timed competition phase.
///
/// There is deliberately no `status` column: round status is derived from
/// the time window on every read (`utils::round::derive_status`), so it can
/// never go stale between writes.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "round")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    pub description: String,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    /// Submission cutoff; always within `[start_time, end_time]`.
    pub upload_deadline: DateTimeUtc,

    /// Username of the admin who created the round.
    pub created_by: String,

    #[sea_orm(has_many)]
    pub evaluations: HasMany<super::evaluation::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
