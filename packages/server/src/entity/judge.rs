use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "judge")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,
    /// Opaque hash provisioned by the external auth service; never read or
    /// produced by this subsystem, and excluded from all projections.
    pub password_hash: String,

    pub name: String,
    pub email: String,
    /// Category tags stored as a JSON array, e.g. `["fintech", "ai"]`.
    #[sea_orm(column_type = "JsonBinary")]
    pub expertise: serde_json::Value,
    pub is_active: bool,

    #[sea_orm(has_many)]
    pub assignments: HasMany<super::assignment::Entity>,

    #[sea_orm(has_many)]
    pub evaluations: HasMany<super::evaluation::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
