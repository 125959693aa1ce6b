use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A participating team.
///
/// Assignment and evaluation outcome live in their own records
/// (`assignment`, `evaluation_outcome`), each with a single writer; the
/// combined "team with evaluation status" shape exists only in the read
/// layer (`utils::team`).
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub team_name: String,
    pub email: String,
    /// Member names stored as a JSON array.
    #[sea_orm(column_type = "JsonBinary")]
    pub members: serde_json::Value,
    pub category: String,
    pub is_active: bool,

    #[sea_orm(has_one)]
    pub assignment: HasOne<super::assignment::Entity>,

    #[sea_orm(has_one)]
    pub outcome: HasOne<super::evaluation_outcome::Entity>,

    #[sea_orm(has_many)]
    pub evaluations: HasMany<super::evaluation::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
