use sea_orm::sea_query::{Index, PostgresQueryBuilder, SqliteQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::entity::evaluation;

/// Ensure required database indexes exist.
///
/// SeaORM's schema-sync doesn't support composite unique indexes, so the
/// ledger's `(team_id, judge_id)` key is created manually on startup. The
/// atomic upsert path targets this index, so a failure here is fatal.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let stmt = Index::create()
        .if_not_exists()
        .unique()
        .name("idx_evaluation_team_judge")
        .table(evaluation::Entity)
        .col(evaluation::Column::TeamId)
        .col(evaluation::Column::JudgeId)
        .to_owned();

    let sql = match db.get_database_backend() {
        DbBackend::Sqlite => stmt.to_string(SqliteQueryBuilder),
        _ => stmt.to_string(PostgresQueryBuilder),
    };

    db.execute_unprepared(&sql).await?;
    info!("Ensured unique index idx_evaluation_team_judge exists");

    Ok(())
}
