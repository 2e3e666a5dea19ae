use sqlx::{PgExecutor, PgPool};

use crate::models::ProcessStep;

pub async fn list_active(pool: &PgPool, limit: i64) -> Result<Vec<ProcessStep>, sqlx::Error> {
    sqlx::query_as::<_, ProcessStep>(
        "SELECT * FROM process_steps WHERE active = TRUE ORDER BY step ASC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn insert<'e>(executor: impl PgExecutor<'e>, step: &ProcessStep) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO process_steps (id, step, title, description, icon, active, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(step.id)
    .bind(step.step)
    .bind(&step.title)
    .bind(&step.description)
    .bind(&step.icon)
    .bind(step.active)
    .bind(step.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM process_steps").execute(executor).await?;
    Ok(result.rows_affected())
}
