use sqlx::{PgExecutor, PgPool};

use crate::models::Service;

pub async fn list_active(pool: &PgPool, limit: i64) -> Result<Vec<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(
        "SELECT * FROM services WHERE active = TRUE ORDER BY sort_order ASC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn insert<'e>(executor: impl PgExecutor<'e>, service: &Service) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO services (id, icon, title, description, price, sort_order, active, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(service.id)
    .bind(&service.icon)
    .bind(&service.title)
    .bind(&service.description)
    .bind(&service.price)
    .bind(service.order)
    .bind(service.active)
    .bind(service.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM services").execute(executor).await?;
    Ok(result.rows_affected())
}
