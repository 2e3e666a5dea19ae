use sqlx::{PgExecutor, PgPool};

use crate::models::Faq;

pub async fn list_active(pool: &PgPool, limit: i64) -> Result<Vec<Faq>, sqlx::Error> {
    sqlx::query_as::<_, Faq>(
        "SELECT * FROM faqs WHERE active = TRUE ORDER BY sort_order ASC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn insert<'e>(executor: impl PgExecutor<'e>, faq: &Faq) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO faqs (id, question, answer, sort_order, active, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(faq.id)
    .bind(&faq.question)
    .bind(&faq.answer)
    .bind(faq.order)
    .bind(faq.active)
    .bind(faq.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM faqs").execute(executor).await?;
    Ok(result.rows_affected())
}
