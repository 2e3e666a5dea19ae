use sqlx::{PgExecutor, PgPool};

use crate::models::Testimonial;

pub async fn list_approved(pool: &PgPool, limit: i64) -> Result<Vec<Testimonial>, sqlx::Error> {
    sqlx::query_as::<_, Testimonial>(
        "SELECT * FROM testimonials WHERE approved = TRUE ORDER BY created_at, id LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    testimonial: &Testimonial,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO testimonials (id, name, role, text, rating, approved, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(testimonial.id)
    .bind(&testimonial.name)
    .bind(&testimonial.role)
    .bind(&testimonial.text)
    .bind(testimonial.rating)
    .bind(testimonial.approved)
    .bind(testimonial.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM testimonials").execute(executor).await?;
    Ok(result.rows_affected())
}
