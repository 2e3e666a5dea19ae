use sqlx::PgPool;

use crate::models::ContactSubmission;

pub async fn insert(pool: &PgPool, submission: &ContactSubmission) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO contact_submissions (id, name, phone, email, message, status, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(submission.id)
    .bind(&submission.name)
    .bind(&submission.phone)
    .bind(&submission.email)
    .bind(&submission.message)
    .bind(&submission.status)
    .bind(submission.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        "SELECT * FROM contact_submissions ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await
}
