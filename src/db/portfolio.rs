use sqlx::{PgExecutor, PgPool};

use crate::models::PortfolioProject;

pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<PortfolioProject>, sqlx::Error> {
    sqlx::query_as::<_, PortfolioProject>(
        "SELECT * FROM portfolio ORDER BY created_at, id LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

pub async fn distinct_categories(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT DISTINCT category FROM portfolio ORDER BY category")
        .fetch_all(pool)
        .await
}

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    project: &PortfolioProject,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO portfolio (id, title, category, image, description, featured, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(project.id)
    .bind(&project.title)
    .bind(&project.category)
    .bind(&project.image)
    .bind(&project.description)
    .bind(project.featured)
    .bind(project.created_at)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_all<'e>(executor: impl PgExecutor<'e>) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM portfolio").execute(executor).await?;
    Ok(result.rows_affected())
}
