use async_trait::async_trait;
use sqlx::PgPool;

use super::{ContentSet, ContentStore, LIST_LIMIT};
use crate::db;
use crate::error::StoreError;
use crate::models::{ContactSubmission, Faq, PortfolioProject, ProcessStep, Service, Testimonial};

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

fn limit() -> i64 {
    LIST_LIMIT as i64
}

#[async_trait]
impl ContentStore for PgStore {
    async fn list_portfolio(&self) -> Result<Vec<PortfolioProject>, StoreError> {
        Ok(db::portfolio::list(&self.pool, limit()).await?)
    }

    async fn portfolio_categories(&self) -> Result<Vec<String>, StoreError> {
        Ok(db::portfolio::distinct_categories(&self.pool).await?)
    }

    async fn insert_portfolio(&self, project: &PortfolioProject) -> Result<(), StoreError> {
        Ok(db::portfolio::insert(&self.pool, project).await?)
    }

    async fn list_active_services(&self) -> Result<Vec<Service>, StoreError> {
        Ok(db::services::list_active(&self.pool, limit()).await?)
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        Ok(db::contact_submissions::insert(&self.pool, submission).await?)
    }

    async fn list_approved_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        Ok(db::testimonials::list_approved(&self.pool, limit()).await?)
    }

    async fn list_active_faqs(&self) -> Result<Vec<Faq>, StoreError> {
        Ok(db::faqs::list_active(&self.pool, limit()).await?)
    }

    async fn list_active_process_steps(&self) -> Result<Vec<ProcessStep>, StoreError> {
        Ok(db::process_steps::list_active(&self.pool, limit()).await?)
    }

    async fn replace_content(&self, content: &ContentSet) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        db::portfolio::delete_all(&mut *tx).await?;
        db::services::delete_all(&mut *tx).await?;
        db::testimonials::delete_all(&mut *tx).await?;
        db::faqs::delete_all(&mut *tx).await?;
        db::process_steps::delete_all(&mut *tx).await?;

        for project in &content.portfolio {
            db::portfolio::insert(&mut *tx, project).await?;
        }
        for service in &content.services {
            db::services::insert(&mut *tx, service).await?;
        }
        for testimonial in &content.testimonials {
            db::testimonials::insert(&mut *tx, testimonial).await?;
        }
        for faq in &content.faqs {
            db::faqs::insert(&mut *tx, faq).await?;
        }
        for step in &content.process_steps {
            db::process_steps::insert(&mut *tx, step).await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
