use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ContentSet, ContentStore, LIST_LIMIT};
use crate::error::StoreError;
use crate::models::{ContactSubmission, Faq, PortfolioProject, ProcessStep, Service, Testimonial};

/// In-process store. Collections keep insertion order; one lock guards all
/// of them, so a content replacement is observed all at once.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    content: ContentSet,
    contact_submissions: Vec<ContactSubmission>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn contact_submissions(&self) -> Vec<ContactSubmission> {
        self.inner.read().await.contact_submissions.clone()
    }
}

fn capped<T>(mut rows: Vec<T>) -> Vec<T> {
    rows.truncate(LIST_LIMIT);
    rows
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_portfolio(&self) -> Result<Vec<PortfolioProject>, StoreError> {
        let inner = self.inner.read().await;
        Ok(capped(inner.content.portfolio.clone()))
    }

    async fn portfolio_categories(&self) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.read().await;
        let mut categories: Vec<String> = inner
            .content
            .portfolio
            .iter()
            .map(|p| p.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        Ok(categories)
    }

    async fn insert_portfolio(&self, project: &PortfolioProject) -> Result<(), StoreError> {
        self.inner.write().await.content.portfolio.push(project.clone());
        Ok(())
    }

    async fn list_active_services(&self) -> Result<Vec<Service>, StoreError> {
        let inner = self.inner.read().await;
        let mut services: Vec<Service> = inner
            .content
            .services
            .iter()
            .filter(|s| s.active)
            .cloned()
            .collect();
        services.sort_by_key(|s| s.order);
        Ok(capped(services))
    }

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .contact_submissions
            .push(submission.clone());
        Ok(())
    }

    async fn list_approved_testimonials(&self) -> Result<Vec<Testimonial>, StoreError> {
        let inner = self.inner.read().await;
        Ok(capped(
            inner
                .content
                .testimonials
                .iter()
                .filter(|t| t.approved)
                .cloned()
                .collect(),
        ))
    }

    async fn list_active_faqs(&self) -> Result<Vec<Faq>, StoreError> {
        let inner = self.inner.read().await;
        let mut faqs: Vec<Faq> = inner.content.faqs.iter().filter(|f| f.active).cloned().collect();
        faqs.sort_by_key(|f| f.order);
        Ok(capped(faqs))
    }

    async fn list_active_process_steps(&self) -> Result<Vec<ProcessStep>, StoreError> {
        let inner = self.inner.read().await;
        let mut steps: Vec<ProcessStep> = inner
            .content
            .process_steps
            .iter()
            .filter(|p| p.active)
            .cloned()
            .collect();
        steps.sort_by_key(|p| p.step);
        Ok(capped(steps))
    }

    async fn replace_content(&self, content: &ContentSet) -> Result<(), StoreError> {
        self.inner.write().await.content = content.clone();
        Ok(())
    }
}
