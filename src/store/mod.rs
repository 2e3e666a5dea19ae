//! Content persistence behind a single trait, so handlers never see which
//! backend is serving them.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{ContactSubmission, Faq, PortfolioProject, ProcessStep, Service, Testimonial};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Upper bound on rows returned by any listing.
pub const LIST_LIMIT: usize = 1000;

/// A full replacement set for the five content collections.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    pub portfolio: Vec<PortfolioProject>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
    pub process_steps: Vec<ProcessStep>,
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn list_portfolio(&self) -> Result<Vec<PortfolioProject>, StoreError>;
    async fn portfolio_categories(&self) -> Result<Vec<String>, StoreError>;
    async fn insert_portfolio(&self, project: &PortfolioProject) -> Result<(), StoreError>;

    /// Active services, `order` ascending.
    async fn list_active_services(&self) -> Result<Vec<Service>, StoreError>;

    async fn insert_contact(&self, submission: &ContactSubmission) -> Result<(), StoreError>;

    async fn list_approved_testimonials(&self) -> Result<Vec<Testimonial>, StoreError>;

    /// Active FAQs, `order` ascending.
    async fn list_active_faqs(&self) -> Result<Vec<Faq>, StoreError>;

    /// Active process steps, `step` ascending.
    async fn list_active_process_steps(&self) -> Result<Vec<ProcessStep>, StoreError>;

    /// Clear every content collection and insert `content` in its place.
    /// Contact submissions are left alone.
    async fn replace_content(&self, content: &ContentSet) -> Result<(), StoreError>;
}
