use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A finished piece shown in the portfolio gallery.
///
/// `category` is advisory (murals, portraits, commercial, abstract,
/// automotive) and `image` is either a URL or inline image data.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}
