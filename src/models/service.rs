use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Display text, e.g. "от 50,000 ₽".
    pub price: String,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
