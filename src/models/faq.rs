use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    #[sqlx(rename = "sort_order")]
    pub order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
