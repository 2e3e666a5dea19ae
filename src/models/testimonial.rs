use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub text: String,
    pub rating: i32,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}
