use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stage of the studio's order workflow, shown as a numbered step.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct ProcessStep {
    pub id: Uuid,
    pub step: i32,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
