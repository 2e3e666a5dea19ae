use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::seed::{self, SEEDED_MESSAGE};
use crate::state::SharedState;

#[derive(Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
}

/// Replace all content with the sample dataset. Development use only.
pub async fn seed(State(state): State<SharedState>) -> Result<Json<SeedResponse>, AppError> {
    let content = seed::sample_content(state.clock.as_ref(), state.ids.as_ref());
    state.store.replace_content(&content).await?;

    tracing::info!(
        portfolio = content.portfolio.len(),
        services = content.services.len(),
        testimonials = content.testimonials.len(),
        faqs = content.faqs.len(),
        process_steps = content.process_steps.len(),
        "Content reseeded"
    );

    Ok(Json(SeedResponse {
        message: SEEDED_MESSAGE,
    }))
}
