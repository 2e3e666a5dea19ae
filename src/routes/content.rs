use axum::extract::State;
use axum::Json;

use crate::error::AppError;
use crate::models::{Faq, ProcessStep, Testimonial};
use crate::state::SharedState;

pub async fn testimonials(
    State(state): State<SharedState>,
) -> Result<Json<Vec<Testimonial>>, AppError> {
    let testimonials = state.store.list_approved_testimonials().await?;
    Ok(Json(testimonials))
}

pub async fn faqs(State(state): State<SharedState>) -> Result<Json<Vec<Faq>>, AppError> {
    let faqs = state.store.list_active_faqs().await?;
    Ok(Json(faqs))
}

pub async fn process_steps(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ProcessStep>>, AppError> {
    let steps = state.store.list_active_process_steps().await?;
    Ok(Json(steps))
}
