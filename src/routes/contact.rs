use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::contact::{ContactSubmission, STATUS_NEW};
use crate::state::SharedState;

pub const ACK_MESSAGE: &str = "Спасибо за обращение! Мы свяжемся с вами в ближайшее время.";

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: &'static str,
}

pub async fn submit(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<SubmitContact>,
) -> Result<Json<ContactResponse>, AppError> {
    let submission = ContactSubmission {
        id: state.ids.next_id(),
        name: req.name,
        phone: req.phone,
        email: req.email,
        message: req.message,
        status: STATUS_NEW.to_string(),
        created_at: state.clock.now(),
    };

    state.store.insert_contact(&submission).await?;
    tracing::info!(submission_id = %submission.id, "Contact submission stored");

    // Delivery can take as long as an SMTP timeout; acknowledge without it.
    if !state.notifiers.is_empty() {
        let state = state.clone();
        tokio::spawn(async move {
            state.notifiers.dispatch(&submission).await;
        });
    }

    Ok(Json(ContactResponse {
        success: true,
        message: ACK_MESSAGE,
    }))
}
