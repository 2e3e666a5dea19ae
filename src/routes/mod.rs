pub mod contact;
pub mod content;
pub mod portfolio;
pub mod pricing;
pub mod seed;
pub mod services;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    let api = Router::new()
        // Portfolio
        .route("/portfolio", get(portfolio::list).post(portfolio::create))
        .route("/portfolio/categories", get(portfolio::categories))
        // Content
        .route("/services", get(services::list))
        .route("/testimonials", get(content::testimonials))
        .route("/faqs", get(content::faqs))
        .route("/process", get(content::process_steps))
        // Contact & pricing
        .route("/contact", post(contact::submit))
        .route("/calculate-price", post(pricing::calculate))
        // Development
        .route("/seed-data", post(seed::seed));

    Router::new().nest("/api", api)
}
