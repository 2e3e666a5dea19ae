use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::models::PortfolioProject;
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreatePortfolioProject {
    pub title: String,
    pub category: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<PortfolioProject>>, AppError> {
    let projects = state.store.list_portfolio().await?;
    Ok(Json(projects))
}

pub async fn categories(
    State(state): State<SharedState>,
) -> Result<Json<CategoriesResponse>, AppError> {
    let categories = state.store.portfolio_categories().await?;
    Ok(Json(CategoriesResponse { categories }))
}

pub async fn create(
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<CreatePortfolioProject>,
) -> Result<Json<PortfolioProject>, AppError> {
    let project = PortfolioProject {
        id: state.ids.next_id(),
        title: req.title,
        category: req.category,
        image: req.image,
        description: req.description,
        featured: req.featured,
        created_at: state.clock.now(),
    };

    state.store.insert_portfolio(&project).await?;
    tracing::info!(project_id = %project.id, category = %project.category, "Portfolio project created");

    Ok(Json(project))
}
