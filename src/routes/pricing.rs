use axum::Json;
use serde::Deserialize;

use crate::error::AppError;
use crate::extract::ApiJson;
use crate::pricing::{self, PriceQuote};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatePrice {
    pub area: f64,
    pub tier: String,
}

pub async fn calculate(ApiJson(req): ApiJson<CalculatePrice>) -> Result<Json<PriceQuote>, AppError> {
    let quote = pricing::quote(req.area, &req.tier)?;
    Ok(Json(quote))
}
