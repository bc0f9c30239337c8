use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::taxonomy::GiftCategory;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
    pub relationships: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SampleGiftsResponse {
    pub category: GiftCategory,
    pub gifts: Vec<String>,
}

/// GET /api/categories
pub async fn handle_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.taxonomy.category_names(),
        relationships: state.taxonomy.relationships().to_vec(),
    })
}

/// GET /api/sample-gifts/:category
pub async fn handle_sample_gifts(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<SampleGiftsResponse>, AppError> {
    let category: GiftCategory = category
        .parse()
        .map_err(|_| AppError::NotFound("Category not found".to_string()))?;

    Ok(Json(SampleGiftsResponse {
        category,
        gifts: state.taxonomy.items(category).to_vec(),
    }))
}
