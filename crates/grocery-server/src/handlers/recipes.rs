//! Recipe handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{extract::State, Json};
use grocery_types::Recipe;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    let recipes = state.db.list_recipes().await?;
    tracing::debug!("Listing {} recipes", recipes.len());
    Ok(Json(recipes))
}
