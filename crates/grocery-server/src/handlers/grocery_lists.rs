//! Grocery list handlers

use crate::error::ApiError;
use crate::handlers::validation;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use grocery_types::{
    CreateGroceryList, GroceryItems, GroceryListLookup, Message, RecordId, GROCERY_LIST_CREATED,
};
use tracing::{debug, info};

pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<RecordId>,
) -> Result<Json<GroceryListLookup>, ApiError> {
    let user_id = validation::user_id(user_id)?;

    match state.db.find_grocery_list_by_user(user_id).await? {
        Some(list) => {
            debug!("Found grocery list {} for user {}", list.id, user_id);
            Ok(Json(GroceryListLookup::Found(GroceryItems {
                items: list.items,
            })))
        }
        None => {
            debug!("No grocery list for user {}", user_id);
            Ok(Json(GroceryListLookup::not_found()))
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Path(user_id): Path<RecordId>,
    Json(req): Json<CreateGroceryList>,
) -> Result<Json<Message>, ApiError> {
    let user_id = validation::user_id(user_id)?;

    let items = if state.strict_validation {
        let items = validation::require_items(req.items)?;
        validation::require_user(&state.db, user_id).await?;
        Some(items)
    } else {
        req.items
    };

    let list = state
        .db
        .create_grocery_list(user_id, items.as_deref())
        .await?;
    info!("Created grocery list {} for user {}", list.id, user_id);

    Ok(Json(Message::new(GROCERY_LIST_CREATED)))
}
