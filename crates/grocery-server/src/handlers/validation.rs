//! Boundary checks on request input
//!
//! `user_id` is checked on every request; the rest only in strict mode.

use crate::error::ApiError;
use crate::storage::Database;
use grocery_types::RecordId;

/// Longest items string the `grocery_list.items` column is declared for
pub const MAX_ITEMS_LEN: usize = 500;

/// Path ids are record ids, so any non-negative integer is accepted.
pub fn user_id(user_id: RecordId) -> Result<RecordId, ApiError> {
    if user_id < 0 {
        return Err(ApiError::InvalidUserId(user_id));
    }
    Ok(user_id)
}

pub fn require_items(items: Option<String>) -> Result<String, ApiError> {
    let items = match items {
        Some(items) if !items.trim().is_empty() => items,
        _ => return Err(ApiError::Validation("items is required".to_string())),
    };

    if items.chars().count() > MAX_ITEMS_LEN {
        return Err(ApiError::Validation(format!(
            "items must be at most {} characters",
            MAX_ITEMS_LEN
        )));
    }

    Ok(items)
}

pub async fn require_user(db: &Database, user_id: RecordId) -> Result<(), ApiError> {
    match db.find_user(user_id).await? {
        Some(_) => Ok(()),
        None => Err(ApiError::UnknownUser(user_id)),
    }
}
