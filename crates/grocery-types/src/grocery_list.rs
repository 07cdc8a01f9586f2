//! Grocery list types

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A grocery list owned by one user
///
/// `user_id` is not checked against the user table. `items` is a comma-joined
/// string and may be absent when a list was created without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryList {
    pub id: RecordId,
    pub user_id: Option<RecordId>,
    pub items: Option<String>,
}
