//! Recipe types

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A recipe as listed by `GET /recipes`
///
/// `ingredients` is a single comma-joined string, e.g. `"Pasta, Tomato Sauce, Cheese"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecordId,
    pub name: Option<String>,
    pub ingredients: Option<String>,
}
