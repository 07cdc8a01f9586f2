//! Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};

pub const GROCERY_LIST_NOT_FOUND: &str = "Grocery list not found";
pub const GROCERY_LIST_CREATED: &str = "Grocery list created";

/// Body of `POST /grocerylist/{user_id}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGroceryList {
    #[serde(default)]
    pub items: Option<String>,
}

/// Body returned when a grocery list is found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItems {
    pub items: Option<String>,
}

/// Plain `{"message": ...}` body used for confirmations, absences and errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response of `GET /grocerylist/{user_id}`
///
/// A missing list is reported as a message payload rather than an error status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroceryListLookup {
    Found(GroceryItems),
    NotFound(Message),
}

impl GroceryListLookup {
    pub fn not_found() -> Self {
        GroceryListLookup::NotFound(Message::new(GROCERY_LIST_NOT_FOUND))
    }
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            status: "unavailable".to_string(),
        }
    }
}
