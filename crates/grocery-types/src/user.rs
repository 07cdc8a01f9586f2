//! User types

use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A registered user
///
/// Dietary preferences are free text and are not interpreted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: Option<String>,
    pub dietary_preferences: Option<String>,
}
