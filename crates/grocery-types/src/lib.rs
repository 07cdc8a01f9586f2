//! Grocery Types - Pure type definitions shared by the server and its clients
//!
//! This crate contains only plain data types with no async runtime dependencies.

pub mod grocery_list;
pub mod message;
pub mod recipe;
pub mod user;

pub use grocery_list::*;
pub use message::*;
pub use recipe::*;
pub use user::*;

/// Identifier assigned by the store to every record
pub type RecordId = i64;
