//! HTTP handlers

pub mod grocery_lists;
pub mod health;
pub mod recipes;
pub mod validation;

pub use health::health;
