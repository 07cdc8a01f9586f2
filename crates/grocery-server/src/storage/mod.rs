//! Storage layer
//!
//! Uses SQLite (embedded) for the three grocery tables.

pub mod db;

pub use db::Database;
