//! Demo data for a fresh database

use crate::error::StorageError;
use crate::storage::Database;
use tracing::info;

const USERS: &[(&str, &str)] = &[("John Doe", "vegetarian")];

const RECIPES: &[(&str, &str)] = &[
    ("Pasta", "Pasta, Tomato Sauce, Cheese"),
    ("Salad", "Lettuce, Tomato, Cucumber, Olive Oil"),
];

/// Wipe every table and insert the demo users and recipes.
pub async fn run(db: &Database) -> Result<(), StorageError> {
    db.reset_schema().await?;

    for &(name, preferences) in USERS {
        let user = db.create_user(Some(name), Some(preferences)).await?;
        info!("Seeded user {} ({})", user.id, name);
    }

    for &(name, ingredients) in RECIPES {
        let recipe = db.create_recipe(Some(name), Some(ingredients)).await?;
        info!("Seeded recipe {} ({})", recipe.id, name);
    }

    Ok(())
}
