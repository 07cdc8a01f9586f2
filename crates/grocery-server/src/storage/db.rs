//! SQLite database layer (embedded, no external dependencies)

use crate::error::StorageError;
use grocery_types::{GroceryList, Recipe, RecordId, User};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;

type Result<T> = std::result::Result<T, StorageError>;

/// Handle to the grocery database, shared by every request handler
#[derive(Debug)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// Open (or create) the database file at `database_path`.
    ///
    /// The schema is not touched here; call [`Database::initialize_schema`] once at startup.
    pub async fn connect(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        let parent = match Path::new(database_path).parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            StorageError::Init(format!(
                "Failed to create database directory {}: {}",
                parent.display(),
                e
            ))
        })?;

        let test_file = parent.join(".write_test");
        match tokio::fs::write(&test_file, b"test").await {
            Ok(_) => {
                if let Err(e) = tokio::fs::remove_file(&test_file).await {
                    tracing::warn!(
                        "Failed to remove write test file {}: {}",
                        test_file.display(),
                        e
                    );
                }
                tracing::debug!("Database directory is writable");
            }
            Err(e) => {
                return Err(StorageError::Init(format!(
                    "Database directory is not writable: {}: {}",
                    parent.display(),
                    e
                )));
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // grocery_list.user_id is declared as a reference but never enforced
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| {
                StorageError::Init(format!(
                    "Failed to connect to SQLite database at {}: {}",
                    database_path, e
                ))
            })?;

        tracing::info!("SQLite connection established");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Open a private in-memory database.
    ///
    /// The pool holds exactly one connection that never expires, since every
    /// in-memory connection would otherwise see its own empty database.
    #[cfg(test)]
    pub async fn in_memory() -> Result<Self> {
        use std::str::FromStr;
        use std::time::Duration;

        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StorageError::Init(e.to_string()))?
            .foreign_keys(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::Init(e.to_string()))?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Create the three tables if they do not exist yet. Safe to call repeatedly.
    pub async fn initialize_schema(&self) -> Result<()> {
        for statement in CREATE_TABLES {
            sqlx::query(statement)
                .execute(&*self.pool)
                .await
                .map_err(|e| StorageError::Init(format!("Failed to create schema: {}", e)))?;
        }

        tracing::debug!("Schema ready");
        Ok(())
    }

    /// Drop every table and recreate the schema from scratch.
    pub async fn reset_schema(&self) -> Result<()> {
        for statement in DROP_TABLES {
            sqlx::query(statement)
                .execute(&*self.pool)
                .await
                .map_err(StorageError::Write)?;
        }

        self.initialize_schema().await
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&*self.pool)
            .await
            .map_err(StorageError::Read)?;

        Ok(())
    }

    // User operations
    pub async fn create_user(
        &self,
        name: Option<&str>,
        dietary_preferences: Option<&str>,
    ) -> Result<User> {
        let result = sqlx::query(
            r#"
            INSERT INTO "user" (name, dietary_preferences)
            VALUES (?1, ?2)
            "#,
        )
        .bind(name)
        .bind(dietary_preferences)
        .execute(&*self.pool)
        .await
        .map_err(StorageError::Write)?;

        Ok(User {
            id: result.last_insert_rowid(),
            name: name.map(str::to_string),
            dietary_preferences: dietary_preferences.map(str::to_string),
        })
    }

    pub async fn find_user(&self, user_id: RecordId) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, dietary_preferences FROM "user" WHERE id = ?1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(StorageError::Read)?;

        Ok(row.map(Into::into))
    }

    // Recipe operations
    pub async fn create_recipe(
        &self,
        name: Option<&str>,
        ingredients: Option<&str>,
    ) -> Result<Recipe> {
        let result = sqlx::query(
            r#"
            INSERT INTO recipe (name, ingredients)
            VALUES (?1, ?2)
            "#,
        )
        .bind(name)
        .bind(ingredients)
        .execute(&*self.pool)
        .await
        .map_err(StorageError::Write)?;

        Ok(Recipe {
            id: result.last_insert_rowid(),
            name: name.map(str::to_string),
            ingredients: ingredients.map(str::to_string),
        })
    }

    /// All recipes in insertion order. An empty table yields an empty vector.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let rows: Vec<RecipeRow> = sqlx::query_as(
            r#"
            SELECT id, name, ingredients FROM recipe
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(StorageError::Read)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    // Grocery list operations

    /// The first list stored for `user_id`.
    ///
    /// A user may own several lists; the one with the lowest id always wins.
    pub async fn find_grocery_list_by_user(
        &self,
        user_id: RecordId,
    ) -> Result<Option<GroceryList>> {
        let row: Option<GroceryListRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, items FROM grocery_list
            WHERE user_id = ?1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(StorageError::Read)?;

        Ok(row.map(Into::into))
    }

    /// Insert a new list. `user_id` is stored as given, existing user or not.
    pub async fn create_grocery_list(
        &self,
        user_id: RecordId,
        items: Option<&str>,
    ) -> Result<GroceryList> {
        let result = sqlx::query(
            r#"
            INSERT INTO grocery_list (user_id, items)
            VALUES (?1, ?2)
            "#,
        )
        .bind(user_id)
        .bind(items)
        .execute(&*self.pool)
        .await
        .map_err(StorageError::Write)?;

        Ok(GroceryList {
            id: result.last_insert_rowid(),
            user_id: Some(user_id),
            items: items.map(str::to_string),
        })
    }
}

const CREATE_TABLES: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS "user" (
        id INTEGER PRIMARY KEY,
        name VARCHAR(50),
        dietary_preferences VARCHAR(200)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS recipe (
        id INTEGER PRIMARY KEY,
        name VARCHAR(100),
        ingredients VARCHAR(500)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS grocery_list (
        id INTEGER PRIMARY KEY,
        user_id INTEGER REFERENCES "user" (id),
        items VARCHAR(500)
    )
    "#,
];

const DROP_TABLES: [&str; 3] = [
    "DROP TABLE IF EXISTS grocery_list",
    "DROP TABLE IF EXISTS recipe",
    r#"DROP TABLE IF EXISTS "user""#,
];

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: Option<String>,
    dietary_preferences: Option<String>,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: r.id,
            name: r.name,
            dietary_preferences: r.dietary_preferences,
        }
    }
}

#[derive(sqlx::FromRow)]
struct RecipeRow {
    id: i64,
    name: Option<String>,
    ingredients: Option<String>,
}

impl From<RecipeRow> for Recipe {
    fn from(r: RecipeRow) -> Self {
        Recipe {
            id: r.id,
            name: r.name,
            ingredients: r.ingredients,
        }
    }
}

#[derive(sqlx::FromRow)]
struct GroceryListRow {
    id: i64,
    user_id: Option<i64>,
    items: Option<String>,
}

impl From<GroceryListRow> for GroceryList {
    fn from(r: GroceryListRow) -> Self {
        GroceryList {
            id: r.id,
            user_id: r.user_id,
            items: r.items,
        }
    }
}
