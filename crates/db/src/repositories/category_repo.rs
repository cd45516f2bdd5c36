//! Repository for the `categories` reference table.

use sqlx::PgPool;

use crate::models::taxonomy::Category;

const COLUMNS: &str = "id, name, created_at";

pub struct CategoryRepo;

impl CategoryRepo {
    /// Return the category named `name`, creating it if needed.
    pub async fn find_or_create(pool: &PgPool, name: &str) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = categories.name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }
}
