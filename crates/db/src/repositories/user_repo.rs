//! Repository for the `users` table.

use hirelink_core::onboarding::MissingStep;
use hirelink_core::types::UserId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, phone_number, city, onboarding_completed, \
                       last_onboarding_step, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert the user row created at first sign-in, returning it.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, email, phone_number)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.id)
            .bind(&input.email)
            .bind(&input.phone_number)
            .fetch_one(pool)
            .await
    }

    /// Find a user by auth id.
    pub async fn find_by_id(pool: &PgPool, id: UserId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Store the city picked on the city selection screen.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_city(
        pool: &PgPool,
        id: UserId,
        city: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("UPDATE users SET city = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(city)
            .fetch_optional(pool)
            .await
    }

    /// Record the onboarding step the client last showed.
    ///
    /// Returns `true` if the row was updated.
    pub async fn record_onboarding_step(
        pool: &PgPool,
        id: UserId,
        step: MissingStep,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET last_onboarding_step = $2 WHERE id = $1")
            .bind(id)
            .bind(step.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set `onboarding_completed`, which makes the resolver report the user
    /// as fully onboarded without checking profiles.
    ///
    /// Returns `true` if the flag changed.
    pub async fn mark_onboarding_completed(pool: &PgPool, id: UserId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET
                onboarding_completed = TRUE,
                last_onboarding_step = NULL
             WHERE id = $1 AND onboarding_completed = FALSE",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
