//! Repository for the `seeker_profiles` table and its skill/category
//! join tables.

use hirelink_core::types::{ProfileId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::seeker_profile::{CreateSeekerProfile, SeekerProfile};

/// Column list for `seeker_profiles` queries.
const COLUMNS: &str = "id, user_id, experience_level, created_at, updated_at";

/// Provides CRUD operations for seeker profiles.
pub struct SeekerProfileRepo;

impl SeekerProfileRepo {
    /// Create the seeker profile for a user.
    ///
    /// Fails with a unique violation (`uq_seeker_profiles_user_id`) if the
    /// user already has one.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSeekerProfile,
    ) -> Result<SeekerProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO seeker_profiles (user_id, experience_level)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeekerProfile>(&query)
            .bind(input.user_id)
            .bind(&input.experience_level)
            .fetch_one(pool)
            .await
    }

    /// Find the seeker profile owned by a user.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: UserId,
    ) -> Result<Option<SeekerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM seeker_profiles WHERE user_id = $1");
        sqlx::query_as::<_, SeekerProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the experience level.
    pub async fn set_experience_level(
        pool: &PgPool,
        id: ProfileId,
        experience_level: Option<&str>,
    ) -> Result<Option<SeekerProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE seeker_profiles SET experience_level = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SeekerProfile>(&query)
            .bind(id)
            .bind(experience_level)
            .fetch_optional(pool)
            .await
    }

    /// Attach a skill. Returns `false` if it was already attached.
    pub async fn add_skill(
        pool: &PgPool,
        id: ProfileId,
        skill_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO seeker_profile_skills (seeker_profile_id, skill_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(id)
        .bind(skill_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Detach a skill. Returns `true` if a row was removed.
    pub async fn remove_skill(
        pool: &PgPool,
        id: ProfileId,
        skill_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM seeker_profile_skills WHERE seeker_profile_id = $1 AND skill_id = $2",
        )
        .bind(id)
        .bind(skill_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Attach a category. Returns `false` if it was already attached.
    pub async fn add_category(
        pool: &PgPool,
        id: ProfileId,
        category_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO seeker_profile_categories (seeker_profile_id, category_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(id)
        .bind(category_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of skills attached to a profile.
    pub async fn count_skills(pool: &PgPool, id: ProfileId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM seeker_profile_skills WHERE seeker_profile_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Number of categories attached to a profile.
    pub async fn count_categories(pool: &PgPool, id: ProfileId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM seeker_profile_categories WHERE seeker_profile_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
