//! Repository for the `skills` reference table.

use sqlx::PgPool;

use crate::models::taxonomy::Skill;

const COLUMNS: &str = "id, name, created_at";

pub struct SkillRepo;

impl SkillRepo {
    /// Return the skill named `name`, creating it if needed.
    ///
    /// Uses a no-op `DO UPDATE` so `RETURNING` always produces a row.
    pub async fn find_or_create(pool: &PgPool, name: &str) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = skills.name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }
}
