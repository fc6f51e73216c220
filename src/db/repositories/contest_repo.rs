//! Contest repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Contest};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Create a new contest
    pub async fn create(pool: &PgPool, name: &str) -> AppResult<Contest> {
        let contest = sqlx::query_as::<_, Contest>(
            r#"INSERT INTO contests (name) VALUES ($1) RETURNING *"#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(contest)
    }

    /// Find contest by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Contest>> {
        let contest = sqlx::query_as::<_, Contest>(r#"SELECT * FROM contests WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(contest)
    }

    /// Check whether a contest exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM contests WHERE id = $1)"#)
            .bind(id)
            .fetch_one(pool)
            .await?;

        Ok(exists)
    }

    /// Count total contests
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM contests"#)
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
