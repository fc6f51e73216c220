//! Problem repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Problem, TestCase},
};

/// Repository for problem database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Create a new problem
    pub async fn create(
        pool: &PgPool,
        contest_id: &Uuid,
        title: &str,
        statement: &str,
        position: i32,
    ) -> AppResult<Problem> {
        let problem = sqlx::query_as::<_, Problem>(
            r#"
            INSERT INTO problems (contest_id, title, statement, position)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(contest_id)
        .bind(title)
        .bind(statement)
        .bind(position)
        .fetch_one(pool)
        .await?;

        Ok(problem)
    }

    /// Find problem by ID, without its test cases
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Problem>> {
        let problem = sqlx::query_as::<_, Problem>(r#"SELECT * FROM problems WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(problem)
    }

    /// Check whether a problem exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(r#"SELECT EXISTS(SELECT 1 FROM problems WHERE id = $1)"#)
            .bind(id)
            .fetch_one(pool)
            .await?;

        Ok(exists)
    }

    /// List a contest's problems in display order
    pub async fn list_by_contest(pool: &PgPool, contest_id: &Uuid) -> AppResult<Vec<Problem>> {
        let problems = sqlx::query_as::<_, Problem>(
            r#"SELECT * FROM problems WHERE contest_id = $1 ORDER BY position"#,
        )
        .bind(contest_id)
        .fetch_all(pool)
        .await?;

        Ok(problems)
    }

    /// Get a problem's test cases in evaluation order
    pub async fn get_test_cases(pool: &PgPool, problem_id: &Uuid) -> AppResult<Vec<TestCase>> {
        let test_cases = sqlx::query_as::<_, TestCase>(
            r#"SELECT input, expected_output FROM test_cases WHERE problem_id = $1 ORDER BY position"#,
        )
        .bind(problem_id)
        .fetch_all(pool)
        .await?;

        Ok(test_cases)
    }

    /// Insert a test case at the given position
    pub async fn add_test_case(
        pool: &PgPool,
        problem_id: &Uuid,
        position: i32,
        input: &str,
        expected_output: &str,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO test_cases (problem_id, position, input, expected_output)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(problem_id)
        .bind(position)
        .bind(input)
        .bind(expected_output)
        .execute(pool)
        .await?;

        Ok(())
    }
}
