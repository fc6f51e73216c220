//! Sample data seeding
//!
//! Inserts a sample contest with two problems when the database is empty, so
//! a fresh deployment can accept submissions immediately.

use sqlx::PgPool;

use crate::{
    db::repositories::{ContestRepository, ProblemRepository},
    error::AppResult,
};

/// Seed the database with a sample contest if no contest exists yet
pub async fn seed_sample_data(pool: &PgPool) -> AppResult<()> {
    if ContestRepository::count(pool).await? > 0 {
        return Ok(());
    }

    let contest = ContestRepository::create(pool, "Sample Contest").await?;

    let sum_two = ProblemRepository::create(
        pool,
        &contest.id,
        "Sum Two",
        "Read two integers and print their sum",
        0,
    )
    .await?;
    ProblemRepository::add_test_case(pool, &sum_two.id, 0, "1 2", "3").await?;
    ProblemRepository::add_test_case(pool, &sum_two.id, 1, "10 20", "30").await?;

    let echo = ProblemRepository::create(pool, &contest.id, "Echo", "Echo the input line", 1).await?;
    ProblemRepository::add_test_case(pool, &echo.id, 0, "hello", "hello").await?;

    tracing::info!(contest_id = %contest.id, "Inserted sample contest");

    Ok(())
}
