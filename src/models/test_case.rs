//! Test case model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single test case: an input payload and the output it must produce.
///
/// Value type with no identity of its own; test cases are owned by their
/// problem and evaluated in stored order.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}
