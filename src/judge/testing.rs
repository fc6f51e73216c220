//! In-memory collaborators for judging tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Problem, Submission, SubmissionStatus, TestCase};

use super::execution::{CodeExecutor, ExecutionOutcome};
use super::store::VerdictStore;

/// In-memory verdict store recording every save
pub struct MemoryVerdictStore {
    submissions: Mutex<HashMap<Uuid, Submission>>,
    problems: Mutex<HashMap<Uuid, Problem>>,
    saves: Mutex<Vec<Submission>>,
}

impl MemoryVerdictStore {
    pub fn new() -> Self {
        Self {
            submissions: Mutex::new(HashMap::new()),
            problems: Mutex::new(HashMap::new()),
            saves: Mutex::new(Vec::new()),
        }
    }

    pub fn insert_submission(&self, submission: Submission) {
        self.submissions
            .lock()
            .unwrap()
            .insert(submission.id, submission);
    }

    pub fn insert_problem(&self, problem: Problem) {
        self.problems.lock().unwrap().insert(problem.id, problem);
    }

    pub fn submission(&self, id: Uuid) -> Option<Submission> {
        self.submissions.lock().unwrap().get(&id).cloned()
    }

    /// Status value of each save, in order
    pub fn saved_statuses(&self) -> Vec<String> {
        self.saves
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.status.clone())
            .collect()
    }

    /// Full submission snapshot of each save, in order
    pub fn saved_snapshots(&self) -> Vec<Submission> {
        self.saves.lock().unwrap().clone()
    }
}

#[async_trait]
impl VerdictStore for MemoryVerdictStore {
    async fn find_submission(&self, id: Uuid) -> AppResult<Option<Submission>> {
        Ok(self.submissions.lock().unwrap().get(&id).cloned())
    }

    async fn save_submission(&self, submission: &Submission) -> AppResult<()> {
        self.saves.lock().unwrap().push(submission.clone());
        self.submissions
            .lock()
            .unwrap()
            .insert(submission.id, submission.clone());
        Ok(())
    }

    async fn find_problem(&self, id: Uuid) -> AppResult<Option<Problem>> {
        Ok(self.problems.lock().unwrap().get(&id).cloned())
    }
}

/// Executor that replays a fixed sequence of outcomes and counts calls
pub struct ScriptedExecutor {
    script: Mutex<VecDeque<ExecutionOutcome>>,
    calls: AtomicUsize,
}

impl ScriptedExecutor {
    pub fn new(outcomes: Vec<ExecutionOutcome>) -> Self {
        Self {
            script: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeExecutor for ScriptedExecutor {
    async fn execute(
        &self,
        _source_code: &str,
        _language: Option<&str>,
        _stdin: &str,
    ) -> ExecutionOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ExecutionOutcome::Failure("script exhausted".to_string()))
    }
}

/// Build a problem with the given (input, expected_output) test cases
pub fn problem_fixture(cases: &[(&str, &str)]) -> Problem {
    Problem {
        id: Uuid::new_v4(),
        contest_id: Uuid::new_v4(),
        title: "Sum Two".to_string(),
        statement: "Read two integers and print their sum".to_string(),
        position: 0,
        created_at: Utc::now(),
        test_cases: cases
            .iter()
            .map(|(input, expected_output)| TestCase {
                input: input.to_string(),
                expected_output: expected_output.to_string(),
            })
            .collect(),
    }
}

/// Build a pending submission for the given problem
pub fn submission_fixture(problem: &Problem) -> Submission {
    Submission {
        id: Uuid::new_v4(),
        contest_id: problem.contest_id,
        problem_id: problem.id,
        username: "alice".to_string(),
        language: Some("java".to_string()),
        source_code: "class Main {}".to_string(),
        status: SubmissionStatus::Pending.as_str().to_string(),
        result_message: None,
        created_at: Utc::now(),
        finished_at: None,
    }
}
