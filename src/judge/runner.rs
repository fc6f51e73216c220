//! Submission runner
//!
//! Drives one submission through its problem's test cases in order and walks
//! the verdict state machine:
//!
//! ```text
//! pending -> running -> { accepted | wrong_answer | compilation_error | timed_out | error }
//! ```
//!
//! Every transition is persisted immediately, so concurrent readers observe
//! `running` before a terminal status. The first failing test case ends the
//! run; later test cases are never executed.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    constants::MAX_RESULT_MESSAGE_LENGTH,
    error::AppResult,
    models::{Submission, SubmissionStatus},
};

use super::{
    comparator,
    execution::{CodeExecutor, ExecutionOutcome},
    store::VerdictStore,
};

/// Runs a single submission to a terminal verdict
pub struct SubmissionRunner {
    store: Arc<dyn VerdictStore>,
    executor: Arc<dyn CodeExecutor>,
}

impl SubmissionRunner {
    pub fn new(store: Arc<dyn VerdictStore>, executor: Arc<dyn CodeExecutor>) -> Self {
        Self { store, executor }
    }

    /// Judge one submission to completion.
    ///
    /// A missing submission is a no-op: dispatch already validated existence.
    /// Judging failures land in the submission's status and result message;
    /// an `Err` here means only that persistence itself failed.
    pub async fn judge(&self, submission_id: Uuid) -> AppResult<()> {
        let Some(mut submission) = self.store.find_submission(submission_id).await? else {
            return Ok(());
        };

        tracing::info!(%submission_id, "judging submission");

        submission.status = SubmissionStatus::Running.as_str().to_string();
        self.store.save_submission(&submission).await?;

        let Some(problem) = self.store.find_problem(submission.problem_id).await? else {
            return self
                .finish(
                    &mut submission,
                    SubmissionStatus::Error,
                    "Problem not found".to_string(),
                )
                .await;
        };

        let mut result_log = String::new();

        for (index, test_case) in problem.test_cases.iter().enumerate() {
            let number = index + 1;

            let outcome = self
                .executor
                .execute(
                    &submission.source_code,
                    submission.language.as_deref(),
                    &test_case.input,
                )
                .await;

            match outcome {
                ExecutionOutcome::Timeout => {
                    return self
                        .finish(
                            &mut submission,
                            SubmissionStatus::TimedOut,
                            "Timed out during execution".to_string(),
                        )
                        .await;
                }
                ExecutionOutcome::Failure(detail) => {
                    return self
                        .finish(
                            &mut submission,
                            SubmissionStatus::Error,
                            format!("Execution error: {detail}"),
                        )
                        .await;
                }
                ExecutionOutcome::Success(result) => {
                    let output = result.outcome_text();
                    result_log.push_str(&format!("TC #{number} output:\n{output}\n"));

                    if !comparator::outputs_match(Some(&output), Some(&test_case.expected_output))
                    {
                        return self
                            .finish(
                                &mut submission,
                                SubmissionStatus::WrongAnswer,
                                format!("Wrong answer on testcase {number}\n{result_log}"),
                            )
                            .await;
                    }
                }
            }
        }

        self.finish(
            &mut submission,
            SubmissionStatus::Accepted,
            format!("All tests passed\n{result_log}"),
        )
        .await
    }

    /// Record a terminal verdict: status, clamped message, completion time.
    async fn finish(
        &self,
        submission: &mut Submission,
        status: SubmissionStatus,
        message: String,
    ) -> AppResult<()> {
        tracing::info!(submission_id = %submission.id, status = %status, "judging finished");

        submission.status = status.as_str().to_string();
        submission.result_message = Some(clamp_message(message));
        submission.finished_at = Some(Utc::now());
        self.store.save_submission(submission).await
    }
}

/// Bound the persisted result message, respecting char boundaries
fn clamp_message(message: String) -> String {
    if message.len() <= MAX_RESULT_MESSAGE_LENGTH {
        return message;
    }
    let mut end = MAX_RESULT_MESSAGE_LENGTH;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    message[..end].to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use crate::judge::execution::{ExecutionOutcome, ExecutionResult};
    use crate::judge::testing::{MemoryVerdictStore, ScriptedExecutor, problem_fixture, submission_fixture};
    use crate::models::SubmissionStatus;

    use super::*;

    fn stdout(text: &str) -> ExecutionOutcome {
        ExecutionOutcome::Success(ExecutionResult {
            stdout: text.to_string(),
            stderr: String::new(),
            compile_output: String::new(),
        })
    }

    fn runner_with(
        store: Arc<MemoryVerdictStore>,
        executor: Arc<ScriptedExecutor>,
    ) -> SubmissionRunner {
        SubmissionRunner::new(store, executor)
    }

    #[tokio::test]
    async fn all_passing_test_cases_yield_accepted() {
        let store = Arc::new(MemoryVerdictStore::new());
        let problem = problem_fixture(&[("1 2", "3"), ("10 20", "30")]);
        let submission = submission_fixture(&problem);
        let id = submission.id;
        store.insert_problem(problem);
        store.insert_submission(submission);

        let executor = Arc::new(ScriptedExecutor::new(vec![stdout("3\n"), stdout("30\n")]));
        runner_with(store.clone(), executor.clone())
            .judge(id)
            .await
            .unwrap();

        let judged = store.submission(id).unwrap();
        assert_eq!(judged.status, SubmissionStatus::Accepted.as_str());
        assert_eq!(executor.call_count(), 2);
        assert!(judged.finished_at.is_some());
        let message = judged.result_message.unwrap();
        assert!(message.starts_with("All tests passed"));
        assert!(message.contains("TC #1 output:"));
        assert!(message.contains("TC #2 output:"));
    }

    #[tokio::test]
    async fn first_mismatch_short_circuits_with_wrong_answer() {
        let store = Arc::new(MemoryVerdictStore::new());
        let problem = problem_fixture(&[("1 2", "3"), ("10 20", "30")]);
        let submission = submission_fixture(&problem);
        let id = submission.id;
        store.insert_problem(problem);
        store.insert_submission(submission);

        // Always prints 0: wrong on the very first test case
        let executor = Arc::new(ScriptedExecutor::new(vec![stdout("0"), stdout("0")]));
        runner_with(store.clone(), executor.clone())
            .judge(id)
            .await
            .unwrap();

        let judged = store.submission(id).unwrap();
        assert_eq!(judged.status, SubmissionStatus::WrongAnswer.as_str());
        assert_eq!(executor.call_count(), 1);
        assert!(judged.finished_at.is_some());
        assert!(
            judged
                .result_message
                .unwrap()
                .starts_with("Wrong answer on testcase 1")
        );
    }

    #[tokio::test]
    async fn mismatch_on_second_case_runs_exactly_two_calls() {
        let store = Arc::new(MemoryVerdictStore::new());
        let problem = problem_fixture(&[("1 2", "3"), ("10 20", "30"), ("5 5", "10")]);
        let submission = submission_fixture(&problem);
        let id = submission.id;
        store.insert_problem(problem);
        store.insert_submission(submission);

        let executor = Arc::new(ScriptedExecutor::new(vec![
            stdout("3"),
            stdout("29"),
            stdout("10"),
        ]));
        runner_with(store.clone(), executor.clone())
            .judge(id)
            .await
            .unwrap();

        let judged = store.submission(id).unwrap();
        assert_eq!(judged.status, SubmissionStatus::WrongAnswer.as_str());
        assert_eq!(executor.call_count(), 2);
        assert!(
            judged
                .result_message
                .unwrap()
                .starts_with("Wrong answer on testcase 2")
        );
    }

    #[tokio::test]
    async fn timeout_stops_the_run_without_further_calls() {
        let store = Arc::new(MemoryVerdictStore::new());
        let problem = problem_fixture(&[("1 2", "3"), ("10 20", "30")]);
        let submission = submission_fixture(&problem);
        let id = submission.id;
        store.insert_problem(problem);
        store.insert_submission(submission);

        let executor = Arc::new(ScriptedExecutor::new(vec![
            ExecutionOutcome::Timeout,
            stdout("30"),
        ]));
        runner_with(store.clone(), executor.clone())
            .judge(id)
            .await
            .unwrap();

        let judged = store.submission(id).unwrap();
        assert_eq!(judged.status, SubmissionStatus::TimedOut.as_str());
        assert_eq!(executor.call_count(), 1);
        assert!(judged.finished_at.is_some());
        assert_eq!(
            judged.result_message.as_deref(),
            Some("Timed out during execution")
        );
    }

    #[tokio::test]
    async fn execution_failure_yields_error_with_detail() {
        let store = Arc::new(MemoryVerdictStore::new());
        let problem = problem_fixture(&[("1 2", "3")]);
        let submission = submission_fixture(&problem);
        let id = submission.id;
        store.insert_problem(problem);
        store.insert_submission(submission);

        let executor = Arc::new(ScriptedExecutor::new(vec![ExecutionOutcome::Failure(
            "connection refused".to_string(),
        )]));
        runner_with(store.clone(), executor)
            .judge(id)
            .await
            .unwrap();

        let judged = store.submission(id).unwrap();
        assert_eq!(judged.status, SubmissionStatus::Error.as_str());
        assert_eq!(
            judged.result_message.as_deref(),
            Some("Execution error: connection refused")
        );
        assert!(judged.finished_at.is_some());
    }

    #[tokio::test]
    async fn missing_problem_yields_error_verdict() {
        let store = Arc::new(MemoryVerdictStore::new());
        let problem = problem_fixture(&[("1 2", "3")]);
        let submission = submission_fixture(&problem);
        let id = submission.id;
        // problem intentionally not inserted
        store.insert_submission(submission);

        let executor = Arc::new(ScriptedExecutor::new(vec![]));
        runner_with(store.clone(), executor.clone())
            .judge(id)
            .await
            .unwrap();

        let judged = store.submission(id).unwrap();
        assert_eq!(judged.status, SubmissionStatus::Error.as_str());
        assert_eq!(judged.result_message.as_deref(), Some("Problem not found"));
        assert_eq!(executor.call_count(), 0);
        assert!(judged.finished_at.is_some());
    }

    #[tokio::test]
    async fn missing_submission_is_a_no_op() {
        let store = Arc::new(MemoryVerdictStore::new());
        let executor = Arc::new(ScriptedExecutor::new(vec![]));
        runner_with(store.clone(), executor.clone())
            .judge(Uuid::new_v4())
            .await
            .unwrap();

        assert!(store.saved_statuses().is_empty());
        assert_eq!(executor.call_count(), 0);
    }

    #[tokio::test]
    async fn status_passes_through_running_before_terminal() {
        let store = Arc::new(MemoryVerdictStore::new());
        let problem = problem_fixture(&[("1 2", "3")]);
        let submission = submission_fixture(&problem);
        let id = submission.id;
        store.insert_problem(problem);
        store.insert_submission(submission);

        let executor = Arc::new(ScriptedExecutor::new(vec![stdout("3")]));
        runner_with(store.clone(), executor)
            .judge(id)
            .await
            .unwrap();

        assert_eq!(
            store.saved_statuses(),
            vec!["running".to_string(), "accepted".to_string()]
        );
    }

    #[tokio::test]
    async fn finished_at_is_unset_while_running() {
        let store = Arc::new(MemoryVerdictStore::new());
        let problem = problem_fixture(&[("1 2", "3")]);
        let submission = submission_fixture(&problem);
        let id = submission.id;
        store.insert_problem(problem);
        store.insert_submission(submission);

        let executor = Arc::new(ScriptedExecutor::new(vec![stdout("3")]));
        runner_with(store.clone(), executor)
            .judge(id)
            .await
            .unwrap();

        // First save was the running transition, without a completion time
        let snapshots = store.saved_snapshots();
        assert_eq!(snapshots[0].status, "running");
        assert!(snapshots[0].finished_at.is_none());
        assert_eq!(snapshots[1].status, "accepted");
        assert!(snapshots[1].finished_at.is_some());
    }

    #[test]
    fn long_messages_are_clamped() {
        let clamped = clamp_message("x".repeat(MAX_RESULT_MESSAGE_LENGTH + 100));
        assert_eq!(clamped.len(), MAX_RESULT_MESSAGE_LENGTH);
    }
}
