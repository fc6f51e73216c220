//! Judge scheduler
//!
//! Decouples submission intake from judging: `enqueue` hands a submission ID
//! to a fixed-size worker pool and returns immediately. Each worker takes one
//! ID at a time and runs that submission's full test-case loop to completion
//! before taking the next, so at most `workers` submissions are judged
//! concurrently. There is no priority, no cancellation, and no retry.

use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

use super::runner::SubmissionRunner;

/// Fixed-size worker pool over an in-process submission queue
pub struct JudgeScheduler {
    queue: mpsc::UnboundedSender<Uuid>,
}

impl JudgeScheduler {
    /// Spawn `workers` worker tasks and return the scheduler handle.
    ///
    /// The workers live as long as the scheduler: dropping it closes the
    /// queue and lets them drain and exit.
    pub fn start(runner: Arc<SubmissionRunner>, workers: usize) -> Self {
        let (queue, receiver) = mpsc::unbounded_channel::<Uuid>();
        let receiver = Arc::new(Mutex::new(receiver));

        for worker in 0..workers {
            let receiver = Arc::clone(&receiver);
            let runner = Arc::clone(&runner);

            tokio::spawn(async move {
                loop {
                    // Guard dropped at the end of this statement; judging
                    // itself never holds the queue lock.
                    let next = receiver.lock().await.recv().await;
                    let Some(submission_id) = next else {
                        break;
                    };

                    tracing::debug!(%submission_id, worker, "worker picked up submission");

                    // A failed judging run is contained to its submission
                    if let Err(e) = runner.judge(submission_id).await {
                        tracing::error!(%submission_id, "failed to judge submission: {e}");
                    }
                }
            });
        }

        Self { queue }
    }

    /// Queue a submission for judging without waiting for the result
    pub fn enqueue(&self, submission_id: Uuid) -> AppResult<()> {
        self.queue
            .send(submission_id)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("judge queue is closed")))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::judge::execution::{CodeExecutor, ExecutionOutcome, ExecutionResult};
    use crate::judge::testing::{MemoryVerdictStore, problem_fixture, submission_fixture};
    use crate::models::SubmissionStatus;

    use super::*;

    /// Executor that tracks how many calls are in flight at once
    struct CountingExecutor {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    impl CountingExecutor {
        fn new() -> Self {
            Self {
                in_flight: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }

        fn peak(&self) -> usize {
            self.peak.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CodeExecutor for CountingExecutor {
        async fn execute(
            &self,
            _source_code: &str,
            _language: Option<&str>,
            _stdin: &str,
        ) -> ExecutionOutcome {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);

            tokio::time::sleep(Duration::from_millis(25)).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            ExecutionOutcome::Success(ExecutionResult {
                stdout: "3".to_string(),
                stderr: String::new(),
                compile_output: String::new(),
            })
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn pool_bounds_concurrency_and_drains_the_queue() {
        let store = Arc::new(MemoryVerdictStore::new());
        let executor = Arc::new(CountingExecutor::new());

        let problem = problem_fixture(&[("1 2", "3")]);
        let mut ids = Vec::new();
        for _ in 0..10 {
            let submission = submission_fixture(&problem);
            ids.push(submission.id);
            store.insert_submission(submission);
        }
        store.insert_problem(problem);

        let runner = Arc::new(SubmissionRunner::new(store.clone(), executor.clone()));
        let scheduler = JudgeScheduler::start(runner, 4);

        for id in &ids {
            scheduler.enqueue(*id).unwrap();
        }

        // Wait for every submission to reach a terminal state
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            let all_terminal = ids.iter().all(|id| {
                store
                    .submission(*id)
                    .and_then(|s| SubmissionStatus::parse(&s.status))
                    .is_some_and(|s| s.is_terminal())
            });
            if all_terminal {
                break;
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "submissions did not all reach a terminal state"
            );
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        assert!(
            executor.peak() <= 4,
            "observed {} concurrent executions with a pool of 4",
            executor.peak()
        );
        for id in &ids {
            assert_eq!(
                store.submission(*id).unwrap().status,
                SubmissionStatus::Accepted.as_str()
            );
        }
    }

    #[tokio::test]
    async fn enqueue_returns_before_judging_completes() {
        let store = Arc::new(MemoryVerdictStore::new());
        let executor = Arc::new(CountingExecutor::new());

        let problem = problem_fixture(&[("1 2", "3")]);
        let submission = submission_fixture(&problem);
        let id = submission.id;
        store.insert_problem(problem);
        store.insert_submission(submission);

        let runner = Arc::new(SubmissionRunner::new(store.clone(), executor));
        let scheduler = JudgeScheduler::start(runner, 4);

        scheduler.enqueue(id).unwrap();

        // Workers have not run yet on this single-threaded test runtime, so
        // the submission cannot have reached a terminal state.
        let status = store.submission(id).unwrap().status;
        let parsed = SubmissionStatus::parse(&status).unwrap();
        assert!(!parsed.is_terminal());

        // and terminal soon after
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            let status = store.submission(id).unwrap().status;
            if SubmissionStatus::parse(&status).is_some_and(|s| s.is_terminal()) {
                break;
            }
            assert!(tokio::time::Instant::now() < deadline);
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}
