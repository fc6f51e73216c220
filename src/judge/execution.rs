//! Remote execution service client
//!
//! Wraps a single call to the sandboxed code-execution service: submit source
//! plus stdin, get back stdout/stderr/compile diagnostics. Payloads travel
//! base64-encoded in both directions. Each call carries a hard wall-clock
//! deadline; a deadline hit is reported as [`ExecutionOutcome::Timeout`],
//! every other transport or protocol problem as
//! [`ExecutionOutcome::Failure`].

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::{
    config::JudgeConfig,
    constants::{NO_OUTPUT, languages},
    error::AppResult,
};

/// Decoded response for one (submission, test case) execution.
///
/// Transient: inspected for the verdict decision and discarded.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub compile_output: String,
}

impl ExecutionResult {
    /// Fold the result into the single output text used for comparison.
    ///
    /// Compile diagnostics win over stderr, stderr wins over stdout. The
    /// "No output" sentinel applies only when stdout is empty before
    /// trimming; whitespace-only stdout trims to an empty string.
    pub fn outcome_text(&self) -> String {
        if !self.compile_output.is_empty() {
            return format!("Compilation Error:\n{}", self.compile_output);
        }
        if !self.stderr.is_empty() {
            return format!("Runtime Error:\n{}", self.stderr);
        }
        if self.stdout.is_empty() {
            NO_OUTPUT.to_string()
        } else {
            self.stdout.trim().to_string()
        }
    }
}

/// Outcome of one execution-service call
#[derive(Debug, Clone)]
pub enum ExecutionOutcome {
    /// The service produced a result (which may itself describe a failing run)
    Success(ExecutionResult),
    /// The call exceeded its wall-clock deadline
    Timeout,
    /// Transport or protocol error talking to the service
    Failure(String),
}

/// Boundary for executing code remotely, so the runner can be driven by a
/// scripted executor in tests.
#[async_trait]
pub trait CodeExecutor: Send + Sync {
    async fn execute(
        &self,
        source_code: &str,
        language: Option<&str>,
        stdin: &str,
    ) -> ExecutionOutcome;
}

/// Map a declared language name to the execution service's language ID.
///
/// Case-insensitive; unrecognized or absent languages fall back to the
/// default identifier. This is the single canonical table.
pub fn language_id(language: Option<&str>) -> u32 {
    let Some(language) = language else {
        return languages::DEFAULT_ID;
    };
    match language.to_ascii_lowercase().as_str() {
        "java" => languages::JAVA,
        "python" | "python3" => languages::PYTHON,
        "cpp" | "c++" => languages::CPP,
        "c" => languages::C,
        _ => languages::DEFAULT_ID,
    }
}

#[derive(Debug, Serialize)]
struct ExecutionRequest {
    source_code: String,
    language_id: u32,
    stdin: String,
}

#[derive(Debug, Deserialize)]
struct ExecutionResponse {
    stdout: Option<String>,
    stderr: Option<String>,
    compile_output: Option<String>,
}

/// HTTP client for the remote execution service
pub struct ExecutionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    deadline: Duration,
}

impl ExecutionClient {
    /// Create a client from the judging configuration
    pub fn new(config: &JudgeConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| crate::error::AppError::Internal(e.into()))?;

        Ok(Self {
            http,
            base_url: config.execution_base_url.trim_end_matches('/').to_string(),
            api_key: config.execution_api_key.clone(),
            deadline: config.execution_deadline(),
        })
    }

    /// Decode a base64 response field, tolerating payloads that are not
    /// validly encoded by returning them as-is.
    fn decode_field(field: Option<String>) -> String {
        let Some(encoded) = field else {
            return String::new();
        };
        if encoded.is_empty() {
            return String::new();
        }
        match base64::engine::general_purpose::STANDARD.decode(encoded.trim()) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(_) => encoded,
        }
    }
}

#[async_trait]
impl CodeExecutor for ExecutionClient {
    async fn execute(
        &self,
        source_code: &str,
        language: Option<&str>,
        stdin: &str,
    ) -> ExecutionOutcome {
        let engine = &base64::engine::general_purpose::STANDARD;
        let request = ExecutionRequest {
            source_code: engine.encode(source_code),
            language_id: language_id(language),
            stdin: engine.encode(stdin),
        };

        let url = format!("{}/submissions?base64_encoded=true&wait=true", self.base_url);
        let mut builder = self
            .http
            .post(&url)
            .timeout(self.deadline)
            .json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.header("X-Auth-Token", key);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return ExecutionOutcome::Timeout,
            Err(e) => return ExecutionOutcome::Failure(e.to_string()),
        };

        if !response.status().is_success() {
            return ExecutionOutcome::Failure(format!(
                "execution service returned {}",
                response.status()
            ));
        }

        // The request deadline also covers reading the body, so a slow body
        // still surfaces as a timeout. An empty or non-JSON body is an error.
        let body: ExecutionResponse = match response.json().await {
            Ok(body) => body,
            Err(e) if e.is_timeout() => return ExecutionOutcome::Timeout,
            Err(e) => {
                return ExecutionOutcome::Failure(format!(
                    "malformed response from execution service: {e}"
                ));
            }
        };

        ExecutionOutcome::Success(ExecutionResult {
            stdout: Self::decode_field(body.stdout),
            stderr: Self::decode_field(body.stderr),
            compile_output: Self::decode_field(body.compile_output),
        })
    }
}
