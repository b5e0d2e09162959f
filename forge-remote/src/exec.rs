//! Remote code execution client
//!
//! This module submits source plus stdin to a Judge0-compatible execution
//! service, receives an opaque submission token, and polls the token at a
//! fixed interval until the status leaves the in-progress set or the
//! attempt budget runs out. Running out of budget is not an error: the
//! last polled payload is returned as-is.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{truncate, Error, Result};

pub const DEFAULT_EXEC_ENDPOINT: &str = "https://judge0-ce.p.rapidapi.com";

/// C++ (GCC 9.2.0) in the Judge0 language table.
const LANGUAGE_ID_CPP: i64 = 54;

/// Judge0 status id for "Accepted".
const STATUS_ACCEPTED: i64 = 3;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One execution invocation: the source to run and its stdin.
#[derive(Debug, Clone)]
pub struct ExecutionRequest {
    pub source: String,
    pub stdin: String,
}

impl ExecutionRequest {
    pub fn new(source: impl Into<String>, stdin: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            stdin: stdin.into(),
        }
    }

    /// Reject blank source before any network call is made.
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(Error::validation(
                "no code to run: generate or load some code first",
            ));
        }
        Ok(())
    }
}

/// Terminal (or best-available) result of one execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// True only for an "Accepted" run
    pub succeeded: bool,
    pub stdout: String,
    pub stderr: String,
    /// The service's status description, verbatim
    pub status: String,
    /// Wall time in seconds, as reported (string-typed on the wire)
    pub time_secs: Option<String>,
    /// Peak memory in KiB, as reported
    pub memory_kib: Option<u64>,
}

/// Poll loop parameters. A policy object rather than constants so tests
/// can shrink the interval and budget.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
    /// Status ids that keep the loop polling ("In Queue", "Processing")
    pub in_progress_ids: Vec<i64>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            interval: Duration::from_secs(1),
            in_progress_ids: vec![1, 2],
        }
    }
}

/// Resource caps attached to every submission.
#[derive(Debug, Clone, Copy)]
pub struct ResourceLimits {
    pub cpu_time_limit_secs: f64,
    pub memory_limit_kib: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            cpu_time_limit_secs: 2.0,
            memory_limit_kib: 128_000,
        }
    }
}

/// Code execution capability, injectable so callers can test against
/// fakes instead of a live service.
#[async_trait]
pub trait CodeExecutionService: Send + Sync {
    /// Run `request.source` with `request.stdin`, returning the terminal
    /// result or the best-available one if the poll budget runs out.
    async fn run(&self, request: &ExecutionRequest) -> Result<ExecutionOutcome>;
}

#[derive(Debug, Serialize)]
struct SubmissionPayload<'a> {
    source_code: &'a str,
    language_id: i64,
    stdin: &'a str,
    cpu_time_limit: f64,
    memory_limit: u64,
}

#[derive(Debug, Deserialize)]
struct SubmissionHandle {
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubmissionStatus {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct SubmissionResult {
    stdout: Option<String>,
    stderr: Option<String>,
    status: SubmissionStatus,
    time: Option<String>,
    memory: Option<u64>,
}

impl SubmissionResult {
    fn into_outcome(self) -> ExecutionOutcome {
        ExecutionOutcome {
            succeeded: self.status.id == STATUS_ACCEPTED,
            stdout: self.stdout.unwrap_or_default(),
            stderr: self.stderr.unwrap_or_default(),
            status: self.status.description,
            time_secs: self.time,
            memory_kib: self.memory,
        }
    }
}

/// Live client against a Judge0-compatible execution endpoint.
pub struct Judge0Client {
    client: Client,
    endpoint: String,
    api_host: Option<String>,
    api_key: String,
    limits: ResourceLimits,
    policy: PollPolicy,
}

impl Judge0Client {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        // The RapidAPI gateway routes on this header; it always matches
        // the endpoint host.
        let api_host = Url::parse(&endpoint)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string));

        Ok(Self {
            client,
            endpoint,
            api_host,
            api_key: api_key.into(),
            limits: ResourceLimits::default(),
            policy: PollPolicy::default(),
        })
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_policy(mut self, policy: PollPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn authed(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request.header("X-RapidAPI-Key", &self.api_key);
        match &self.api_host {
            Some(host) => request.header("X-RapidAPI-Host", host),
            None => request,
        }
    }

    async fn submit(&self, request: &ExecutionRequest) -> Result<String> {
        let url = format!("{}/submissions", self.endpoint.trim_end_matches('/'));
        let payload = SubmissionPayload {
            source_code: &request.source,
            language_id: LANGUAGE_ID_CPP,
            stdin: &request.stdin,
            cpu_time_limit: self.limits.cpu_time_limit_secs,
            memory_limit: self.limits.memory_limit_kib,
        };

        let response = self.authed(self.client.post(&url)).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote(format!(
                "submission rejected with {}: {}",
                status,
                truncate(&body, 320)
            )));
        }

        let handle: SubmissionHandle = response
            .json()
            .await
            .map_err(|e| Error::remote(format!("invalid submission response: {e}")))?;

        handle
            .token
            .ok_or_else(|| Error::remote("submission response carried no token"))
    }

    async fn poll(&self, token: &str) -> Result<SubmissionResult> {
        let url = format!(
            "{}/submissions/{}",
            self.endpoint.trim_end_matches('/'),
            token
        );

        let response = self.authed(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::remote(format!(
                "status poll failed with {}: {}",
                status,
                truncate(&body, 320)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::remote(format!("invalid poll response: {e}")))
    }
}

#[async_trait]
impl CodeExecutionService for Judge0Client {
    async fn run(&self, request: &ExecutionRequest) -> Result<ExecutionOutcome> {
        request.validate()?;

        let token = self.submit(request).await?;
        debug!(%token, "submission accepted");

        let mut attempts = 0;
        loop {
            tokio::time::sleep(self.policy.interval).await;

            let result = self.poll(&token).await?;
            attempts += 1;

            let in_progress = self.policy.in_progress_ids.contains(&result.status.id);
            if !in_progress || attempts >= self.policy.max_attempts {
                debug!(
                    attempts,
                    status = %result.status.description,
                    "polling finished"
                );
                return Ok(result.into_outcome());
            }

            debug!(
                attempts,
                status = %result.status.description,
                "submission still in progress"
            );
        }
    }
}
