//! Run subcommand

use anyhow::{bail, Result};
use forge_remote::{CodeExecutionService, ExecutionOutcome, ExecutionRequest};
use std::path::Path;

use super::read_source;

pub async fn run_command(
    service: &dyn CodeExecutionService,
    input: Option<&Path>,
    stdin_data: &str,
) -> Result<()> {
    let source = read_source(input)?;
    let outcome = service
        .run(&ExecutionRequest::new(source, stdin_data))
        .await?;

    println!("{}", render_report(&outcome));

    if !outcome.succeeded {
        bail!("execution finished with status: {}", outcome.status);
    }

    Ok(())
}

/// Render the outcome report: an output block, a warnings block when
/// stderr is non-empty, timing lines when both time and memory were
/// reported, and a final status line.
fn render_report(outcome: &ExecutionOutcome) -> String {
    let mut report = String::new();

    if !outcome.stdout.is_empty() {
        report.push_str(&format!("Output:\n{}\n", outcome.stdout));
    }
    if !outcome.stderr.is_empty() {
        report.push_str(&format!("\nErrors/Warnings:\n{}\n", outcome.stderr));
    }
    if let (Some(time), Some(memory)) = (&outcome.time_secs, outcome.memory_kib) {
        report.push_str(&format!(
            "\nExecution time: {time}s\nMemory used: {memory} KB"
        ));
    }
    report.push_str(&format!("\nStatus: {}", outcome.status));

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use forge_remote::Result as RemoteResult;

    struct FakeExecService {
        outcome: ExecutionOutcome,
    }

    #[async_trait]
    impl CodeExecutionService for FakeExecService {
        async fn run(&self, request: &ExecutionRequest) -> RemoteResult<ExecutionOutcome> {
            request.validate()?;
            Ok(self.outcome.clone())
        }
    }

    fn accepted_outcome() -> ExecutionOutcome {
        ExecutionOutcome {
            succeeded: true,
            stdout: "7\n".to_string(),
            stderr: String::new(),
            status: "Accepted".to_string(),
            time_secs: Some("0.004".to_string()),
            memory_kib: Some(872),
        }
    }

    #[test]
    fn test_report_full() {
        let report = render_report(&accepted_outcome());
        assert_eq!(
            report,
            "Output:\n7\n\n\nExecution time: 0.004s\nMemory used: 872 KB\nStatus: Accepted"
        );
    }

    #[test]
    fn test_report_with_stderr() {
        let outcome = ExecutionOutcome {
            succeeded: false,
            stdout: String::new(),
            stderr: "error: expected ';'".to_string(),
            status: "Compilation Error".to_string(),
            time_secs: None,
            memory_kib: None,
        };
        let report = render_report(&outcome);
        assert!(report.contains("Errors/Warnings:\nerror: expected ';'"));
        assert!(report.ends_with("Status: Compilation Error"));
        assert!(!report.contains("Output:"));
        assert!(!report.contains("Execution time"));
    }

    #[test]
    fn test_report_omits_timing_unless_both_present() {
        let mut outcome = accepted_outcome();
        outcome.memory_kib = None;
        assert!(!render_report(&outcome).contains("Execution time"));
    }

    #[tokio::test]
    async fn test_run_succeeds_on_accepted() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("main.cpp");
        std::fs::write(&input, "int main() { return 0; }").unwrap();

        let service = FakeExecService {
            outcome: accepted_outcome(),
        };
        run_command(&service, Some(&input), "3 4").await.unwrap();
    }

    #[tokio::test]
    async fn test_run_fails_on_non_accepted_status() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("main.cpp");
        std::fs::write(&input, "int main() {").unwrap();

        let service = FakeExecService {
            outcome: ExecutionOutcome {
                succeeded: false,
                stdout: String::new(),
                stderr: "error".to_string(),
                status: "Compilation Error".to_string(),
                time_secs: None,
                memory_kib: None,
            },
        };
        let err = run_command(&service, Some(&input), "").await.unwrap_err();
        assert!(err.to_string().contains("Compilation Error"));
    }
}
