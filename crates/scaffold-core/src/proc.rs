//! Structured subprocess execution
//!
//! Commands are always invoked with argument vectors, never through a shell,
//! so the project name and selections can never be interpreted as shell
//! syntax. Output is streamed as it arrives; stderr lines are retained so a
//! failing command's diagnostics can be surfaced verbatim in the error.

use crate::error::{Result, ScaffoldError};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// Run a command to completion, echoing its output line by line.
/// Returns `ScaffoldError::Subprocess` with the collected stderr when the
/// command exits non-zero or cannot be spawned.
pub async fn run_streamed(program: &str, args: &[&str], current_dir: Option<&Path>) -> Result<()> {
    let rendered = render_command(program, args);
    println!("{} {}", "Running:".dimmed(), rendered.yellow());

    let mut cmd = TokioCommand::new(program);
    cmd.args(args).stdout(Stdio::piped()).stderr(Stdio::piped());
    if let Some(dir) = current_dir {
        cmd.current_dir(dir);
    }

    let mut child = cmd.spawn().map_err(|e| ScaffoldError::Subprocess {
        command: rendered.clone(),
        code: -1,
        diagnostics: format!("failed to spawn: {}", e),
    })?;

    let stdout = child.stdout.take().expect("Failed to capture stdout");
    let stderr = child.stderr.take().expect("Failed to capture stderr");

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();

    let stdout_task = async {
        while let Ok(Some(line)) = stdout_reader.next_line().await {
            println!("  {}", line);
        }
    };
    let stderr_task = async {
        let mut lines = Vec::new();
        while let Ok(Some(line)) = stderr_reader.next_line().await {
            eprintln!("  {}", line.dimmed());
            lines.push(line);
        }
        lines
    };

    let (_, stderr_lines) = tokio::join!(stdout_task, stderr_task);

    let status = child.wait().await.map_err(|e| ScaffoldError::Subprocess {
        command: rendered.clone(),
        code: -1,
        diagnostics: format!("failed to wait for process: {}", e),
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ScaffoldError::Subprocess {
            command: rendered,
            code: status.code().unwrap_or(-1),
            diagnostics: stderr_lines.join("\n"),
        })
    }
}

/// Render a command for display and error messages
fn render_command(program: &str, args: &[&str]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command() {
        assert_eq!(
            render_command("git", &["clone", "--depth", "1", "url"]),
            "git clone --depth 1 url"
        );
        assert_eq!(render_command("npm", &[]), "npm");
    }

    #[tokio::test]
    async fn test_successful_command() {
        let result = run_streamed("true", &[], None).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_failed_command_reports_exit_code() {
        let err = run_streamed("false", &[], None).await.unwrap_err();
        match err {
            ScaffoldError::Subprocess { command, code, .. } => {
                assert_eq!(command, "false");
                assert_eq!(code, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_command_captures_stderr() {
        let err = run_streamed("sh", &["-c", "echo boom >&2; exit 2"], None)
            .await
            .unwrap_err();
        match err {
            ScaffoldError::Subprocess {
                code, diagnostics, ..
            } => {
                assert_eq!(code, 2);
                assert!(diagnostics.contains("boom"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_program_is_a_subprocess_error() {
        let err = run_streamed("definitely-not-a-real-binary", &[], None)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Subprocess { .. }));
    }
}
