use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use super::ProcessError;

#[cfg(unix)]
const SHELL: (&str, &str) = ("/bin/sh", "-c");
#[cfg(windows)]
const SHELL: (&str, &str) = ("cmd", "/C");

/// Runs raw input lines through the system shell and hands back what they
/// wrote to standard output. Standard error is discarded and the exit
/// status is only logged.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        ProcessExecutor
    }

    pub fn run_captured(&self, line: &str, cwd: &Path) -> Result<String, ProcessError> {
        let (program, flag) = SHELL;
        let child = Command::new(program)
            .arg(flag)
            .arg(line)
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(ProcessError::Spawn)?;

        let output = child.wait_with_output().map_err(ProcessError::Wait)?;
        if !output.status.success() {
            debug!("`{}` exited with {}", line, output.status);
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let out = ProcessExecutor::new()
            .run_captured("echo hello; echo world", dir.path())
            .unwrap();
        assert_eq!(out, "hello\nworld\n");
    }

    #[test]
    fn test_runs_in_given_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();
        let out = ProcessExecutor::new().run_captured("ls", dir.path()).unwrap();
        assert_eq!(out.trim_end(), "marker.txt");
    }

    #[test]
    fn test_stderr_and_status_not_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let out = ProcessExecutor::new()
            .run_captured("echo oops 1>&2; exit 3", dir.path())
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_directory_fails_to_spawn() {
        let result = ProcessExecutor::new().run_captured("true", Path::new("/nonexistent/dir"));
        assert!(matches!(result, Err(ProcessError::Spawn(_))));
    }
}
