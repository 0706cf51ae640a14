use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use wait_timeout::ChildExt;

use cvsift_core::{BackendError, TextBackend};

/// Default wall-clock limit for one external tool invocation.
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(30);

/// Cap on captured stderr reproduced in error messages.
const STDERR_SNIPPET_LEN: usize = 200;

/// Locate `program` in the directories of the PATH variable.
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

/// Run `program` with `args`, returning its stdout as text.
///
/// Output is buffered through unnamed temp files rather than pipes, so a
/// child producing more than a pipe buffer cannot wedge the wait. On
/// timeout the child is killed and reaped before the error returns; no
/// process handle outlives this call.
fn run_tool(program: &str, args: &[&str], timeout: Duration) -> Result<String, BackendError> {
    let mut stdout_file = tempfile::tempfile()?;
    let mut stderr_file = tempfile::tempfile()?;

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::from(stdout_file.try_clone()?))
        .stderr(Stdio::from(stderr_file.try_clone()?))
        .spawn()
        .map_err(|e| BackendError::Unavailable(format!("{program}: {e}")))?;

    let status = match child.wait_timeout(timeout)? {
        Some(status) => status,
        None => {
            child.kill().ok();
            child.wait()?;
            return Err(BackendError::Timeout(timeout.as_secs()));
        }
    };

    if !status.success() {
        let mut raw = Vec::new();
        stderr_file.seek(SeekFrom::Start(0))?;
        stderr_file.read_to_end(&mut raw)?;
        let stderr = String::from_utf8_lossy(&raw);
        let snippet: String = stderr.trim().chars().take(STDERR_SNIPPET_LEN).collect();
        return Err(BackendError::Tool(format!(
            "{program} failed ({status}): {snippet}"
        )));
    }

    let mut raw = Vec::new();
    stdout_file.seek(SeekFrom::Start(0))?;
    stdout_file.read_to_end(&mut raw)?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// An extraction backend that shells out to a command-line tool.
///
/// The tool must write the extracted text to stdout. One invocation per
/// document, blocking, with a wall-clock timeout.
pub struct ToolBackend {
    name: &'static str,
    program: &'static str,
    /// Arguments placed before the input path.
    pre_args: &'static [&'static str],
    /// Arguments placed after the input path.
    post_args: &'static [&'static str],
    timeout: Duration,
}

impl ToolBackend {
    /// `pdftotext -layout <file> -` from poppler-utils. Layout mode keeps
    /// multi-column text in reading order.
    pub fn pdftotext() -> Self {
        Self {
            name: "pdftotext",
            program: "pdftotext",
            pre_args: &["-layout"],
            post_args: &["-"],
            timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }

    /// `pandoc -t plain <file>` for word-processor documents.
    pub fn pandoc() -> Self {
        Self {
            name: "pandoc",
            program: "pandoc",
            pre_args: &["-t", "plain"],
            post_args: &[],
            timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }

    /// `antiword <file>` for legacy binary `.doc`.
    pub fn antiword() -> Self {
        Self {
            name: "antiword",
            program: "antiword",
            pre_args: &[],
            post_args: &[],
            timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }

    /// `catdoc <file>`, the fallback when antiword cannot read a `.doc`.
    pub fn catdoc() -> Self {
        Self {
            name: "catdoc",
            program: "catdoc",
            pre_args: &[],
            post_args: &[],
            timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }

    /// Replace the default timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl TextBackend for ToolBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn probe(&self) -> bool {
        find_in_path(self.program).is_some()
    }

    fn extract(&self, path: &Path) -> Result<String, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::Open("invalid path encoding".to_string()))?;

        let mut args: Vec<&str> = self.pre_args.to_vec();
        args.push(path_str);
        args.extend_from_slice(self.post_args);

        run_tool(self.program, &args, self.timeout)
    }
}
