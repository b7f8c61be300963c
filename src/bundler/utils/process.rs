//! Subprocess execution with streamed output.
//!
//! Every external tool (SDK generator, build tool, converter) goes through
//! [`run_streaming`]: stdout and stderr are drained concurrently line by
//! line into a [`Reporter`], the last stderr lines are kept as diagnostics,
//! and the exit status is only read once both streams have closed.

use crate::bundler::{
    Reporter,
    error::{Error, Result},
};
use std::{collections::VecDeque, process::ExitStatus, process::Stdio, time::Duration};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Number of stderr lines kept for error messages.
pub const DIAGNOSTIC_LINES: usize = 20;

/// Exit status and captured diagnostics of a finished process.
#[derive(Debug)]
pub struct ProcessOutput {
    /// Program name used in error messages
    pub program: String,
    /// Exit status reported by the OS
    pub status: ExitStatus,
    /// Last [`DIAGNOSTIC_LINES`] lines of stderr
    pub stderr_tail: Vec<String>,
}

impl ProcessOutput {
    /// Exit code, or `None` if the process was killed by a signal.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Whether the process exited with code 0.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Converts a failed exit into an error carrying the exit code and diagnostics.
    pub fn check(self) -> Result<()> {
        if self.status.success() {
            return Ok(());
        }

        let diagnostics = self.stderr_tail.join("\n");
        match self.status.code() {
            Some(code) => Err(Error::NonZeroExit {
                command: self.program,
                code,
                diagnostics,
            }),
            None => Err(Error::Terminated {
                command: self.program,
                diagnostics,
            }),
        }
    }
}

/// Runs `command` to completion, streaming its output to `reporter`.
///
/// - stdout lines go to [`Reporter::on_stdout`]
/// - stderr lines go to [`Reporter::warning`] and the diagnostic tail
///
/// stdin is closed. The child is killed if the returned future is dropped
/// or if `timeout` elapses; without a timeout this waits indefinitely.
///
/// # Errors
///
/// - [`Error::CommandFailed`] if the process cannot be spawned or awaited
/// - [`Error::TimedOut`] if `timeout` elapsed
///
/// A non-zero exit is *not* an error here; see [`ProcessOutput::check`].
pub async fn run_streaming(
    mut command: Command,
    reporter: &dyn Reporter,
    timeout: Option<Duration>,
) -> Result<ProcessOutput> {
    let program = command
        .as_std()
        .get_program()
        .to_string_lossy()
        .into_owned();

    log::debug!("Spawning {:?}", command.as_std());

    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|error| Error::CommandFailed {
            command: program.clone(),
            error,
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let completion = async {
        // Both streams must close before the exit status is read
        let (_, stderr_tail) = tokio::join!(
            async {
                if let Some(stdout) = stdout {
                    for_each_line(stdout, |line| reporter.on_stdout(line)).await;
                }
            },
            async {
                let mut tail = VecDeque::with_capacity(DIAGNOSTIC_LINES);
                if let Some(stderr) = stderr {
                    for_each_line(stderr, |line| {
                        reporter.warning(line);
                        if tail.len() == DIAGNOSTIC_LINES {
                            tail.pop_front();
                        }
                        tail.push_back(line.to_string());
                    })
                    .await;
                }
                tail
            }
        );
        (child.wait().await, stderr_tail)
    };

    let finished = match timeout {
        Some(limit) => tokio::time::timeout(limit, completion).await.ok(),
        None => Some(completion.await),
    };

    let Some((status, stderr_tail)) = finished else {
        let limit = timeout.unwrap_or_default();
        if let Err(e) = child.kill().await {
            log::warn!("Failed to kill {program} after timeout: {e}");
        }
        return Err(Error::TimedOut {
            command: program,
            seconds: limit.as_secs(),
        });
    };

    let status = status.map_err(|error| Error::CommandFailed {
        command: program.clone(),
        error,
    })?;

    log::debug!("{program} finished with {status}");

    Ok(ProcessOutput {
        program,
        status,
        stderr_tail: stderr_tail.into(),
    })
}

/// Feeds each line of `stream` to `f`, tolerating invalid UTF-8 and CRLF endings.
async fn for_each_line<R, F>(stream: R, mut f: F)
where
    R: AsyncRead + Unpin,
    F: FnMut(&str),
{
    let mut segments = BufReader::new(stream).split(b'\n');
    loop {
        match segments.next_segment().await {
            Ok(Some(bytes)) => {
                let line = String::from_utf8_lossy(&bytes);
                f(line.trim_end_matches('\r'));
            }
            Ok(None) => break,
            Err(e) => {
                log::debug!("Stopped reading process output: {e}");
                break;
            }
        }
    }
}
