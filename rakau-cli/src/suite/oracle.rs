//! Reference solvers that produce the expected output for a case input.

use std::{
    ffi::OsString,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::{Child, Command, ExitStatus, Stdio},
    sync::mpsc::{self, Receiver, RecvTimeoutError},
    thread,
    time::{Duration, Instant},
};

use thiserror::Error;
use tracing::{debug, instrument, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(10);
/// Extra time granted to the pipe workers after the oracle's deadline.
const DRAIN_GRACE: Duration = Duration::from_millis(200);

/// Errors raised while asking an oracle for an answer.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OracleError {
    /// The oracle process could not be started.
    #[error("failed to spawn oracle `{program}`: {source}")]
    Spawn {
        /// Program that failed to start.
        program: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Talking to the running oracle failed.
    #[error("i/o error while running oracle `{program}`: {source}")]
    Io {
        /// Program being run.
        program: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The oracle ran past its deadline and was killed.
    #[error("oracle `{program}` timed out after {timeout:?}")]
    TimedOut {
        /// Program that was killed.
        program: PathBuf,
        /// Deadline that expired.
        timeout: Duration,
    },
    /// The oracle exited unsuccessfully.
    #[error("oracle `{program}` exited with {status}: {stderr}")]
    Failed {
        /// Program that failed.
        program: PathBuf,
        /// Exit status reported by the operating system.
        status: ExitStatus,
        /// Trimmed standard error output.
        stderr: String,
    },
    /// The oracle printed bytes that are not UTF-8.
    #[error("oracle `{program}` produced non UTF-8 output")]
    InvalidOutput {
        /// Program that produced the output.
        program: PathBuf,
    },
}

/// Computes the expected output for a rendered case input.
pub trait Oracle {
    /// Returns the answer for `input`, trimmed of surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`OracleError`] when no answer could be obtained.
    fn answer(&self, input: &str) -> Result<String, OracleError>;
}

/// Answers every input with an empty string.
///
/// Used when a suite is generated without a reference solver, so the inputs
/// can be solved later.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyOracle;

impl Oracle for EmptyOracle {
    fn answer(&self, _input: &str) -> Result<String, OracleError> {
        Ok(String::new())
    }
}

/// Runs an external executable, feeding the input on stdin and reading the
/// answer from stdout.
///
/// # Examples
/// ```no_run
/// use std::time::Duration;
///
/// use rakau_cli::suite::{Oracle, ProcessOracle};
///
/// let oracle = ProcessOracle::new("./solver").with_timeout(Duration::from_secs(2));
/// let answer = oracle.answer("2\n1 2\n1\n1 2 5")?;
/// println!("{answer}");
/// # Ok::<(), rakau_cli::suite::OracleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct ProcessOracle {
    program: PathBuf,
    args: Vec<OsString>,
    timeout: Duration,
}

impl ProcessOracle {
    /// Default deadline for a single answer.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates an oracle running `program` with no arguments.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Appends command-line arguments passed to every run.
    #[must_use]
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Sets the deadline for a single answer.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the program path.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn io_error(&self, source: io::Error) -> OracleError {
        OracleError::Io {
            program: self.program.clone(),
            source,
        }
    }

    fn timed_out(&self) -> OracleError {
        OracleError::TimedOut {
            program: self.program.clone(),
            timeout: self.timeout,
        }
    }

    /// Polls the child until it exits or the deadline passes. Returns `None`
    /// when the child had to be killed.
    fn supervise(
        &self,
        child: &mut Child,
        started: Instant,
    ) -> Result<Option<ExitStatus>, OracleError> {
        loop {
            if let Some(status) = child.try_wait().map_err(|err| self.io_error(err))? {
                return Ok(Some(status));
            }
            if started.elapsed() > self.timeout {
                kill_tree(child);
                child.wait().map_err(|err| self.io_error(err))?;
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Oracle for ProcessOracle {
    #[instrument(
        name = "suite.oracle",
        level = "debug",
        skip(self, input),
        fields(program = %self.program.display(), input_len = input.len()),
    )]
    fn answer(&self, input: &str) -> Result<String, OracleError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        // The oracle leads its own process group so a timeout reaches any
        // solver it starts.
        #[cfg(unix)]
        std::os::unix::process::CommandExt::process_group(&mut command, 0);
        let mut child = command.spawn().map_err(|source| OracleError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        let started = Instant::now();

        // Pipes are served on their own threads so a large input or output
        // cannot fill a buffer and stall the child.
        let input = input.as_bytes().to_vec();
        let feeder = child
            .stdin
            .take()
            .map(|mut stdin| spawn_pipe(move || stdin.write_all(&input)));
        let stdout = child.stdout.take().map(|pipe| spawn_pipe(move || read_all(pipe)));
        let stderr = child.stderr.take().map(|pipe| spawn_pipe(move || read_all(pipe)));

        let status = self.supervise(&mut child, started)?;

        // Descendants that escaped the kill may still hold a pipe open.
        let deadline = started + self.timeout + DRAIN_GRACE;
        let (Some(stdout), Some(stderr), Some(fed)) = (
            settle(stdout, deadline),
            settle(stderr, deadline),
            settle(feeder, deadline),
        ) else {
            kill_tree(&mut child);
            return Err(self.timed_out());
        };
        let stdout = stdout.map_err(|err| self.io_error(err))?;
        let stderr = stderr.map_err(|err| self.io_error(err))?;
        // A child may exit without reading all of its input.
        if let Err(err) = fed
            && err.kind() != io::ErrorKind::BrokenPipe
        {
            return Err(self.io_error(err));
        }

        let Some(status) = status else {
            return Err(self.timed_out());
        };
        if !status.success() {
            return Err(OracleError::Failed {
                program: self.program.clone(),
                status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_owned(),
            });
        }
        let answer = String::from_utf8(stdout).map_err(|_| OracleError::InvalidOutput {
            program: self.program.clone(),
        })?;
        debug!(output_len = answer.len(), "oracle answered");
        Ok(answer.trim().to_owned())
    }
}

/// Kills the oracle together with every process in its group.
#[cfg(unix)]
fn kill_tree(child: &mut Child) {
    if let Ok(pid) = i32::try_from(child.id()) {
        // SAFETY: kill(2) takes no pointers; a negative pid addresses the
        // process group the oracle was spawned into.
        unsafe {
            libc::kill(-pid, libc::SIGKILL);
        }
    }
    if let Err(err) = child.kill() {
        warn!(error = %err, "failed to kill oracle");
    }
}

#[cfg(not(unix))]
fn kill_tree(child: &mut Child) {
    if let Err(err) = child.kill() {
        warn!(error = %err, "failed to kill oracle");
    }
}

fn spawn_pipe<T, F>(work: F) -> Receiver<io::Result<T>>
where
    T: Send + 'static,
    F: FnOnce() -> io::Result<T> + Send + 'static,
{
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        // The receiver is gone once the answer has been abandoned.
        let _ = sender.send(work());
    });
    receiver
}

fn read_all<R: Read>(mut pipe: R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    pipe.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Waits for a pipe worker until `deadline`; `None` when it is still blocked.
fn settle<T: Default>(
    pipe: Option<Receiver<io::Result<T>>>,
    deadline: Instant,
) -> Option<io::Result<T>> {
    let Some(receiver) = pipe else {
        return Some(Ok(T::default()));
    };
    match receiver.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(result) => Some(result),
        Err(RecvTimeoutError::Timeout) => None,
        Err(RecvTimeoutError::Disconnected) => Some(Err(io::Error::other("pipe worker panicked"))),
    }
}
