//! Destinations for generated test cases.

use std::{
    fs,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use super::TestCase;

/// Errors raised while persisting test cases.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SinkError {
    /// Creating the output file or its parent directories failed.
    #[error("failed to create `{path}`: {source}")]
    Create {
        /// Path that could not be created.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Serialising or writing the cases failed.
    #[error("failed to write cases to `{path}`: {source}")]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying serialisation or I/O error.
        #[source]
        source: serde_json::Error,
    },
}

/// Persists a complete suite of test cases.
pub trait CaseSink {
    /// Writes `cases`, replacing anything written before.
    ///
    /// # Errors
    /// Returns [`SinkError`] when the cases could not be stored.
    fn write_all(&mut self, cases: &[TestCase]) -> Result<(), SinkError>;
}

/// Writes cases as a pretty-printed JSON array of `{input, output}` objects.
///
/// The array is staged in a temporary file beside the destination and renamed
/// over it, so a failed write never leaves a truncated suite behind.
///
/// # Examples
/// ```
/// use rakau_cli::suite::{CaseSink, JsonFileSink, TestCase};
///
/// let dir = tempfile::tempdir()?;
/// let path = dir.path().join("suite/cases.json");
/// let mut sink = JsonFileSink::new(&path);
/// sink.write_all(&[TestCase { input: "1\n0".into(), output: String::new() }])?;
/// assert!(std::fs::read_to_string(&path)?.contains("\"input\": \"1\\n0\""));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Creates a sink writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn create_error(path: &Path, source: io::Error) -> SinkError {
    SinkError::Create {
        path: path.to_path_buf(),
        source,
    }
}

impl CaseSink for JsonFileSink {
    fn write_all(&mut self, cases: &[TestCase]) -> Result<(), SinkError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|err| create_error(dir, err))?;
        // Deleted on drop unless persisted.
        let staged = NamedTempFile::new_in(dir).map_err(|err| create_error(dir, err))?;
        let mut writer = BufWriter::new(staged);
        let write_error = |source| SinkError::Write {
            path: self.path.clone(),
            source,
        };
        serde_json::to_writer_pretty(&mut writer, cases).map_err(write_error)?;
        let staged = writer
            .into_inner()
            .map_err(|err| write_error(serde_json::Error::io(err.into_error())))?;
        staged
            .persist(&self.path)
            .map_err(|err| create_error(&self.path, err.error))?;
        info!(path = %self.path.display(), cases = cases.len(), "suite written");
        Ok(())
    }
}
