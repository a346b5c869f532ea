//! Submission sinks.
//!
//! Accepted submissions leave the workflow through a [`SubmissionSink`].
//! [`JsonlSink`] appends one `SubmissionEvent` per line using
//! `serde_jsonlines::append_json_lines`; `Vec<SubmissionEvent>` collects in
//! memory.

use std::path::{Path, PathBuf};

use fleet_core::events::SubmissionEvent;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("submission log I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Consumer of accepted submissions.
pub trait SubmissionSink {
    /// # Errors
    ///
    /// Returns `SinkError` if the event could not be recorded.
    fn emit(&mut self, event: &SubmissionEvent) -> Result<(), SinkError>;
}

impl SubmissionSink for Vec<SubmissionEvent> {
    fn emit(&mut self, event: &SubmissionEvent) -> Result<(), SinkError> {
        self.push(event.clone());
        Ok(())
    }
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for &mut S {
    fn emit(&mut self, event: &SubmissionEvent) -> Result<(), SinkError> {
        (**self).emit(event)
    }
}

/// Appends submissions to a JSONL file.
#[derive(Debug, Clone)]
pub struct JsonlSink {
    path: PathBuf,
}

impl JsonlSink {
    /// Point the sink at `path`, creating its parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Io` if the parent directory cannot be created.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, SinkError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| SinkError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(Self { path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read back every event in file order. A missing file yields no events.
    ///
    /// # Errors
    ///
    /// Returns `SinkError::Io` on read failure or a malformed line.
    pub fn read_all(&self) -> Result<Vec<SubmissionEvent>, SinkError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        serde_jsonlines::json_lines(&self.path)
            .and_then(|lines| lines.collect::<std::io::Result<Vec<SubmissionEvent>>>())
            .map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl SubmissionSink for JsonlSink {
    fn emit(&mut self, event: &SubmissionEvent) -> Result<(), SinkError> {
        serde_jsonlines::append_json_lines(&self.path, [event]).map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), kind = %event.kind, "submission appended");
        Ok(())
    }
}
