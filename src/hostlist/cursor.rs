//! The persisted `next` cursor: one host name plus a trailing newline.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::hostlist::ListError;

/// File-backed cursor. No locking: concurrent `next` calls may hand out the
/// same host twice, which is harmless.
#[derive(Debug, Clone)]
pub struct CursorStore {
    path: PathBuf,
}

impl CursorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last host handed out, or `None` when at the start of the list.
    ///
    /// An empty file counts as absent; more than one line is malformed.
    pub fn read(&self) -> Result<Option<String>, ListError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ListError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
        let host = lines.next();
        if lines.next().is_some() {
            return Err(self.malformed("expected a single host name"));
        }
        match host {
            Some(h) if h.split_whitespace().count() > 1 => {
                Err(self.malformed("host name contains whitespace"))
            }
            Some(h) => Ok(Some(h.to_string())),
            None => Ok(None),
        }
    }

    /// Overwrite the cursor with `host`.
    pub fn save(&self, host: &str) -> Result<(), ListError> {
        fs::write(&self.path, format!("{host}\n")).map_err(|source| ListError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(host, path = %self.path.display(), "saved cursor");
        Ok(())
    }

    /// Forget the cursor. Resetting an absent cursor is not an error.
    pub fn reset(&self) -> Result<(), ListError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ListError::Write {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn malformed(&self, reason: &str) -> ListError {
        ListError::MalformedCursor {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}
