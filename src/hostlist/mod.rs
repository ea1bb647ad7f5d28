//! Named host lists and the `next` cursor walking them.
//!
//! A list is a dsh-style file (`machines.<name>`), one host per line with an
//! optional `# comment`. The cursor file remembers the last host handed out.

mod cursor;
mod entry;
mod store;
mod walker;

use std::path::PathBuf;

use thiserror::Error;

pub use cursor::CursorStore;
pub use entry::{parse_line, ListEntry, DISABLED_TAG};
pub use store::{ListStore, NamedList};
pub use walker::{resolve_next, WalkPolicy};

/// Errors raised by the list store, the cursor store and the walker.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("{} does not exist on the filesystem. --list {name} is not valid.", path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write cursor file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cursor file '{}' is malformed: {reason}", path.display())]
    MalformedCursor { path: PathBuf, reason: String },

    #[error("{name} has no hosts")]
    Empty { name: String },

    #[error("Reached end of {name}. There is no next host!")]
    EndOfList { name: String },

    #[error("last host '{host}' is not in {name}; run `nssh reset` to start over")]
    StaleCursor { name: String, host: String },
}

impl ListError {
    /// State errors come from walking; everything else is configuration.
    pub fn is_state_error(&self) -> bool {
        matches!(
            self,
            ListError::Empty { .. } | ListError::EndOfList { .. } | ListError::StaleCursor { .. }
        )
    }
}
