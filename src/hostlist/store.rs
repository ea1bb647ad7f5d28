//! Read-only access to the directory of named lists.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::hostlist::entry::{parse_line, ListEntry};
use crate::hostlist::ListError;

/// An ordered host list in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedList {
    pub name: String,
    pub entries: Vec<ListEntry>,
}

impl NamedList {
    /// Parse list contents, dropping lines without a host.
    pub fn parse(name: impl Into<String>, content: &str) -> Self {
        Self {
            name: name.into(),
            entries: content.lines().filter_map(parse_line).collect(),
        }
    }
}

/// Directory of `machines.<name>` files.
#[derive(Debug, Clone)]
pub struct ListStore {
    dir: PathBuf,
}

impl ListStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Load and parse a list by file name (e.g. `machines.web`).
    pub fn load(&self, name: &str) -> Result<NamedList, ListError> {
        let path = self.path_for(name);
        let content = fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ListError::NotFound {
                name: name.to_string(),
                path: path.clone(),
            },
            _ => ListError::Read {
                path: path.clone(),
                source,
            },
        })?;
        let list = NamedList::parse(name, &content);
        tracing::debug!(list = name, entries = list.entries.len(), "loaded host list");
        Ok(list)
    }
}
