//! screen config merge: regenerate the block between the sentinel markers
//! from host lists, keep everything else verbatim.

mod generate;
mod sections;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ScreenConfig;
use crate::hostlist::{ListError, ListStore, NamedList};

pub use generate::{generate_windows, MergeState};
pub use sections::{split_sections, Sections, BEGIN_MARKER, END_MARKER};

#[derive(Debug, Error)]
pub enum ScreenrcError {
    #[error("failed to read screen config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write screen config '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    List(#[from] ListError),

    #[error("no lists to generate windows for")]
    NoLists,

    #[error("screen window numbers run out after {after}")]
    WindowNumberOverflow { after: u32 },
}

/// Merge freshly generated windows into `existing`.
///
/// Fails when window numbers would exceed `u32`, before anything is written.
pub fn merge(
    existing: &str,
    lists: &[NamedList],
    config: &ScreenConfig,
) -> Result<String, ScreenrcError> {
    let sections = split_sections(existing);
    let mut state = MergeState::starting_after(sections.highest_window, config.start_offset)?;
    let generated = generate_windows(lists, config, &mut state)?;

    let lines = sections
        .top
        .iter()
        .map(String::as_str)
        .chain([BEGIN_MARKER])
        .chain(generated.iter().map(String::as_str))
        .chain([END_MARKER])
        .chain(sections.bottom.iter().map(String::as_str));

    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

/// Load `list_names` (bare names, `machines.` is prepended) and merge them
/// into the file at `path`. Returns the new contents; writes them unless
/// `dry_run`. A missing file is treated as empty.
///
/// The rewrite is a plain overwrite, not an atomic rename.
pub fn rewrite(
    path: &Path,
    store: &ListStore,
    list_names: &[String],
    config: &ScreenConfig,
    dry_run: bool,
) -> Result<String, ScreenrcError> {
    if list_names.is_empty() {
        return Err(ScreenrcError::NoLists);
    }

    let lists = list_names
        .iter()
        .map(|name| -> Result<NamedList, ListError> {
            let mut list = store.load(&format!("{}{name}", crate::args::LIST_PREFIX))?;
            list.name = name.clone();
            Ok(list)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let existing = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(ScreenrcError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let merged = merge(&existing, &lists, config)?;
    if !dry_run {
        fs::write(path, &merged).map_err(|source| ScreenrcError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), lists = list_names.len(), "rewrote screen config");
    }
    Ok(merged)
}
