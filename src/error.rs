//! Top-level error taxonomy. Every variant is fatal to the invocation.

use thiserror::Error;

use crate::args::ArgsError;
use crate::config::ConfigError;
use crate::hostlist::ListError;
use crate::resolve::ResolveError;

#[derive(Debug, Error)]
pub enum NsshError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse category of an [`NsshError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing list file, unreadable or malformed cursor, bad config.
    Configuration,
    /// End of list, stale cursor, empty list.
    State,
    /// Flag or directive missing its value, no target.
    Argument,
    /// Name lookup failed.
    Resolution,
    /// The remote-login program could not be started.
    Launch,
}

impl NsshError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NsshError::Args(_) => ErrorKind::Argument,
            NsshError::Config(_) => ErrorKind::Configuration,
            NsshError::List(e) if e.is_state_error() => ErrorKind::State,
            NsshError::List(_) => ErrorKind::Configuration,
            NsshError::Resolve(_) => ErrorKind::Resolution,
            NsshError::Launch { .. } => ErrorKind::Launch,
        }
    }
}
