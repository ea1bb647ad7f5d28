use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::expand_home;

/// Variable naming the log file prefix.
pub const LOG_ENV_VAR: &str = "NSSH_LOG";

/// Variable holding the `EnvFilter` directives. Falls back to `RUST_LOG`.
pub const FILTER_ENV_VAR: &str = "NSSH_LOG_FILTER";

const DEFAULT_FILTER: &str = "nssh=info,warn";

/// Where one process writes its log: `{prefix}.{timestamp}.{pid}`, with a
/// leading `~` expanded.
///
/// Every `nssh next` window gets its own file, so a burst of them does not
/// interleave.
pub fn log_file_path(prefix: &str, timestamp: u64, pid: u32) -> PathBuf {
    let mut path = expand_home(prefix).into_os_string();
    path.push(format!(".{timestamp}.{pid}"));
    PathBuf::from(path)
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(FILTER_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default: stdout carries the title escape and the
/// child owns the terminal. Set `NSSH_LOG` to a file prefix to enable it.
pub fn init_tracing() {
    let Some(prefix) = std::env::var(LOG_ENV_VAR).ok().filter(|p| !p.is_empty()) else {
        return;
    };

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&prefix, timestamp, std::process::id());

    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Warning: Failed to create log file: {}", path.display());
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter())
        .with(file_layer)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "nssh logging started");
}
