//! Top-level dispatch: classify → walk the cursor → resolve → persist.
//!
//! Nothing is handed off unless every step succeeds. The cursor is saved
//! after resolution and before the launch; a crash in between re-issues the
//! same host on the next `next`.

use tracing::{debug, info};

use crate::args::{build_launch_params, classify, ArgsError, LaunchParams, Target, LIST_PREFIX};
use crate::config::Config;
use crate::error::NsshError;
use crate::hostlist::{resolve_next, CursorStore, ListStore, WalkPolicy};
use crate::resolve::Resolver;

/// What the invocation amounts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Cursor deleted; nothing to launch.
    Reset,
    /// Launch with these parameters.
    Launch(LaunchParams),
}

/// Owns the collaborators one invocation needs.
pub struct Dispatcher<R> {
    config: Config,
    lists: ListStore,
    cursor: CursorStore,
    resolver: R,
}

impl<R: Resolver> Dispatcher<R> {
    pub fn new(config: Config, resolver: R) -> Self {
        let lists = ListStore::new(config.list_dir());
        let cursor = CursorStore::new(config.cursor_file());
        Self {
            config,
            lists,
            cursor,
            resolver,
        }
    }

    pub fn cursor(&self) -> &CursorStore {
        &self.cursor
    }

    /// Turn raw args (without argv[0]) into an [`Outcome`].
    pub fn dispatch(&self, raw_args: &[String]) -> Result<Outcome, NsshError> {
        let classified = classify(raw_args)?;
        let target = classified.target.clone().ok_or(ArgsError::MissingTarget)?;
        debug!(dest = ?target, user = ?classified.user, "classified args");

        let (display_host, comment, advance) = match target {
            Target::Reset => {
                self.cursor.reset()?;
                info!(cursor = %self.cursor.path().display(), "cursor reset");
                return Ok(Outcome::Reset);
            }
            Target::Next => {
                let list_name = classified
                    .list
                    .clone()
                    .unwrap_or_else(|| format!("{LIST_PREFIX}{}", self.config.launch.default_list));
                let list = self.lists.load(&list_name)?;
                let last = self.cursor.read()?;
                let policy = WalkPolicy {
                    skip_disabled: self.config.walk.skip_disabled,
                };
                let entry = resolve_next(&list, last.as_deref(), policy)?;
                debug!(list = %list_name, ?last, next = %entry.host, "advanced cursor");
                let comment = entry.comment.clone().or_else(|| classified.comment.clone());
                (entry.host.clone(), comment, true)
            }
            Target::Host(host) => (host, classified.comment.clone(), false),
        };

        let real_host = self.resolver.canonical_name(&display_host)?;

        if advance {
            self.cursor.save(&display_host)?;
        }

        Ok(Outcome::Launch(build_launch_params(
            &classified,
            &display_host,
            &real_host,
            comment.as_deref(),
            &self.config.launch,
        )))
    }
}
