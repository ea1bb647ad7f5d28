use std::collections::HashSet;

use crate::config::ScreenConfig;
use crate::hostlist::NamedList;
use crate::screenrc::ScreenrcError;

/// Bookkeeping threaded through generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeState {
    /// Hosts that already have a window.
    pub seen: HashSet<String>,
    /// Number the next window gets.
    pub next_window: u32,
}

impl MergeState {
    /// Start `offset` windows after the highest hand-written one.
    pub fn starting_after(highest: u32, offset: u32) -> Result<Self, ScreenrcError> {
        let next_window = highest
            .checked_add(offset)
            .ok_or(ScreenrcError::WindowNumberOverflow { after: highest })?;
        Ok(Self {
            seen: HashSet::new(),
            next_window,
        })
    }

    fn allocate(&mut self) -> Result<u32, ScreenrcError> {
        let n = self.next_window;
        self.next_window = n
            .checked_add(1)
            .ok_or(ScreenrcError::WindowNumberOverflow { after: n })?;
        Ok(n)
    }
}

/// Generate `screen`/`stuff` line pairs for every list.
///
/// Each list starts on a multiple of ten (padding with filler windows), gets
/// a header window, then one window per host not generated before.
pub fn generate_windows(
    lists: &[NamedList],
    config: &ScreenConfig,
    state: &mut MergeState,
) -> Result<Vec<String>, ScreenrcError> {
    let mut lines = Vec::new();

    for list in lists {
        while state.next_window % 10 != 0 {
            let n = state.allocate()?;
            push_window(&mut lines, &config.filler_title, n, &config.setup_command, None);
        }

        let n = state.allocate()?;
        let command = config.list_command.replace("{list}", &list.name);
        push_window(
            &mut lines,
            &format!("CLUSTER: {}", list.name),
            n,
            &config.setup_command,
            Some(&command),
        );

        for entry in &list.entries {
            if !state.seen.insert(entry.host.clone()) {
                continue;
            }
            let n = state.allocate()?;
            let command = config
                .host_command
                .replace("{comment}", entry.comment.as_deref().unwrap_or(""))
                .replace("{host}", &entry.host);
            push_window(
                &mut lines,
                &entry.host,
                n,
                &config.setup_command,
                Some(&command),
            );
        }
    }

    Ok(lines)
}

fn push_window(
    lines: &mut Vec<String>,
    title: &str,
    number: u32,
    setup: &str,
    command: Option<&str>,
) {
    lines.push(format!("screen -t \"{title}\" {number}"));
    match command {
        Some(command) => lines.push(format!("stuff \"{setup}\\015{command}\"")),
        None => lines.push(format!("stuff \"{setup}\\015\"")),
    }
}
