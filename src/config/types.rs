use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub launch: LaunchConfig,
    #[serde(default)]
    pub walk: WalkConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
}

/// Where the collaborating files live. A leading `~/` means the home dir.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding `machines.<name>` host lists.
    #[serde(default = "default_list_dir")]
    pub list_dir: String,
    /// File holding the last host returned by `next`.
    #[serde(default = "default_cursor_file")]
    pub cursor_file: String,
    /// screen config rewritten by `nssh-screenrc`.
    #[serde(default = "default_screenrc")]
    pub screenrc: String,
}

/// How the remote-login program is launched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Program receiving the pass-through args and the resolved host.
    #[serde(default = "default_program")]
    pub program: String,
    /// Variable carrying the human-facing hostname to the child.
    #[serde(default = "default_hostname_env")]
    pub hostname_env: String,
    /// Forward + reverse lookup before handoff (default: true).
    #[serde(default = "default_true")]
    pub resolve_names: bool,
    /// List used by `next` when `--list` is absent.
    #[serde(default = "default_list_name")]
    pub default_list: String,
    /// Extra variables set for the child.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

/// Cursor walk policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Skip `#`-disabled entries when picking the next host (default: false).
    #[serde(default)]
    pub skip_disabled: bool,
}

/// Generated screen windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Lists to generate windows for, in order.
    #[serde(default)]
    pub lists: Vec<String>,
    /// Gap between the highest hand-written window and the first generated one.
    #[serde(default = "default_start_offset")]
    pub start_offset: u32,
    /// Typed into every generated window first.
    #[serde(default = "default_setup_command")]
    pub setup_command: String,
    /// Typed into a list's header window. `{list}` is substituted.
    #[serde(default = "default_list_command")]
    pub list_command: String,
    /// Typed into a host window. `{host}` and `{comment}` are substituted.
    #[serde(default = "default_host_command")]
    pub host_command: String,
    /// Title of padding windows.
    #[serde(default = "default_filler_title")]
    pub filler_title: String,
}

fn default_list_dir() -> String {
    "~/.dsh".to_string()
}

fn default_cursor_file() -> String {
    "~/.nssh-last".to_string()
}

fn default_screenrc() -> String {
    "~/.screenrc-main".to_string()
}

fn default_program() -> String {
    "ssh".to_string()
}

fn default_hostname_env() -> String {
    "LC_UI_HOSTNAME".to_string()
}

fn default_true() -> bool {
    true
}

fn default_list_name() -> String {
    "list".to_string()
}

fn default_start_offset() -> u32 {
    10
}

fn default_setup_command() -> String {
    ". ~/.profile".to_string()
}

fn default_list_command() -> String {
    "cl-netstat.pl --list {list}".to_string()
}

fn default_host_command() -> String {
    r"nssh --comment '{comment}' {host}\015dstat -lrvn 60\015".to_string()
}

fn default_filler_title() -> String {
    "localhost".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            list_dir: default_list_dir(),
            cursor_file: default_cursor_file(),
            screenrc: default_screenrc(),
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            hostname_env: default_hostname_env(),
            resolve_names: true,
            default_list: default_list_name(),
            env: BTreeMap::new(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            start_offset: default_start_offset(),
            setup_command: default_setup_command(),
            list_command: default_list_command(),
            host_command: default_host_command(),
            filler_title: default_filler_title(),
        }
    }
}
