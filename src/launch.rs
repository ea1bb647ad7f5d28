//! Handoff to the remote-login program.

use std::io::{self, Write};
use std::process::{Command, ExitStatus};

use crate::args::LaunchParams;

/// GNU screen window title escape: `ESC k <title> ESC \`.
pub fn terminal_title(host: &str, comment: Option<&str>) -> String {
    match comment.filter(|c| !c.is_empty()) {
        Some(comment) => format!("\x1bk{host} [{comment}]\x1b\\"),
        None => format!("\x1bk{host}\x1b\\"),
    }
}

/// Print the title line for `params` to `out`.
pub fn write_title(out: &mut impl Write, params: &LaunchParams) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        terminal_title(&params.display_host, params.comment.as_deref())
    )?;
    out.flush()
}

/// Run the program with inherited stdio and wait for it.
///
/// Arguments go to the child as a literal vector; no shell is involved.
pub fn spawn_and_wait(params: &LaunchParams) -> io::Result<ExitStatus> {
    tracing::info!(program = %params.program, args = ?params.args, "launching");
    Command::new(&params.program)
        .args(&params.args)
        .envs(params.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .status()
}

/// Exit code mirroring the child's status (128 + signal when killed).
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}
