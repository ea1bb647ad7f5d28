//! Pipeline: classified args + resolved host → everything needed to launch.

use crate::args::assembler::ClassifiedArgs;
use crate::args::env_builder::EnvSet;
use crate::config::LaunchConfig;

/// Ready-to-use parameters for the handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParams {
    /// Program to execute (normally "ssh").
    pub program: String,
    /// Pass-through args followed by the resolved host.
    pub args: Vec<String>,
    /// Environment variables to set for the child.
    pub env: Vec<(String, String)>,
    /// Name the user asked for, before resolution.
    pub display_host: String,
    /// Title comment, if any.
    pub comment: Option<String>,
}

/// Build launch parameters.
///
/// * `display_host` - the human-facing name (literal host or list entry)
/// * `real_host` - what the resolver made of it
/// * `comment` - `--comment` or the list entry's comment
pub fn build_launch_params(
    classified: &ClassifiedArgs,
    display_host: &str,
    real_host: &str,
    comment: Option<&str>,
    launch: &LaunchConfig,
) -> LaunchParams {
    let mut args = classified.passthrough.clone();
    args.push(real_host.to_string());

    // later entries override earlier ones when the child is spawned
    let env = EnvSet::new()
        .with_extra(
            launch
                .env
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
        .with_display_host(&launch.hostname_env, display_host)
        .build();

    LaunchParams {
        program: launch.program.clone(),
        args,
        env,
        display_host: display_host.to_string(),
        comment: comment.filter(|c| !c.is_empty()).map(str::to_string),
    }
}
