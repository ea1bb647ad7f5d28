//! Environment builder: every variable handed to the child in one place.

/// Builder for environment variables passed to the launched process.
#[derive(Debug, Clone)]
pub struct EnvSet {
    vars: Vec<(String, String)>,
}

impl EnvSet {
    /// Create an empty environment set.
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    /// Human-facing hostname, readable on the remote side (e.g. for PS1).
    ///
    /// `LC_*` names survive most sshd `AcceptEnv` defaults.
    pub fn with_display_host(mut self, var: &str, host: &str) -> Self {
        self.vars.push((var.into(), host.into()));
        self
    }

    /// Add arbitrary extra environment variables.
    pub fn with_extra(mut self, extra: Vec<(String, String)>) -> Self {
        self.vars.extend(extra);
        self
    }

    /// Build the final environment variable list.
    pub fn build(self) -> Vec<(String, String)> {
        self.vars
    }
}

impl Default for EnvSet {
    fn default() -> Self {
        Self::new()
    }
}
