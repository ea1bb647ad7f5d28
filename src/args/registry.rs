//! Flag registry: single source of truth for every token form nssh knows.

/// How nssh handles a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagBehavior {
    /// ssh flag, forwarded verbatim, never interpreted.
    Passthrough,
    /// nssh's own directive, consumed, never forwarded as-is.
    Directive(DirectiveKind),
}

/// Which directive a wrapper-owned flag selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `--list NAME`: pick the named host list for `next`.
    List,
    /// `--comment TEXT`: annotation shown in the terminal title.
    Comment,
    /// `--user NAME`: remote login user, rewritten to `-o "User NAME"`.
    User,
}

/// Whether a flag takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// Boolean switch (e.g. `-A`, `-v`).
    NoValue,
    /// Consumes the following token, whatever it looks like (e.g. `-o`, `--list`).
    RequiresValue,
}

/// A single flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Exact token (e.g. `-p`, `--list`).
    pub flag: &'static str,
    /// Does it take a value?
    pub arity: FlagArity,
    /// How nssh handles it.
    pub behavior: FlagBehavior,
    /// Human-readable description (for usage text).
    pub description: &'static str,
}

/// ssh switches that never take a value.
pub const SSH_SWITCHES: &[&str] = &[
    "-1", "-2", "-4", "-6", "-A", "-a", "-C", "-f", "-g", "-K", "-k", "-M", "-N", "-n", "-q", "-s",
    "-T", "-t", "-V", "-v", "-X", "-x", "-Y",
];

/// ssh options that consume the next token as their value.
pub const SSH_VALUE_FLAGS: &[&str] = &[
    "-b", "-c", "-D", "-e", "-F", "-i", "-L", "-l", "-m", "-O", "-o", "-p", "-R", "-S", "-w",
];

/// Namespace prefix turning `--list foo` into the list file `machines.foo`.
pub const LIST_PREFIX: &str = "machines.";

/// Build the complete flag registry.
///
/// Directives come first, then every enumerated ssh flag in short form.
pub fn flag_registry() -> Vec<FlagDef> {
    let mut registry = vec![
        FlagDef {
            flag: "--list",
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Directive(DirectiveKind::List),
            description: "Host list used by `next` (resolves to machines.<NAME>)",
        },
        FlagDef {
            flag: "--comment",
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Directive(DirectiveKind::Comment),
            description: "Comment placed after the hostname in the terminal title",
        },
        FlagDef {
            flag: "--user",
            arity: FlagArity::RequiresValue,
            behavior: FlagBehavior::Directive(DirectiveKind::User),
            description: "Remote login user",
        },
    ];

    registry.extend(SSH_SWITCHES.iter().map(|&flag| FlagDef {
        flag,
        arity: FlagArity::NoValue,
        behavior: FlagBehavior::Passthrough,
        description: "ssh switch",
    }));
    registry.extend(SSH_VALUE_FLAGS.iter().map(|&flag| FlagDef {
        flag,
        arity: FlagArity::RequiresValue,
        behavior: FlagBehavior::Passthrough,
        description: "ssh option with value",
    }));

    registry
}

impl FlagDef {
    /// Check if this definition matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        arg == self.flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_ssh_flag_is_registered_once() {
        let registry = flag_registry();
        for flag in SSH_SWITCHES.iter().chain(SSH_VALUE_FLAGS) {
            let hits = registry.iter().filter(|d| d.matches(flag)).count();
            assert_eq!(hits, 1, "{flag} registered {hits} times");
        }
    }

    #[test]
    fn value_flags_require_value() {
        let registry = flag_registry();
        let o = registry.iter().find(|d| d.matches("-o")).unwrap();
        assert_eq!(o.arity, FlagArity::RequiresValue);
        let v = registry.iter().find(|d| d.matches("-v")).unwrap();
        assert_eq!(v.arity, FlagArity::NoValue);
    }

    #[test]
    fn long_ssh_forms_are_not_registered() {
        let registry = flag_registry();
        assert!(!registry.iter().any(|d| d.matches("-vv")));
        assert!(!registry.iter().any(|d| d.matches("--listing")));
    }
}
