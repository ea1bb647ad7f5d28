//! Argument assembler: tagged tokens → [`ClassifiedArgs`].

use tracing::warn;

use crate::args::classifier::Token;
use crate::args::registry::{DirectiveKind, LIST_PREFIX};

/// What the invocation asks nssh to connect to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A literal hostname.
    Host(String),
    /// Advance the cursor of the selected list.
    Next,
    /// Forget the cursor.
    Reset,
}

impl Target {
    /// Interpret a bare token.
    pub fn from_positional(token: &str) -> Self {
        match token {
            "next" => Target::Next,
            "reset" => Target::Reset,
            other => Target::Host(other.to_string()),
        }
    }
}

/// Result of classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedArgs {
    /// Arguments forwarded to ssh, in the order they were given.
    pub passthrough: Vec<String>,
    /// List file name, already carrying the `machines.` prefix.
    pub list: Option<String>,
    /// Title comment from `--comment`.
    pub comment: Option<String>,
    /// Remote user from `--user` or `user@host` (last one wins).
    ///
    /// ssh already gets it through `passthrough` as `-o "User NAME"`; this
    /// copy is for callers and logging.
    pub user: Option<String>,
    /// Resolved target. The last bare token wins.
    pub target: Option<Target>,
}

/// Builder folding tokens into [`ClassifiedArgs`].
#[derive(Debug, Clone, Default)]
pub struct ArgAssembler {
    out: ClassifiedArgs,
}

impl ArgAssembler {
    /// Start with nothing classified.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold tokens in order.
    pub fn with_tokens(mut self, tokens: Vec<Token>) -> Self {
        for token in tokens {
            self.push(token);
        }
        self
    }

    fn push(&mut self, token: Token) {
        match token {
            Token::Flag(flag) => self.out.passthrough.push(flag),
            Token::FlagWithValue { flag, value } => {
                self.out.passthrough.push(flag);
                self.out.passthrough.push(value);
            }
            Token::Directive { kind, value } => match kind {
                DirectiveKind::List => self.out.list = Some(format!("{LIST_PREFIX}{value}")),
                DirectiveKind::Comment => self.out.comment = Some(value),
                DirectiveKind::User => self.set_user(value),
            },
            Token::Login { user, host } => {
                self.set_user(user);
                self.set_target(&host);
            }
            Token::Positional(arg) => self.set_target(&arg),
        }
    }

    fn set_user(&mut self, user: String) {
        self.out.passthrough.push("-o".into());
        self.out.passthrough.push(format!("User {user}"));
        self.out.user = Some(user);
    }

    fn set_target(&mut self, arg: &str) {
        if let Some(previous) = &self.out.target {
            warn!(?previous, replacement = arg, "several targets given, keeping the last");
        }
        self.out.target = Some(Target::from_positional(arg));
    }

    /// Build the final classification.
    pub fn build(self) -> ClassifiedArgs {
        self.out
    }
}
