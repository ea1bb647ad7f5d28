//! Argument tokenizer: raw args → tagged tokens.
//!
//! First of two passes. Every raw token ends up in exactly one tagged token;
//! value-taking forms swallow their value here so the second pass never has
//! to look ahead.

use std::sync::LazyLock;

use regex::Regex;

use crate::args::registry::{DirectiveKind, FlagArity, FlagBehavior, FlagDef};
use crate::args::ArgsError;

/// `user@host`, with the character classes ssh users actually type.
static LOGIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_]+)@([-.A-Za-z0-9_]+)$").expect("login pattern is valid")
});

/// A classified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// ssh switch without a value (e.g. `-A`).
    Flag(String),
    /// ssh option together with the token it consumed (e.g. `-p 2222`).
    FlagWithValue { flag: String, value: String },
    /// nssh-owned directive with its value.
    Directive { kind: DirectiveKind, value: String },
    /// `user@host` shorthand.
    Login { user: String, host: String },
    /// Anything else: hostname, `next` or `reset`.
    Positional(String),
}

/// Tokenize raw args against the registry.
///
/// Fails on the first value-taking flag that is the final token.
pub fn tokenize(raw_args: &[String], registry: &[FlagDef]) -> Result<Vec<Token>, ArgsError> {
    let mut tokens = Vec::with_capacity(raw_args.len());
    let mut iter = raw_args.iter();

    while let Some(arg) = iter.next() {
        if let Some(def) = registry.iter().find(|d| d.matches(arg)) {
            let token = match def.arity {
                FlagArity::NoValue => Token::Flag(arg.clone()),
                FlagArity::RequiresValue => {
                    // ssh accepts `-o -x` style values, so no "looks like a flag" check
                    let value = iter
                        .next()
                        .cloned()
                        .ok_or_else(|| ArgsError::MissingValue {
                            flag: def.flag.to_string(),
                        })?;
                    match def.behavior {
                        FlagBehavior::Passthrough => Token::FlagWithValue {
                            flag: arg.clone(),
                            value,
                        },
                        FlagBehavior::Directive(kind) => Token::Directive { kind, value },
                    }
                }
            };
            tokens.push(token);
        } else if let Some(caps) = LOGIN_PATTERN.captures(arg) {
            tokens.push(Token::Login {
                user: caps[1].to_string(),
                host: caps[2].to_string(),
            });
        } else {
            tokens.push(Token::Positional(arg.clone()));
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::registry::flag_registry;

    fn raw(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    /// How many raw tokens `token` was built from.
    fn width(token: &Token) -> usize {
        match token {
            Token::Flag(_) | Token::Login { .. } | Token::Positional(_) => 1,
            Token::FlagWithValue { .. } | Token::Directive { .. } => 2,
        }
    }

    #[test]
    fn widths_cover_every_raw_token() {
        let args = raw(&["-A", "-p", "22", "--list", "web", "root@db1", "next"]);
        let tokens = tokenize(&args, &flag_registry()).unwrap();
        let total: usize = tokens.iter().map(width).sum();
        assert_eq!(total, args.len());
    }

    #[test]
    fn value_may_look_like_a_flag() {
        let tokens = tokenize(&raw(&["-o", "-v"]), &flag_registry()).unwrap();
        assert_eq!(
            tokens,
            vec![Token::FlagWithValue {
                flag: "-o".into(),
                value: "-v".into()
            }]
        );
    }

    #[test]
    fn login_requires_word_user() {
        let tokens = tokenize(&raw(&["a b@host"]), &flag_registry()).unwrap();
        assert_eq!(tokens, vec![Token::Positional("a b@host".into())]);
    }

    #[test]
    fn trailing_directive_is_an_error() {
        let err = tokenize(&raw(&["host", "--comment"]), &flag_registry()).unwrap_err();
        assert_eq!(
            err,
            ArgsError::MissingValue {
                flag: "--comment".into()
            }
        );
    }
}
