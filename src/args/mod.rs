//! Argument handling pipeline for nssh.
//!
//! ```text
//! Raw argv → Tokenize → Assemble → ClassifiedArgs → LaunchParams
//! ```
//!
//! ssh's own option syntax is only understood as far as the registry
//! enumerates it; everything nssh does not own is forwarded untouched.

mod assembler;
mod classifier;
mod env_builder;
mod pipeline;
mod registry;

use thiserror::Error;

pub use assembler::{ArgAssembler, ClassifiedArgs, Target};
pub use classifier::{tokenize, Token};
pub use env_builder::EnvSet;
pub use pipeline::{build_launch_params, LaunchParams};
pub use registry::{
    flag_registry, DirectiveKind, FlagArity, FlagBehavior, FlagDef, LIST_PREFIX, SSH_SWITCHES,
    SSH_VALUE_FLAGS,
};

/// Errors produced while classifying the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{flag}: missing argument value")]
    MissingValue { flag: String },

    #[error("no hostname given (expected a host, user@host, `next` or `reset`)")]
    MissingTarget,
}

/// Classify raw args: tokenize, then fold the tokens.
pub fn classify(raw_args: &[String]) -> Result<ClassifiedArgs, ArgsError> {
    let tokens = tokenize(raw_args, &flag_registry())?;
    tracing::debug!(?tokens, "tokenized arguments");
    Ok(ArgAssembler::new().with_tokens(tokens).build())
}
