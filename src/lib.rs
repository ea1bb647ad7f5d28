//! nssh: ssh by name, or by walking a host list one `next` at a time.
//!
//! ```text
//! nssh [ssh flags] [--list NAME] [--comment TEXT] [--user NAME] (host | user@host | next | reset)
//! ```

pub mod args;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod hostlist;
pub mod launch;
pub mod logging;
pub mod resolve;
pub mod screenrc;

pub use dispatch::{Dispatcher, Outcome};
pub use error::{ErrorKind, NsshError};
