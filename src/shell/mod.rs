//! Shell command execution.
//!
//! The heart of the crate: an explicit [`Executor`] that runs command lines
//! through the platform shell with emulate (dry-run) mode, verbosity-gated
//! narration, output capture, and an if/elif/else conditional helper, plus
//! the quoting utility every composed command line goes through.

pub mod conditional;
pub mod executor;
pub mod platform;
pub mod quote;

pub use executor::{ExecOptions, ExecResult, Executor};
pub use platform::{is_elevated, shell_invocation};
pub use quote::{join, quote, quote_path};
