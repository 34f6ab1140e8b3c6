//! Bosun - Shell-command toolkit for standing up development server stacks.
//!
//! Bosun wraps the shell commands that provisioning scripts lean on (package
//! installers, file edits, archive tools, service control) behind an explicit
//! [`Executor`](shell::Executor) with emulate (dry-run) mode, verbosity-gated
//! narration, output capture, and an if/elif/else conditional helper.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ops`] - File, archive, system, service, and supervisor operations
//! - [`shell`] - Command execution, quoting, and conditionals
//! - [`ui`] - Terminal output styling
//!
//! # Example
//!
//! ```
//! use bosun::{ExecOptions, Executor};
//!
//! // Rehearse a command without side effects.
//! let mut sh = Executor::new();
//! sh.set_emulate(true);
//! let result = sh.execute("rm -rf /var/cache/app", &ExecOptions::default()).unwrap();
//! assert!(result.success);
//! ```

pub mod cli;
pub mod error;
pub mod ops;
pub mod shell;
pub mod ui;

pub use error::{BosunError, Result};
pub use shell::{ExecOptions, ExecResult, Executor};
