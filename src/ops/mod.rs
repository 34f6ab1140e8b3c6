//! Operations built on the command executor.
//!
//! Thin wrappers that compose shell command lines (through the quoting
//! utility) and hand them to an [`Executor`](crate::shell::Executor). Each
//! wrapper borrows the executor, so emulate mode, verbosity, and narration
//! flow through unchanged. Runtime failures are narrated and reported as
//! booleans, never raised.

pub mod archive;
pub mod file;
pub mod service;
pub mod supervisor;
pub mod system;

pub use archive::{ArchiveFormat, Archives};
pub use file::{Files, WriteMode};
pub use service::Services;
pub use supervisor::Supervisor;
pub use system::{PackageManager, System};

use crate::shell::{is_elevated, Executor};

/// Run a mutating command, mapping any outcome to success/failure.
///
/// Output streams to the console; emulate mode short-circuits to success.
pub(crate) fn dispatch(sh: &mut Executor, command: &str) -> bool {
    sh.run(command).map(|r| r.success).unwrap_or(false)
}

/// `sudo ` prefix for privileged commands, empty when already elevated.
pub(crate) fn sudo_prefix() -> &'static str {
    if is_elevated() {
        ""
    } else {
        "sudo "
    }
}
