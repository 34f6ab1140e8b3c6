//! The `archive` command.

use crate::cli::args::ArchiveArgs;
use crate::error::Result;
use crate::ops::{ArchiveFormat, Archives};
use crate::shell::Executor;

/// Create an archive from a file or directory.
pub fn run(sh: &mut Executor, args: &ArchiveArgs) -> Result<i32> {
    let format: ArchiveFormat = args.format.parse()?;

    let ok = Archives::new(sh).create(&args.source, &args.archive, format);
    if ok {
        sh.success(&format!("Created {}", args.archive.display()));
        Ok(0)
    } else {
        Ok(1)
    }
}
