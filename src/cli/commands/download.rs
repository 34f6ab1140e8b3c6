//! The `download` command.

use crate::cli::args::DownloadArgs;
use crate::error::Result;
use crate::ops::Archives;
use crate::shell::Executor;

/// Download a file with curl.
pub fn run(sh: &mut Executor, args: &DownloadArgs) -> Result<i32> {
    let ok = Archives::new(sh).download(&args.url, args.output.as_deref());
    if ok {
        if let Some(output) = &args.output {
            sh.success(&format!("Downloaded to {}", output.display()));
        }
        Ok(0)
    } else {
        sh.error(&format!("Download failed: {}", args.url));
        Ok(1)
    }
}
