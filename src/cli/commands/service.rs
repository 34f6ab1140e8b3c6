//! The `service` command.

use crate::cli::args::{ServiceAction, ServiceArgs};
use crate::error::Result;
use crate::ops::Services;
use crate::shell::Executor;
use std::time::Duration;

/// Control a system service, optionally waiting for readiness.
pub fn run(sh: &mut Executor, args: &ServiceArgs) -> Result<i32> {
    let mut services = Services::new(sh);

    let ok = match args.action {
        ServiceAction::Start => services.start(&args.name),
        ServiceAction::Stop => services.stop(&args.name),
        ServiceAction::Restart => services.restart(&args.name),
        ServiceAction::Status => services.status(&args.name),
    };
    if !ok {
        return Ok(1);
    }

    if let Some(port) = args.wait_port {
        let timeout = Duration::from_secs(args.timeout);
        if !services.wait_for_port("127.0.0.1", port, timeout) {
            return Ok(1);
        }
        sh.success(&format!("{} is accepting connections on port {}", args.name, port));
    }

    Ok(0)
}
