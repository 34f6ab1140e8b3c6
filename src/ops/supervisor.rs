//! Supervisor (supervisord/supervisorctl) control.

use crate::shell::{quote, quote_path, Executor};
use std::path::Path;

/// Supervisor operations bound to an executor.
pub struct Supervisor<'a> {
    sh: &'a mut Executor,
}

impl<'a> Supervisor<'a> {
    /// Bind supervisor operations to an executor.
    pub fn new(sh: &'a mut Executor) -> Self {
        Self { sh }
    }

    /// Start the supervisord daemon with a configuration file.
    pub fn init(&mut self, config_file: &Path) -> bool {
        let command = format!(
            "{}supervisord -c {}",
            super::sudo_prefix(),
            quote_path(config_file)
        );
        super::dispatch(self.sh, &command)
    }

    /// Start all managed programs.
    pub fn start_all(&mut self) -> bool {
        self.ctl("start all")
    }

    /// Stop all managed programs.
    pub fn stop_all(&mut self) -> bool {
        self.ctl("stop all")
    }

    /// Restart all managed programs.
    pub fn restart_all(&mut self) -> bool {
        self.ctl("restart all")
    }

    /// Report the status of all managed programs.
    pub fn status(&mut self) -> bool {
        self.ctl("status")
    }

    /// Start one managed program.
    pub fn start_program(&mut self, program: &str) -> bool {
        self.ctl(&format!("start {}", quote(program)))
    }

    /// Stop one managed program.
    pub fn stop_program(&mut self, program: &str) -> bool {
        self.ctl(&format!("stop {}", quote(program)))
    }

    /// Restart one managed program.
    pub fn restart_program(&mut self, program: &str) -> bool {
        self.ctl(&format!("restart {}", quote(program)))
    }

    /// Reread configuration files.
    pub fn reread(&mut self) -> bool {
        self.ctl("reread")
    }

    /// Apply configuration changes.
    pub fn update(&mut self) -> bool {
        self.ctl("update")
    }

    fn ctl(&mut self, args: &str) -> bool {
        let command = format!("{}supervisorctl {}", super::sudo_prefix(), args);
        super::dispatch(self.sh, &command)
    }
}
