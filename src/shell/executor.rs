//! The command executor.

use crate::error::{BosunError, Result};
use crate::shell::conditional::Chain;
use crate::shell::platform::shell_invocation;
use crate::shell::quote::quote;
use crate::ui::Theme;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Options for a single command execution.
#[derive(Debug, Clone)]
pub struct ExecOptions {
    /// Working directory override (must exist at call time).
    pub cwd: Option<PathBuf>,

    /// Capture stdout as the result payload (if false, the command's streams
    /// inherit the caller's console).
    pub capture: bool,

    /// Allow the executor to narrate the command line (verbosity-gated).
    /// Disabling this suppresses narration regardless of verbosity level.
    pub show_command: bool,

    /// Convert a non-zero exit into a [`BosunError::CommandFailed`].
    pub check: bool,

    /// Per-call emulate override (None inherits the executor's flag).
    pub emulate: Option<bool>,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            cwd: None,
            capture: false,
            show_command: true,
            check: false,
            emulate: None,
        }
    }
}

/// Result of executing a shell command.
///
/// Created fresh per invocation and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ExecResult {
    /// Exit code (None if the launch failed or the process died on a signal).
    pub exit_code: Option<i32>,

    /// Captured standard output, trimmed of a single trailing newline.
    /// Present only when capture was requested.
    pub stdout: Option<String>,

    /// Whether the command succeeded (exit code 0).
    pub success: bool,

    /// Execution duration.
    #[serde(skip)]
    pub duration: Duration,
}

impl ExecResult {
    /// Synthetic success returned in emulate mode.
    fn emulated(capture: bool) -> Self {
        Self {
            exit_code: Some(0),
            stdout: capture.then(String::new),
            success: true,
            duration: Duration::ZERO,
        }
    }

    /// Whether the command succeeded.
    pub fn ok(&self) -> bool {
        self.success
    }
}

/// Trim a single trailing newline (and a preceding carriage return) from
/// captured output. Trimming an already-trimmed string is a no-op.
fn trim_trailing_newline(s: &str) -> &str {
    let s = s.strip_suffix('\n').unwrap_or(s);
    s.strip_suffix('\r').unwrap_or(s)
}

/// Shell command executor.
///
/// An explicit context object owning the emulate flag, verbosity level,
/// default working directory, and the active conditional chain. Constructed
/// once per script run at the application boundary; independent instances
/// share nothing. Single-threaded, synchronous: each execution blocks until
/// the underlying process exits.
#[derive(Debug)]
pub struct Executor {
    emulate: bool,
    verbosity: u8,
    working_dir: PathBuf,
    theme: Theme,
    pub(crate) chain: Option<Chain>,
}

impl Executor {
    /// Create an executor rooted at the process's current directory.
    pub fn new() -> Self {
        let working_dir = std::env::current_dir().unwrap_or_default();
        Self {
            emulate: false,
            verbosity: 0,
            working_dir,
            theme: Theme::auto(),
            chain: None,
        }
    }

    /// Create an executor rooted at `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(BosunError::WorkingDirNotFound { path: dir });
        }
        let mut executor = Self::new();
        executor.working_dir = dir;
        Ok(executor)
    }

    /// Enable or disable emulate (dry-run) mode.
    ///
    /// While enabled, [`execute`](Self::execute) skips the process launch and
    /// reports synthetic success, so calling scripts can be rehearsed without
    /// side effects.
    pub fn set_emulate(&mut self, emulate: bool) {
        self.emulate = emulate;
    }

    /// Whether emulate mode is enabled.
    pub fn emulate(&self) -> bool {
        self.emulate
    }

    /// Set the verbosity level, clamped to 0–3.
    pub fn set_verbosity(&mut self, level: u8) {
        self.verbosity = level.min(3);
    }

    /// Current verbosity level.
    pub fn verbosity(&self) -> u8 {
        self.verbosity
    }

    /// Replace the output theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Default working directory for commands.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Change the default working directory for subsequent commands.
    ///
    /// The parent process's working directory is never touched.
    pub fn cd(&mut self, dir: impl AsRef<Path>) -> bool {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            self.error(&format!("Directory '{}' does not exist", dir.display()));
            return false;
        }
        self.working_dir = dir.to_path_buf();
        true
    }

    /// Execute a shell command.
    ///
    /// Fails only for programmer errors (empty command, nonexistent working
    /// directory override) and, in check mode, for non-zero exits. Runtime
    /// failures, including the launch mechanism itself failing, come back as
    /// an [`ExecResult`] so calling code always receives a result.
    pub fn execute(&mut self, command: &str, options: &ExecOptions) -> Result<ExecResult> {
        if command.trim().is_empty() {
            return Err(BosunError::EmptyCommand);
        }

        let cwd = match &options.cwd {
            Some(dir) => {
                if !dir.is_dir() {
                    return Err(BosunError::WorkingDirNotFound { path: dir.clone() });
                }
                dir.clone()
            }
            None => self.working_dir.clone(),
        };

        // Narration happens before the emulate check so a dry run with -v
        // still shows what would execute.
        if options.show_command && self.verbosity >= 1 {
            eprintln!("{}", self.theme.format_command(command));
        }

        if options.emulate.unwrap_or(self.emulate) {
            tracing::debug!(%command, "emulate mode, skipping execution");
            return Ok(ExecResult::emulated(options.capture));
        }

        let (shell, flag) = shell_invocation();
        let mut cmd = Command::new(&shell);
        cmd.arg(flag);
        cmd.arg(command);
        cmd.current_dir(&cwd);

        if options.capture {
            cmd.stdout(Stdio::piped());
            cmd.stderr(Stdio::piped());
        } else {
            cmd.stdout(Stdio::inherit());
            cmd.stderr(Stdio::inherit());
        }

        tracing::debug!(%command, cwd = %cwd.display(), "executing");
        let start = Instant::now();

        let output = match cmd.output() {
            Ok(output) => output,
            Err(err) => {
                // Launch failure: the shell could not be started at all.
                let duration = start.elapsed();
                if options.check {
                    return Err(BosunError::CommandFailed {
                        command: command.to_string(),
                        code: None,
                        output: err.to_string(),
                    });
                }
                return Ok(ExecResult {
                    exit_code: None,
                    stdout: options.capture.then(|| format!("failed to launch: {}", err)),
                    success: false,
                    duration,
                });
            }
        };

        let duration = start.elapsed();
        let success = output.status.success();
        let stdout = options.capture.then(|| {
            trim_trailing_newline(&String::from_utf8_lossy(&output.stdout)).to_string()
        });
        let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();

        if !success {
            if options.show_command && self.verbosity >= 1 {
                eprintln!(
                    "{}",
                    self.theme
                        .format_command_failed(command, output.status.code())
                );
            }
            if options.show_command && self.verbosity >= 2 && !stderr.is_empty() {
                eprintln!("{}", stderr);
            }
            if options.check {
                return Err(BosunError::CommandFailed {
                    command: command.to_string(),
                    code: output.status.code(),
                    output: if stderr.is_empty() {
                        stdout.clone().unwrap_or_default()
                    } else {
                        stderr
                    },
                });
            }
        }

        Ok(ExecResult {
            exit_code: output.status.code(),
            stdout,
            success,
            duration,
        })
    }

    /// Execute with default options.
    pub fn run(&mut self, command: &str) -> Result<ExecResult> {
        self.execute(command, &ExecOptions::default())
    }

    /// Execute quietly and return success/failure.
    pub fn run_ok(&mut self, command: &str) -> bool {
        let options = ExecOptions {
            capture: true,
            show_command: false,
            ..Default::default()
        };
        self.execute(command, &options)
            .map(|r| r.success)
            .unwrap_or(false)
    }

    /// Execute and return captured stdout.
    pub fn capture(&mut self, command: &str) -> Result<String> {
        let options = ExecOptions {
            capture: true,
            ..Default::default()
        };
        let result = self.execute(command, &options)?;
        Ok(result.stdout.unwrap_or_default())
    }

    /// Execute in a specific directory for the duration of the call.
    pub fn execute_in(&mut self, command: &str, dir: impl Into<PathBuf>) -> Result<ExecResult> {
        let options = ExecOptions {
            cwd: Some(dir.into()),
            ..Default::default()
        };
        self.execute(command, &options)
    }

    /// Launch a command detached from the current session, fire-and-forget.
    ///
    /// The child's streams go to the null device and no exit status is ever
    /// observed. Returns the child's PID, or `None` in emulate mode. For a
    /// readiness check, follow up with
    /// [`Services::wait_for_port`](crate::ops::Services::wait_for_port).
    pub fn spawn_detached(&mut self, command: &str) -> Result<Option<u32>> {
        if command.trim().is_empty() {
            return Err(BosunError::EmptyCommand);
        }
        if self.verbosity >= 1 {
            eprintln!("{}", self.theme.format_command(command));
        }
        if self.emulate {
            tracing::debug!(%command, "emulate mode, skipping background launch");
            return Ok(None);
        }

        let (shell, flag) = shell_invocation();
        let mut cmd = Command::new(&shell);
        cmd.arg(flag)
            .arg(command)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            // New process group, so the child outlives this process and
            // ignores its terminal signals.
            cmd.process_group(0);
        }

        let child = cmd.spawn()?;
        tracing::debug!(%command, pid = child.id(), "launched background command");
        Ok(Some(child.id()))
    }

    /// Print a message by dispatching `echo` through the executor.
    ///
    /// Routing through [`execute`](Self::execute) keeps printing subject to
    /// emulate mode like every other command.
    pub fn echo(&mut self, message: &str) {
        let command = format!("echo {}", quote(message));
        let options = ExecOptions {
            show_command: false,
            ..Default::default()
        };
        let _ = self.execute(&command, &options);
    }

    /// Print an informational line.
    pub fn info(&mut self, message: &str) {
        let line = self.theme.format_info(message);
        self.echo(&line);
    }

    /// Print a warning line.
    pub fn warning(&mut self, message: &str) {
        let line = self.theme.format_warning(message);
        self.echo(&line);
    }

    /// Print an error line.
    pub fn error(&mut self, message: &str) {
        let line = self.theme.format_error(message);
        self.echo(&line);
    }

    /// Print a success line.
    pub fn success(&mut self, message: &str) {
        let line = self.theme.format_success(message);
        self.echo(&line);
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}
