//! Platform-specific shell discovery.

use std::path::PathBuf;

/// Resolve the shell executable and its command flag.
///
/// On Unix this honors `$SHELL` and falls back to `/bin/sh`; on Windows it
/// honors `%COMSPEC%` and falls back to `cmd.exe`. Commands are always passed
/// as a single string argument after the flag, so the shell performs word
/// splitting, pipes, and redirection.
pub fn shell_invocation() -> (PathBuf, &'static str) {
    if cfg!(target_os = "windows") {
        let shell = std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"));
        (shell, "/C")
    } else {
        let shell = std::env::var("SHELL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/bin/sh"));
        (shell, "-c")
    }
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_invocation_returns_flag_for_platform() {
        let (shell, flag) = shell_invocation();
        assert!(!shell.as_os_str().is_empty());
        if cfg!(target_os = "windows") {
            assert_eq!(flag, "/C");
        } else {
            assert_eq!(flag, "-c");
        }
    }

    #[test]
    fn is_elevated_does_not_panic() {
        let _ = is_elevated();
    }
}
