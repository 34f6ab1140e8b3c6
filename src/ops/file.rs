//! File operations.
//!
//! Mutations (copy, move, permissions, in-place edits) dispatch shell
//! commands so they respect emulate mode; existence probes and reads go
//! straight to the filesystem, since rehearsing a script still needs to see
//! the real world.

use crate::error::{BosunError, Result};
use crate::shell::{quote, quote_path, Executor};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// How [`Files::write`] treats an existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file's contents.
    Overwrite,
    /// Append to the file, creating it if absent.
    Append,
}

impl FromStr for WriteMode {
    type Err = BosunError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "w" | "overwrite" => Ok(Self::Overwrite),
            "a" | "append" => Ok(Self::Append),
            other => Err(BosunError::InvalidWriteMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Append => write!(f, "append"),
        }
    }
}

/// File operations bound to an executor.
pub struct Files<'a> {
    sh: &'a mut Executor,
}

impl<'a> Files<'a> {
    /// Bind file operations to an executor.
    pub fn new(sh: &'a mut Executor) -> Self {
        Self { sh }
    }

    /// Check if a file or directory exists.
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Check if a directory exists.
    pub fn folder_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Write content to a file.
    pub fn write(&mut self, path: &Path, content: &str, mode: WriteMode) -> bool {
        if self.sh.emulate() {
            self.sh.info(&format!(
                "Would write {} bytes to {}",
                content.len(),
                path.display()
            ));
            return true;
        }

        let result = match mode {
            WriteMode::Overwrite => fs::write(path, content),
            WriteMode::Append => {
                use std::io::Write;
                fs::OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(path)
                    .and_then(|mut file| file.write_all(content.as_bytes()))
            }
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                self.sh
                    .error(&format!("Failed to write '{}': {}", path.display(), err));
                false
            }
        }
    }

    /// Read a file's contents.
    pub fn read(&mut self, path: &Path) -> Option<String> {
        if !path.exists() {
            self.sh
                .error(&format!("File '{}' does not exist", path.display()));
            return None;
        }
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(err) => {
                self.sh
                    .error(&format!("Failed to read '{}': {}", path.display(), err));
                None
            }
        }
    }

    /// Replace every occurrence of `pattern` in a file, in place, via sed.
    ///
    /// `pattern` is matched literally, not as a regular expression.
    pub fn replace(&mut self, path: &Path, pattern: &str, replacement: &str) -> bool {
        if !path.is_file() {
            self.sh.error(&format!(
                "File '{}' does not exist or is not a file",
                path.display()
            ));
            return false;
        }

        let script = format!(
            "s|{}|{}|g",
            sed_escape_pattern(pattern),
            sed_escape_replacement(replacement)
        );
        let command = format!("sed -i {} {}", quote(&script), quote_path(path));
        super::dispatch(self.sh, &command)
    }

    /// Check if a file contains a literal string (via grep).
    pub fn contains(&mut self, path: &Path, needle: &str) -> bool {
        if !path.is_file() {
            return false;
        }
        let command = format!("grep -qF {} {}", quote(needle), quote_path(path));
        self.sh.run_ok(&command)
    }

    /// Check if a file contains a string, ignoring case.
    pub fn contains_ignoring_case(&mut self, path: &Path, needle: &str) -> bool {
        match fs::read_to_string(path) {
            Ok(content) => content.to_lowercase().contains(&needle.to_lowercase()),
            Err(_) => false,
        }
    }

    /// Copy a file or directory.
    ///
    /// For directories, `recursive` copies contents; otherwise only the
    /// directory itself is recreated at the destination.
    pub fn copy(&mut self, source: &Path, dest: &Path, recursive: bool) -> bool {
        if !source.exists() {
            self.sh
                .error(&format!("Source '{}' does not exist", source.display()));
            return false;
        }

        let command = if source.is_file() {
            format!("cp {} {}", quote_path(source), quote_path(dest))
        } else if source.is_dir() {
            if recursive {
                format!("cp -r {} {}", quote_path(source), quote_path(dest))
            } else {
                format!("mkdir -p {}", quote_path(dest))
            }
        } else {
            return false;
        };
        super::dispatch(self.sh, &command)
    }

    /// Move or rename a file or directory.
    pub fn mv(&mut self, source: &Path, dest: &Path) -> bool {
        if !source.exists() {
            self.sh
                .error(&format!("Source '{}' does not exist", source.display()));
            return false;
        }
        let command = format!("mv {} {}", quote_path(source), quote_path(dest));
        super::dispatch(self.sh, &command)
    }

    /// Find files under a directory matching a name pattern.
    ///
    /// Returns `None` when the directory does not exist.
    pub fn find(&mut self, dir: &Path, pattern: &str) -> Option<Vec<String>> {
        if !dir.is_dir() {
            self.sh
                .error(&format!("Directory '{}' does not exist", dir.display()));
            return None;
        }
        let command = format!("find {} -name {}", quote_path(dir), quote(pattern));
        let output = self.sh.capture(&command).ok()?;
        Some(
            output
                .lines()
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Change file permissions.
    pub fn chmod(&mut self, path: &Path, mode: &str, recursive: bool) -> bool {
        if !path.exists() {
            self.sh
                .error(&format!("Path '{}' does not exist", path.display()));
            return false;
        }
        let flag = if recursive { "-R " } else { "" };
        let command = format!("chmod {}{} {}", flag, quote(mode), quote_path(path));
        super::dispatch(self.sh, &command)
    }

    /// Change file ownership.
    pub fn chown(&mut self, path: &Path, owner: &str, group: Option<&str>, recursive: bool) -> bool {
        if !path.exists() {
            self.sh
                .error(&format!("Path '{}' does not exist", path.display()));
            return false;
        }
        let target = match group {
            Some(group) => format!("{}:{}", owner, group),
            None => owner.to_string(),
        };
        let flag = if recursive { "-R " } else { "" };
        let command = format!("chown {}{} {}", flag, quote(&target), quote_path(path));
        super::dispatch(self.sh, &command)
    }

    /// Return the last `n` lines of a file.
    pub fn tail(&mut self, path: &Path, n: usize) -> Option<String> {
        let command = format!("tail -n {} {}", n, quote_path(path));
        self.sh.capture(&command).ok()
    }
}

/// Escape a literal string for use as a sed pattern with `|` as delimiter.
fn sed_escape_pattern(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if "\\|.*[]^$".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Escape a literal string for use as a sed replacement with `|` as delimiter.
fn sed_escape_replacement(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if "\\|&".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
