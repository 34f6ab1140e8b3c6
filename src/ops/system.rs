//! System operations: packages, directories, users, environment.

use crate::shell::{is_elevated, join, quote, quote_path, Executor};
use std::fmt;
use std::path::Path;

/// Supported system package managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// apt (Debian, Ubuntu)
    Apt,
    /// yum (CentOS, RHEL)
    Yum,
    /// dnf (Fedora)
    Dnf,
    /// pacman (Arch)
    Pacman,
}

impl PackageManager {
    /// Probe the system for a supported package manager.
    pub fn detect(sh: &mut Executor) -> Option<Self> {
        let candidates = [
            ("apt", Self::Apt),
            ("yum", Self::Yum),
            ("dnf", Self::Dnf),
            ("pacman", Self::Pacman),
        ];
        candidates
            .into_iter()
            .find(|(binary, _)| sh.run_ok(&format!("which {}", binary)))
            .map(|(_, manager)| manager)
    }

    /// Build the install command line for a quoted package list.
    fn install_command(&self, packages: &str, sudo: &str) -> String {
        match self {
            Self::Apt => format!("{sudo}apt update && {sudo}apt install -y {packages}"),
            Self::Yum => format!("{sudo}yum install -y {packages}"),
            Self::Dnf => format!("{sudo}dnf install -y {packages}"),
            Self::Pacman => format!("{sudo}pacman -Sy --noconfirm {packages}"),
        }
    }

    /// Command that reports whether a package is installed.
    fn installed_probe(&self, package: &str) -> String {
        match self {
            Self::Apt => format!("dpkg -s {}", quote(package)),
            Self::Yum | Self::Dnf => format!("rpm -q {}", quote(package)),
            Self::Pacman => format!("pacman -Qi {}", quote(package)),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Apt => "apt",
            Self::Yum => "yum",
            Self::Dnf => "dnf",
            Self::Pacman => "pacman",
        };
        write!(f, "{}", name)
    }
}

/// System operations bound to an executor.
///
/// Caches the detected package manager for the lifetime of the instance.
pub struct System<'a> {
    sh: &'a mut Executor,
    package_manager: Option<PackageManager>,
}

impl<'a> System<'a> {
    /// Bind system operations to an executor.
    pub fn new(sh: &'a mut Executor) -> Self {
        Self {
            sh,
            package_manager: None,
        }
    }

    /// The system's package manager, probed once and cached.
    pub fn package_manager(&mut self) -> Option<PackageManager> {
        if let Some(manager) = self.package_manager {
            return Some(manager);
        }
        let manager = PackageManager::detect(self.sh);
        if let Some(manager) = manager {
            if self.sh.verbosity() > 0 {
                self.sh
                    .info(&format!("{} package manager detected", manager));
            }
        }
        self.package_manager = manager;
        manager
    }

    /// Install packages with the system's package manager.
    ///
    /// With `check_installed`, packages already present are filtered out
    /// before anything runs.
    pub fn install(&mut self, packages: &[&str], check_installed: bool) -> bool {
        if packages.is_empty() {
            return true;
        }

        let manager = match self.package_manager() {
            Some(manager) => manager,
            None => {
                self.sh.error("No supported package manager detected");
                return false;
            }
        };

        let mut pending: Vec<&str> = Vec::with_capacity(packages.len());
        for package in packages {
            if check_installed && self.sh.run_ok(&manager.installed_probe(package)) {
                self.sh.info(&format!("{} is already installed", package));
            } else {
                pending.push(package);
            }
        }
        if pending.is_empty() {
            return true;
        }

        let command = manager.install_command(&join(&pending), super::sudo_prefix());
        super::dispatch(self.sh, &command)
    }

    /// Remove a package and its configuration (apt-get purge).
    pub fn purge(&mut self, package: &str) -> bool {
        let command = format!(
            "{}apt-get purge -y {}*",
            super::sudo_prefix(),
            quote(package)
        );
        super::dispatch(self.sh, &command)
    }

    /// Create a directory (and parents).
    pub fn mkdir(&mut self, path: &Path, exist_ok: bool) -> bool {
        if path.exists() && !exist_ok {
            self.sh
                .error(&format!("Path '{}' already exists", path.display()));
            return false;
        }
        let command = format!("mkdir -p {}", quote_path(path));
        super::dispatch(self.sh, &command)
    }

    /// Remove a file or directory.
    pub fn rm(&mut self, path: &Path, recursive: bool) -> bool {
        if !path.exists() && !path.is_symlink() {
            self.sh
                .error(&format!("Path '{}' does not exist", path.display()));
            return false;
        }

        let command = if path.is_file() || path.is_symlink() {
            format!("rm {}", quote_path(path))
        } else if recursive {
            format!("rm -rf {}", quote_path(path))
        } else {
            format!("rmdir {}", quote_path(path))
        };
        super::dispatch(self.sh, &command)
    }

    /// Make sure sudo is available, installing it if necessary.
    pub fn ensure_sudo(&mut self) -> bool {
        if self.command_exists("sudo") {
            self.sh.info("sudo is already installed");
            return true;
        }
        if !is_elevated() {
            self.sh
                .error("sudo is not installed and this process cannot install it");
            return false;
        }

        self.sh
            .warning("sudo is not installed. Attempting to install it...");
        let manager = match self.package_manager() {
            Some(manager) => manager,
            None => {
                self.sh
                    .error("Could not install sudo: unsupported package manager");
                return false;
            }
        };
        // Running as root here, so no prefix.
        super::dispatch(self.sh, &manager.install_command("sudo", ""))
    }

    /// Check if a command exists in PATH.
    pub fn command_exists(&mut self, command: &str) -> bool {
        self.sh.run_ok(&format!("which {}", quote(command)))
    }

    /// Check if a system user exists.
    pub fn user_exists(&mut self, username: &str) -> bool {
        self.sh
            .run_ok(&format!("getent passwd {}", quote(username)))
    }

    /// Add an apt PPA repository. Requires software-properties-common.
    pub fn add_apt_repository(&mut self, ppa: &str) -> bool {
        let command = format!(
            "{}add-apt-repository -y {}",
            super::sudo_prefix(),
            quote(ppa)
        );
        super::dispatch(self.sh, &command)
    }

    /// Run composer install, optionally skipping Composer scripts.
    pub fn composer_install(&mut self, no_scripts: bool, dir: Option<&Path>) -> bool {
        let flags = if no_scripts { " --no-scripts" } else { "" };
        let command = format!("composer install{}", flags);
        match dir {
            Some(dir) => self
                .sh
                .execute_in(&command, dir)
                .map(|r| r.success)
                .unwrap_or(false),
            None => super::dispatch(self.sh, &command),
        }
    }

    /// Run npm install, optionally with a prefix directory.
    pub fn npm_install(&mut self, prefix: Option<&Path>) -> bool {
        let command = match prefix {
            Some(prefix) => format!("npm install --prefix {}", quote_path(prefix)),
            None => "npm install".to_string(),
        };
        super::dispatch(self.sh, &command)
    }

    /// Set an environment variable for this process and its children.
    ///
    /// The equivalent `export` is narrated through the executor so a
    /// rehearsal shows it, but the real mutation is in-process.
    pub fn set_env(&mut self, name: &str, value: &str) {
        let command = format!("export {}={}", name, quote(value));
        let options = crate::shell::ExecOptions {
            emulate: Some(true),
            ..Default::default()
        };
        let _ = self.sh.execute(&command, &options);
        std::env::set_var(name, value.trim());
    }

    /// Read an environment variable.
    pub fn env(&mut self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
