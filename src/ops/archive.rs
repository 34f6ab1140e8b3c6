//! Archive operations (tar, zip, gzip, download).

use crate::error::{BosunError, Result};
use crate::shell::{quote, quote_path, Executor};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported archive formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    TarGz,
    TarBz2,
    Zip,
}

impl ArchiveFormat {
    /// Detect the format from a file name's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else if name.ends_with(".tar.bz2") || name.ends_with(".tbz2") {
            Some(Self::TarBz2)
        } else if name.ends_with(".zip") {
            Some(Self::Zip)
        } else {
            None
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = BosunError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tar.gz" | "tgz" => Ok(Self::TarGz),
            "tar.bz2" | "tbz2" => Ok(Self::TarBz2),
            "zip" => Ok(Self::Zip),
            other => Err(BosunError::UnknownArchiveFormat {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TarGz => "tar.gz",
            Self::TarBz2 => "tar.bz2",
            Self::Zip => "zip",
        };
        write!(f, "{}", name)
    }
}

/// Archive operations bound to an executor.
pub struct Archives<'a> {
    sh: &'a mut Executor,
}

impl<'a> Archives<'a> {
    /// Bind archive operations to an executor.
    pub fn new(sh: &'a mut Executor) -> Self {
        Self { sh }
    }

    /// Create an archive of a file or directory.
    pub fn create(&mut self, source: &Path, archive: &Path, format: ArchiveFormat) -> bool {
        if !source.exists() {
            self.sh
                .error(&format!("Source '{}' does not exist", source.display()));
            return false;
        }

        if let Some(parent) = archive.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                let command = format!("mkdir -p {}", quote_path(parent));
                if !super::dispatch(self.sh, &command) {
                    self.sh.error(&format!(
                        "Failed to create archive directory '{}'",
                        parent.display()
                    ));
                    return false;
                }
            }
        }

        let base_dir = source.parent().filter(|p| !p.as_os_str().is_empty());
        let base_dir = base_dir.unwrap_or(Path::new("."));
        let name = match source.file_name() {
            Some(name) => PathBuf::from(name),
            None => {
                self.sh
                    .error(&format!("Source '{}' has no file name", source.display()));
                return false;
            }
        };

        let command = match format {
            ArchiveFormat::TarGz => format!(
                "tar -czf {} -C {} {}",
                quote_path(archive),
                quote_path(base_dir),
                quote_path(&name)
            ),
            ArchiveFormat::TarBz2 => format!(
                "tar -cjf {} -C {} {}",
                quote_path(archive),
                quote_path(base_dir),
                quote_path(&name)
            ),
            ArchiveFormat::Zip => {
                let recursive = if source.is_dir() { "-r " } else { "" };
                let absolute = std::path::absolute(archive)
                    .unwrap_or_else(|_| archive.to_path_buf());
                format!(
                    "cd {} && zip {}{} {}",
                    quote_path(base_dir),
                    recursive,
                    quote_path(&absolute),
                    quote_path(&name)
                )
            }
        };
        super::dispatch(self.sh, &command)
    }

    /// Extract an archive, detecting the format from its extension.
    pub fn extract(&mut self, archive: &Path, destination: Option<&Path>) -> bool {
        if !archive.exists() {
            self.sh
                .error(&format!("Archive '{}' does not exist", archive.display()));
            return false;
        }

        let format = match ArchiveFormat::from_path(archive) {
            Some(format) => format,
            None => {
                self.sh.error(&format!(
                    "Unsupported archive format for '{}'",
                    archive.display()
                ));
                return false;
            }
        };

        let command = match format {
            ArchiveFormat::TarGz => format!(
                "tar -xzf {}{}",
                quote_path(archive),
                tar_dest_option(destination)
            ),
            ArchiveFormat::TarBz2 => format!(
                "tar -xjf {}{}",
                quote_path(archive),
                tar_dest_option(destination)
            ),
            ArchiveFormat::Zip => match destination {
                Some(dest) => format!("unzip {} -d {}", quote_path(archive), quote_path(dest)),
                None => format!("unzip {}", quote_path(archive)),
            },
        };
        super::dispatch(self.sh, &command)
    }

    /// Compress a file with gzip.
    pub fn gzip(&mut self, file: &Path, keep_original: bool) -> bool {
        if !file.is_file() {
            self.sh.error(&format!(
                "File '{}' does not exist or is not a file",
                file.display()
            ));
            return false;
        }
        let keep = if keep_original { "-k " } else { "" };
        let command = format!("gzip {}{}", keep, quote_path(file));
        super::dispatch(self.sh, &command)
    }

    /// Decompress a gzipped file.
    pub fn gunzip(&mut self, file: &Path, keep_original: bool) -> bool {
        if !file.is_file() {
            self.sh.error(&format!(
                "File '{}' does not exist or is not a file",
                file.display()
            ));
            return false;
        }
        if !file.to_string_lossy().ends_with(".gz") {
            self.sh
                .error(&format!("File '{}' is not a gzipped file", file.display()));
            return false;
        }
        let keep = if keep_original { "-k " } else { "" };
        let command = format!("gunzip {}{}", keep, quote_path(file));
        super::dispatch(self.sh, &command)
    }

    /// Download a file with curl, following redirects.
    pub fn download(&mut self, url: &str, destination: Option<&Path>) -> bool {
        let command = match destination {
            Some(dest) => format!("curl -fL {} -o {}", quote(url), quote_path(dest)),
            None => format!("curl -fL {}", quote(url)),
        };
        super::dispatch(self.sh, &command)
    }
}

fn tar_dest_option(destination: Option<&Path>) -> String {
    match destination {
        Some(dest) => format!(" -C {}", quote_path(dest)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn format_parses_known_names() {
        assert_eq!(
            "tar.gz".parse::<ArchiveFormat>().unwrap(),
            ArchiveFormat::TarGz
        );
        assert_eq!(
            "tar.bz2".parse::<ArchiveFormat>().unwrap(),
            ArchiveFormat::TarBz2
        );
        assert_eq!("zip".parse::<ArchiveFormat>().unwrap(), ArchiveFormat::Zip);
    }

    #[test]
    fn unknown_format_is_a_configuration_error() {
        let err = "rar".parse::<ArchiveFormat>().unwrap_err();
        assert!(matches!(err, BosunError::UnknownArchiveFormat { .. }));
    }

    #[test]
    fn format_detected_from_extension() {
        assert_eq!(
            ArchiveFormat::from_path(Path::new("/a/b.tar.gz")),
            Some(ArchiveFormat::TarGz)
        );
        assert_eq!(
            ArchiveFormat::from_path(Path::new("b.tgz")),
            Some(ArchiveFormat::TarGz)
        );
        assert_eq!(
            ArchiveFormat::from_path(Path::new("b.tbz2")),
            Some(ArchiveFormat::TarBz2)
        );
        assert_eq!(
            ArchiveFormat::from_path(Path::new("b.zip")),
            Some(ArchiveFormat::Zip)
        );
        assert_eq!(ArchiveFormat::from_path(Path::new("b.rar")), None);
    }

    #[test]
    fn tar_roundtrip() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("site");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("index.html"), "<html></html>").unwrap();
        let archive = temp.path().join("site.tar.gz");

        let mut sh = Executor::new();
        let mut archives = Archives::new(&mut sh);

        assert!(archives.create(&source, &archive, ArchiveFormat::TarGz));
        assert!(archive.exists());

        let out = temp.path().join("restored");
        fs::create_dir(&out).unwrap();
        assert!(archives.extract(&archive, Some(&out)));
        assert!(out.join("site/index.html").exists());
    }

    #[test]
    fn create_missing_source_returns_false() {
        let temp = TempDir::new().unwrap();
        let mut sh = Executor::new();
        let mut archives = Archives::new(&mut sh);

        assert!(!archives.create(
            &temp.path().join("absent"),
            &temp.path().join("out.tar.gz"),
            ArchiveFormat::TarGz
        ));
    }

    #[test]
    fn create_makes_missing_archive_directory() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("data.txt");
        fs::write(&source, "x").unwrap();
        let archive = temp.path().join("nested/deep/out.tar.gz");

        let mut sh = Executor::new();
        let mut archives = Archives::new(&mut sh);

        assert!(archives.create(&source, &archive, ArchiveFormat::TarGz));
        assert!(archive.exists());
    }

    #[test]
    fn extract_missing_archive_returns_false() {
        let temp = TempDir::new().unwrap();
        let mut sh = Executor::new();
        let mut archives = Archives::new(&mut sh);

        assert!(!archives.extract(&temp.path().join("absent.tar.gz"), None));
    }

    #[test]
    fn extract_unknown_extension_returns_false() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("blob.rar");
        fs::write(&path, "").unwrap();

        let mut sh = Executor::new();
        let mut archives = Archives::new(&mut sh);

        assert!(!archives.extract(&path, None));
    }

    #[test]
    fn gzip_and_gunzip_keep_original() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("dump.sql");
        fs::write(&path, "select 1;").unwrap();

        let mut sh = Executor::new();
        let mut archives = Archives::new(&mut sh);

        assert!(archives.gzip(&path, true));
        let gz = temp.path().join("dump.sql.gz");
        assert!(gz.exists());
        assert!(path.exists());

        fs::remove_file(&path).unwrap();
        assert!(archives.gunzip(&gz, false));
        assert!(path.exists());
    }

    #[test]
    fn gzip_directory_returns_false() {
        let temp = TempDir::new().unwrap();
        let mut sh = Executor::new();
        let mut archives = Archives::new(&mut sh);

        assert!(!archives.gzip(temp.path(), false));
    }

    #[test]
    fn gunzip_rejects_non_gz_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("plain.txt");
        fs::write(&path, "").unwrap();

        let mut sh = Executor::new();
        let mut archives = Archives::new(&mut sh);

        assert!(!archives.gunzip(&path, false));
    }

    #[test]
    fn download_is_skipped_in_emulate_mode() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("artifact.tar.gz");

        let mut sh = Executor::new();
        sh.set_emulate(true);
        let mut archives = Archives::new(&mut sh);

        assert!(archives.download("https://example.com/artifact.tar.gz", Some(&dest)));
        assert!(!dest.exists());
    }
}
