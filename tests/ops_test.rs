//! Integration tests for the operations layer, driving real commands
//! against a scratch directory.

use bosun::ops::{ArchiveFormat, Archives, Files, System, WriteMode};
use bosun::Executor;
use std::fs;
use tempfile::TempDir;

#[test]
fn provision_a_config_file_end_to_end() {
    let temp = TempDir::new().unwrap();
    let conf = temp.path().join("app.conf");

    let mut sh = Executor::new();
    let mut files = Files::new(&mut sh);

    assert!(files.write(&conf, "host=localhost\nport=8080\n", WriteMode::Overwrite));
    assert!(files.write(&conf, "debug=false\n", WriteMode::Append));
    assert!(files.replace(&conf, "localhost", "127.0.0.1"));

    assert!(files.contains(&conf, "127.0.0.1"));
    assert!(!files.contains(&conf, "localhost"));
    assert!(files.contains_ignoring_case(&conf, "DEBUG"));

    let content = files.read(&conf).unwrap();
    assert!(content.ends_with("debug=false\n"));
}

#[test]
fn stage_release_directory() {
    let temp = TempDir::new().unwrap();
    let mut sh = Executor::new();

    let release = temp.path().join("releases/v2");
    assert!(System::new(&mut sh).mkdir(&release, true));
    fs::write(release.join("app.bin"), "binary").unwrap();

    let current = temp.path().join("current");
    let mut files = Files::new(&mut sh);
    assert!(files.copy(&release, &current, true));
    assert!(current.join("app.bin").exists());

    let found = files.find(temp.path(), "app.bin").unwrap();
    assert_eq!(found.len(), 2);

    assert!(System::new(&mut sh).rm(&release, true));
    assert!(!release.exists());
}

#[test]
fn backup_and_restore_via_archive() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("dump.sql"), "select 1;").unwrap();

    let mut sh = Executor::new();
    let mut archives = Archives::new(&mut sh);

    let backup = temp.path().join("backups/data.tar.gz");
    assert!(archives.create(&data, &backup, ArchiveFormat::TarGz));

    fs::remove_dir_all(&data).unwrap();
    assert!(archives.extract(&backup, Some(temp.path())));
    assert_eq!(
        fs::read_to_string(temp.path().join("data/dump.sql")).unwrap(),
        "select 1;"
    );
}

#[test]
fn dry_run_rehearses_a_whole_flow_without_touching_disk() {
    let temp = TempDir::new().unwrap();
    let mut sh = Executor::new();
    sh.set_emulate(true);

    let conf = temp.path().join("nginx.conf");
    assert!(Files::new(&mut sh).write(&conf, "server {}", WriteMode::Overwrite));
    assert!(System::new(&mut sh).mkdir(&temp.path().join("www"), true));
    assert!(Archives::new(&mut sh).download("https://example.com/app.tar.gz", Some(&temp.path().join("app.tar.gz"))));

    let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
    assert!(entries.is_empty());
}
