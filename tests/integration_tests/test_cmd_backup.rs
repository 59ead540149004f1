// caretaker is a host maintenance tool
// Copyright (C) 2025  The caretaker developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::{fs, path::PathBuf};

use caretaker::commands::cmd_backup;

use crate::{integration_tests::quiet_global_args, test_utils::write_file};

fn find_backup_dirs(destination: &std::path::Path) -> Vec<PathBuf> {
    fs::read_dir(destination)
        .unwrap()
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .unwrap()
                    .to_string_lossy()
                    .starts_with("backup_")
        })
        .collect()
}

#[test]
fn test_backup_copies_sources_into_timestamped_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("docs/a.txt"), b"hello backup");
    write_file(&dir.path().join("docs/sub/b.txt"), b"nested");
    write_file(
        &dir.path().join("maintenance.json"),
        br#"{ "backup_sources": ["docs"], "backup_destination": "backups" }"#,
    );

    let global_args = quiet_global_args(dir.path());
    cmd_backup::run(&global_args, &cmd_backup::CmdArgs { no_prune: true }).unwrap();

    let backups = find_backup_dirs(&dir.path().join("backups"));
    assert_eq!(backups.len(), 1);

    let docs = backups[0].join("docs");
    assert_eq!(fs::read(docs.join("a.txt")).unwrap(), b"hello backup");
    assert_eq!(fs::read(docs.join("sub/b.txt")).unwrap(), b"nested");

    let log = fs::read_to_string(dir.path().join("maintenance.log")).unwrap();
    assert!(log.contains("Backup completed"));
    assert!(log.contains("Backup finished"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_backed_up() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("docs/real.txt"), b"linked payload");
    std::os::unix::fs::symlink(
        dir.path().join("docs/real.txt"),
        dir.path().join("docs/link.txt"),
    )
    .unwrap();
    write_file(
        &dir.path().join("maintenance.json"),
        br#"{ "backup_sources": ["docs"], "backup_destination": "backups" }"#,
    );

    let global_args = quiet_global_args(dir.path());
    cmd_backup::run(&global_args, &cmd_backup::CmdArgs { no_prune: true }).unwrap();

    let backups = find_backup_dirs(&dir.path().join("backups"));
    assert_eq!(backups.len(), 1);

    // The link's target contents must be present in the backup tree.
    let docs = backups[0].join("docs");
    assert_eq!(fs::read(docs.join("real.txt")).unwrap(), b"linked payload");
    assert_eq!(fs::read(docs.join("link.txt")).unwrap(), b"linked payload");
}

#[test]
fn test_missing_source_is_skipped_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("docs/a.txt"), b"still here");
    write_file(
        &dir.path().join("maintenance.json"),
        br#"{ "backup_sources": ["docs", "no_such_dir"], "backup_destination": "backups" }"#,
    );

    let global_args = quiet_global_args(dir.path());
    cmd_backup::run(&global_args, &cmd_backup::CmdArgs { no_prune: true }).unwrap();

    let backups = find_backup_dirs(&dir.path().join("backups"));
    assert_eq!(backups.len(), 1);
    assert!(backups[0].join("docs/a.txt").exists());

    let log = fs::read_to_string(dir.path().join("maintenance.log")).unwrap();
    let warnings: Vec<&str> = log
        .lines()
        .filter(|line| line.contains("Backup source not found"))
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("no_such_dir"));
}

#[test]
fn test_backup_with_no_existing_source_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        &dir.path().join("maintenance.json"),
        br#"{ "backup_sources": ["no_such_dir"], "backup_destination": "backups" }"#,
    );

    let global_args = quiet_global_args(dir.path());
    cmd_backup::run(&global_args, &cmd_backup::CmdArgs { no_prune: true }).unwrap();

    // An empty backup directory is still created.
    let backups = find_backup_dirs(&dir.path().join("backups"));
    assert_eq!(backups.len(), 1);
    assert!(fs::read_dir(&backups[0]).unwrap().next().is_none());

    let log = fs::read_to_string(dir.path().join("maintenance.log")).unwrap();
    assert!(log.contains("Backup source not found"));
    assert!(!log.contains("[ERROR]"));
}

#[test]
fn test_backup_failure_is_logged_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    // A plain file where the destination's parent should be makes the
    // backup root impossible to create.
    write_file(&dir.path().join("blocker"), b"");
    write_file(
        &dir.path().join("maintenance.json"),
        br#"{ "backup_sources": ["docs"], "backup_destination": "blocker/backups" }"#,
    );

    let global_args = quiet_global_args(dir.path());
    cmd_backup::run(&global_args, &cmd_backup::CmdArgs { no_prune: true }).unwrap();

    let log = fs::read_to_string(dir.path().join("maintenance.log")).unwrap();
    assert!(log.contains("[ERROR] Backup failed"));
}
