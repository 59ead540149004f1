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

use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use caretaker::commands::cmd_clean;
use filetime::{FileTime, set_file_mtime};

use crate::{integration_tests::quiet_global_args, test_utils::write_file};

fn age_file(path: &Path, days: u64) {
    let mtime = SystemTime::now() - Duration::from_secs(days * 24 * 60 * 60);
    set_file_mtime(path, FileTime::from_system_time(mtime)).unwrap();
}

#[test]
fn test_clean_deletes_old_and_suffixed_files() {
    let dir = tempfile::tempdir().unwrap();
    let tmp = dir.path().join("tmp");

    write_file(&tmp.join("ancient.txt"), b"old");
    age_file(&tmp.join("ancient.txt"), 10);
    write_file(&tmp.join("junk.cache"), b"cached");
    write_file(&tmp.join("rotated.log.old"), b"rotated");
    write_file(&tmp.join("keep.txt"), b"fresh");
    write_file(&tmp.join("keep.log"), b"active log");

    let global_args = quiet_global_args(dir.path());
    cmd_clean::run(
        &global_args,
        &cmd_clean::CmdArgs {
            dirs: vec![PathBuf::from("tmp")],
        },
    )
    .unwrap();

    assert!(!tmp.join("ancient.txt").exists());
    assert!(!tmp.join("junk.cache").exists());
    assert!(!tmp.join("rotated.log.old").exists());
    assert!(tmp.join("keep.txt").exists());
    assert!(tmp.join("keep.log").exists());

    let log = fs::read_to_string(dir.path().join("maintenance.log")).unwrap();
    assert!(log.contains("Temporary file cleanup finished: 3 files deleted"));
}

#[test]
fn test_clean_ignores_missing_directories() {
    let dir = tempfile::tempdir().unwrap();

    let global_args = quiet_global_args(dir.path());
    cmd_clean::run(
        &global_args,
        &cmd_clean::CmdArgs {
            dirs: vec![PathBuf::from("no_such_tmp")],
        },
    )
    .unwrap();

    let log = fs::read_to_string(dir.path().join("maintenance.log")).unwrap();
    assert!(log.contains("0 files deleted"));
}
