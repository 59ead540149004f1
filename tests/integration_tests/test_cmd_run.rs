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

use caretaker::{commands::cmd_run, steps::report::Report};
use chrono::Local;

use crate::{integration_tests::quiet_global_args, test_utils::write_file};

#[test]
fn test_run_executes_all_steps() {
    let dir = tempfile::tempdir().unwrap();
    write_file(&dir.path().join("docs/a.txt"), b"payload");
    write_file(&dir.path().join("tmp/junk.tmp"), b"junk");
    write_file(
        &dir.path().join("maintenance.json"),
        br#"{ "backup_sources": ["docs"], "backup_destination": "backups" }"#,
    );

    let global_args = quiet_global_args(dir.path());
    cmd_run::run(
        &global_args,
        &cmd_run::CmdArgs {
            no_prune: false,
            temp_dirs: vec![PathBuf::from("tmp")],
        },
    )
    .unwrap();

    // Backup landed.
    let backups: Vec<_> = fs::read_dir(dir.path().join("backups"))
        .unwrap()
        .flatten()
        .collect();
    assert_eq!(backups.len(), 1);
    assert!(backups[0].path().join("docs/a.txt").exists());

    // Temp file was swept.
    assert!(!dir.path().join("tmp/junk.tmp").exists());

    // Health history has a header and one row.
    let csv = fs::read_to_string(dir.path().join("system_health.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("timestamp,cpu_percent"));

    // The dated report parses and saw the backup.
    let report_name = format!("maintenance_report_{}.json", Local::now().format("%Y%m%d"));
    let report: Report =
        serde_json::from_str(&fs::read_to_string(dir.path().join(&report_name)).unwrap()).unwrap();
    assert_eq!(report.backup_status, "ok");
    assert!(!report.log_entries.is_empty());

    // The journal recorded the run.
    let log = fs::read_to_string(dir.path().join("maintenance.log")).unwrap();
    assert!(log.contains("Starting maintenance run"));
    assert!(log.contains("Maintenance run finished"));
}

#[test]
fn test_run_survives_a_failing_backup() {
    let dir = tempfile::tempdir().unwrap();
    // A plain file blocks creation of the backup root, failing the step.
    write_file(&dir.path().join("blocker"), b"");
    write_file(
        &dir.path().join("maintenance.json"),
        br#"{ "backup_sources": ["docs"], "backup_destination": "blocker/backups" }"#,
    );

    let global_args = quiet_global_args(dir.path());
    let result = cmd_run::run(
        &global_args,
        &cmd_run::CmdArgs {
            no_prune: false,
            temp_dirs: vec![PathBuf::from("tmp")],
        },
    );

    // The sequencer never propagates a step failure.
    assert!(result.is_ok());

    let log = fs::read_to_string(dir.path().join("maintenance.log")).unwrap();
    assert!(log.contains("[ERROR] Backup failed"));
    assert!(log.contains("Maintenance run finished"));
}
