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

use chrono::Local;
use serde::{Deserialize, Serialize};
use sysinfo::System;

use crate::{
    context::Context,
    global::defaults::{REPORT_DATE_FORMAT, REPORT_FILE_PREFIX, REPORT_TAIL_LINES},
    steps::StepOutcome,
    utils,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub os_version: String,
    pub arch: String,
}

/// The daily maintenance report, serialized as pretty JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: String,
    pub system_info: SystemInfo,
    pub backup_status: String,
    pub log_entries: Vec<String>,
}

/// Assembles a report from the current host and journal state.
pub fn build(ctx: &Context) -> Report {
    Report {
        generated_at: Local::now().to_rfc3339(),
        system_info: SystemInfo {
            os: System::name().unwrap_or_else(|| "unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "unknown".to_string()),
            arch: std::env::consts::ARCH.to_string(),
        },
        backup_status: backup_status(ctx),
        log_entries: ctx.journal.tail(REPORT_TAIL_LINES),
    }
}

/// "ok" when the backup destination directory exists, even if empty.
fn backup_status(ctx: &Context) -> String {
    if ctx.backup_destination().is_dir() {
        "ok"
    } else {
        "missing"
    }
    .to_string()
}

/// Runs the report step: write the dated JSON report into the working
/// directory. Reports for the same day overwrite each other.
pub fn run(ctx: &Context) -> StepOutcome {
    let report = build(ctx);

    let file_name = format!(
        "{}{}.json",
        REPORT_FILE_PREFIX,
        Local::now().format(REPORT_DATE_FORMAT)
    );
    let path = ctx.workdir.join(&file_name);

    if let Err(e) = utils::save_json_pretty(&report, &path) {
        ctx.journal.error(&format!("Could not write report: {e}"));
        return StepOutcome::failed("report", e.to_string());
    }

    ctx.journal
        .info(&format!("Report written: {}", path.display()));

    StepOutcome::ok("report", file_name)
}
