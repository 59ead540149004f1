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

use crate::{
    context::Context,
    global::defaults::{TEMP_MAX_AGE_DAYS, TEMP_SUFFIXES},
    steps::StepOutcome,
    ui,
    utils::{format_count, format_size},
};

#[derive(Debug, Default, Clone, Copy)]
pub struct SweepStats {
    pub files_deleted: usize,
    pub bytes_freed: u64,
}

/// Runs the temp cleanup step over the given directories. Directories that
/// do not exist are skipped; individual deletion failures are swallowed so
/// one locked file never aborts the sweep.
pub fn run(ctx: &Context, dirs: &[PathBuf]) -> StepOutcome {
    let now = SystemTime::now();
    let mut stats = SweepStats::default();

    for dir in dirs {
        let dir = ctx.resolve(dir);
        if dir.is_dir() {
            sweep_dir(&dir, now, &mut stats);
        }
    }

    let detail = format!(
        "{}, {} freed",
        format_count(stats.files_deleted, "file deleted", "files deleted"),
        format_size(stats.bytes_freed)
    );
    ctx.journal
        .info(&format!("Temporary file cleanup finished: {detail}"));

    StepOutcome::ok("cleanup", detail)
}

/// Recursively sweeps one directory. Every regular file is considered;
/// directories themselves are never removed.
pub fn sweep_dir(dir: &Path, now: SystemTime, stats: &mut SweepStats) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            sweep_dir(&path, now, stats);
            continue;
        }
        if !path.is_file() || !should_delete(&path, now) {
            continue;
        }

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        if fs::remove_file(&path).is_ok() {
            ui::cli::verbose_2!("deleted {}", path.display());
            stats.files_deleted += 1;
            stats.bytes_freed += size;
        }
    }
}

/// A file is deleted when it is older than the age limit or its name ends
/// in one of the temp suffixes. Unreadable mtimes count as not old.
pub fn should_delete(path: &Path, now: SystemTime) -> bool {
    let max_age = Duration::from_secs(TEMP_MAX_AGE_DAYS * 24 * 60 * 60);

    let is_old = fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|mtime| now.duration_since(mtime).ok())
        .is_some_and(|age| age > max_age);

    is_old || has_temp_suffix(path)
}

/// Matches multi-part suffixes like `.log.old` against the whole file name,
/// not just the final extension.
fn has_temp_suffix(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    TEMP_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}
