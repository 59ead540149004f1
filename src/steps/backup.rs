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
    time::Duration,
};

use anyhow::{Context as AnyhowContext, Result, anyhow};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    context::Context,
    global::defaults::{BACKUP_DATE_FORMAT, BACKUP_DIR_PREFIX, BACKUP_TIMESTAMP_FORMAT},
    journal::Journal,
    steps::StepOutcome,
    ui,
    utils::{format_count, format_size},
};

/// Runs the backup step: copy all configured sources into a new timestamped
/// directory, then prune expired backups unless `prune` is false.
pub fn run(ctx: &Context, prune: bool) -> StepOutcome {
    ctx.journal.info("Starting backup");

    let backup_dir = match create_backup(ctx) {
        Ok(dir) => dir,
        Err(e) => {
            ctx.journal.error(&format!("Backup failed: {e}"));
            return StepOutcome::failed("backup", e.to_string());
        }
    };

    if prune {
        match prune_old_backups(
            &ctx.backup_destination(),
            ctx.config.backup_retention_days,
            Local::now(),
            &ctx.journal,
        ) {
            Ok(removed) if removed > 0 => {
                ctx.journal.info(&format!(
                    "Pruned {}",
                    format_count(removed, "old backup", "old backups")
                ));
            }
            Ok(_) => (),
            Err(e) => {
                // Pruning failures do not undo a successful backup.
                ctx.journal.error(&format!("Could not prune old backups: {e}"));
            }
        }
    }

    StepOutcome::ok("backup", backup_dir.display().to_string())
}

/// Creates the timestamped backup directory and copies every configured
/// source into it. Missing sources are logged and skipped, never an error,
/// so a run where nothing exists still yields an (empty) backup.
fn create_backup(ctx: &Context) -> Result<PathBuf> {
    let destination = ctx.backup_destination();
    fs::create_dir_all(&destination)
        .with_context(|| format!("Could not create '{}'", destination.display()))?;

    let dir_name = format!(
        "{}{}",
        BACKUP_DIR_PREFIX,
        Local::now().format(BACKUP_TIMESTAMP_FORMAT)
    );
    let backup_dir = destination.join(&dir_name);
    fs::create_dir(&backup_dir)
        .with_context(|| format!("Could not create '{}'", backup_dir.display()))?;

    let spinner = ProgressBar::new_spinner().with_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")?
            .tick_chars(ui::SPINNER_TICK_CHARS),
    );
    spinner.enable_steady_tick(Duration::from_millis(
        1000 / ui::PROGRESS_REFRESH_RATE_HZ as u64,
    ));

    let mut total_bytes = 0;
    for source in &ctx.config.backup_sources {
        let source = ctx.resolve(source);
        if !source.exists() {
            ctx.journal
                .warning(&format!("Backup source not found: {}", source.display()));
            continue;
        }

        let target_name = source
            .file_name()
            .ok_or_else(|| anyhow!("Invalid backup source '{}'", source.display()))?;
        let target = backup_dir.join(target_name);

        spinner.set_message(format!("Copying {}", source.display()));
        total_bytes += copy_tree(&source, &target)?;

        ctx.journal.info(&format!(
            "Backup completed: {} -> {}",
            source.display(),
            target.display()
        ));
    }
    spinner.finish_and_clear();

    ctx.journal.info(&format!(
        "Backup finished: {} ({})",
        backup_dir.display(),
        format_size(total_bytes)
    ));

    Ok(backup_dir)
}

/// Recursively copies a directory tree (or a single file) and returns the
/// number of bytes copied. Symlinks are followed, so the link target's
/// contents land in the backup; dangling links and special files are skipped.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<u64> {
    if src.is_file() {
        return fs::copy(src, dst)
            .with_context(|| format!("Could not copy '{}'", src.display()));
    }

    fs::create_dir_all(dst).with_context(|| format!("Could not create '{}'", dst.display()))?;

    let mut total = 0;
    for entry in
        fs::read_dir(src).with_context(|| format!("Could not read '{}'", src.display()))?
    {
        let entry = entry?;
        let path = entry.path();
        let target = dst.join(entry.file_name());

        if path.is_dir() {
            total += copy_tree(&path, &target)?;
        } else if path.is_file() {
            ui::cli::verbose_1!("copy {}", path.display());
            total += fs::copy(&path, &target)
                .with_context(|| format!("Could not copy '{}'", path.display()))?;
        }
    }

    Ok(total)
}

/// Deletes backup directories older than the retention window and returns
/// how many were removed. A directory's age comes from the date encoded in
/// its name, not from filesystem metadata.
pub fn prune_old_backups(
    destination: &Path,
    retention_days: i64,
    now: DateTime<Local>,
    journal: &Journal,
) -> Result<usize> {
    let cutoff = (now - chrono::Duration::days(retention_days)).naive_local();

    let mut removed = 0;
    for entry in fs::read_dir(destination)
        .with_context(|| format!("Could not read '{}'", destination.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let Some(date) = parse_backup_date(&name.to_string_lossy()) else {
            continue;
        };

        if date.and_time(NaiveTime::MIN) < cutoff {
            fs::remove_dir_all(entry.path())
                .with_context(|| format!("Could not remove '{}'", entry.path().display()))?;
            journal.info(&format!("Removed old backup: {}", entry.path().display()));
            removed += 1;
        }
    }

    Ok(removed)
}

/// Extracts the date from a `backup_YYYYMMDD_HHMMSS` directory name.
/// Only the date token is parsed; names without a valid one are ignored.
fn parse_backup_date(name: &str) -> Option<NaiveDate> {
    let rest = name.strip_prefix(BACKUP_DIR_PREFIX)?;
    let date_token = rest.split('_').next()?;
    NaiveDate::parse_from_str(date_token, BACKUP_DATE_FORMAT).ok()
}
