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

use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::{Context as AnyhowContext, Result};
use chrono::{DateTime, Local};
use sysinfo::{Disks, Networks, System};

use crate::{config::Config, context::Context, steps::StepOutcome};

pub const CSV_HEADER: &str =
    "timestamp,cpu_percent,memory_percent,disk_percent,disk_free_bytes,net_bytes_sent,net_bytes_recv";

/// One point-in-time measurement of host health.
#[derive(Debug, Clone)]
pub struct HealthSnapshot {
    pub timestamp: DateTime<Local>,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    pub disk_free_bytes: u64,
    pub net_bytes_sent: u64,
    pub net_bytes_recv: u64,
}

/// Samples CPU, memory, disk and network counters. CPU usage needs two
/// refreshes separated by the minimum sampling interval.
pub fn sample() -> HealthSnapshot {
    let mut system = System::new();

    system.refresh_cpu();
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    system.refresh_cpu();
    let cpu_percent = system.global_cpu_info().cpu_usage() as f64;

    system.refresh_memory();
    let total_memory = system.total_memory();
    let memory_percent = if total_memory > 0 {
        (system.used_memory() as f64 / total_memory as f64) * 100.0
    } else {
        0.0
    };

    // Root filesystem usage: the disk whose mount point is "/", or the
    // first disk when there is none (non-Unix hosts).
    let disks = Disks::new_with_refreshed_list();
    let root = disks
        .iter()
        .find(|d| d.mount_point() == Path::new("/"))
        .or_else(|| disks.iter().next());
    let (disk_percent, disk_free_bytes) = match root {
        Some(disk) if disk.total_space() > 0 => {
            let used = disk.total_space() - disk.available_space();
            (
                (used as f64 / disk.total_space() as f64) * 100.0,
                disk.available_space(),
            )
        }
        _ => (0.0, 0),
    };

    let networks = Networks::new_with_refreshed_list();
    let mut net_bytes_sent = 0;
    let mut net_bytes_recv = 0;
    for (_name, data) in &networks {
        net_bytes_sent += data.total_transmitted();
        net_bytes_recv += data.total_received();
    }

    HealthSnapshot {
        timestamp: Local::now(),
        cpu_percent,
        memory_percent,
        disk_percent,
        disk_free_bytes,
        net_bytes_sent,
        net_bytes_recv,
    }
}

/// Compares a snapshot against the configured thresholds and returns one
/// alert message per exceeded threshold, disk first.
pub fn evaluate(snapshot: &HealthSnapshot, config: &Config) -> Vec<String> {
    let mut alerts = Vec::new();

    if snapshot.disk_percent > config.disk_usage_threshold {
        alerts.push(format!(
            "Disk usage is high: {:.1}% (threshold {:.1}%)",
            snapshot.disk_percent, config.disk_usage_threshold
        ));
    }
    if snapshot.memory_percent > config.memory_usage_threshold {
        alerts.push(format!(
            "Memory usage is high: {:.1}% (threshold {:.1}%)",
            snapshot.memory_percent, config.memory_usage_threshold
        ));
    }
    if snapshot.cpu_percent > config.cpu_usage_threshold {
        alerts.push(format!(
            "CPU usage is high: {:.1}% (threshold {:.1}%)",
            snapshot.cpu_percent, config.cpu_usage_threshold
        ));
    }

    alerts
}

/// Appends a snapshot row to the health CSV, writing the header line first
/// if the file does not exist yet.
pub fn append_csv(path: &Path, snapshot: &HealthSnapshot) -> Result<()> {
    let write_header = !path.exists();

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Could not open '{}'", path.display()))?;

    if write_header {
        writeln!(file, "{CSV_HEADER}")?;
    }
    writeln!(
        file,
        "{},{:.1},{:.1},{:.1},{},{},{}",
        snapshot.timestamp.to_rfc3339(),
        snapshot.cpu_percent,
        snapshot.memory_percent,
        snapshot.disk_percent,
        snapshot.disk_free_bytes,
        snapshot.net_bytes_sent,
        snapshot.net_bytes_recv
    )?;

    Ok(())
}

/// Runs the health check step: sample, log, alert and record to CSV.
/// A CSV write failure is logged but does not fail the step.
pub fn run(ctx: &Context, csv_path: &Path) -> StepOutcome {
    let snapshot = sample();

    ctx.journal.info(&format!(
        "System status - CPU: {:.1}% Memory: {:.1}% Disk: {:.1}%",
        snapshot.cpu_percent, snapshot.memory_percent, snapshot.disk_percent
    ));

    let alerts = evaluate(&snapshot, &ctx.config);
    for alert in &alerts {
        ctx.journal.warning(alert);
    }

    if let Err(e) = append_csv(csv_path, &snapshot) {
        ctx.journal.error(&format!("Could not record health data: {e}"));
    }

    if alerts.is_empty() {
        StepOutcome::ok("health", "no alerts")
    } else {
        StepOutcome::ok(
            "health",
            crate::utils::format_count(alerts.len(), "alert", "alerts"),
        )
    }
}
