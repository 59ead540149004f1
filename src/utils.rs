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

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};

#[allow(non_upper_case_globals)]
pub mod size {
    pub const KiB: u64 = 1024;
    pub const MiB: u64 = KiB * 1024;
    pub const GiB: u64 = MiB * 1024;
    pub const TiB: u64 = GiB * 1024;
}

pub fn format_size(bytes: u64) -> String {
    if bytes >= size::TiB {
        format!("{:.2} TiB", (bytes as f64) / (size::TiB as f64))
    } else if bytes >= size::GiB {
        format!("{:.2} GiB", (bytes as f64) / (size::GiB as f64))
    } else if bytes >= size::MiB {
        format!("{:.2} MiB", (bytes as f64) / (size::MiB as f64))
    } else if bytes >= size::KiB {
        format!("{:.2} KiB", (bytes as f64) / (size::KiB as f64))
    } else {
        format!("{} B", bytes)
    }
}

pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Serializes a struct to JSON and saves it to a file.
/// The output is formatted to be legible.
pub fn save_json_pretty<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not create '{}'", path.display()))?;
    serde_json::to_writer_pretty(file, data)?;
    Ok(())
}

/// Deserializes a JSON from a file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Could not open '{}'", path.display()))?;
    let data = serde_json::from_reader(file)?;
    Ok(data)
}

pub fn pretty_print_duration(duration: std::time::Duration) -> String {
    let total_seconds = duration.as_secs();

    if total_seconds >= 3600 {
        format!(
            "{}h {}m {}s",
            total_seconds / 3600,
            (total_seconds % 3600) / 60,
            total_seconds % 60
        )
    } else if total_seconds >= 60 {
        format!("{}m {}s", total_seconds / 60, total_seconds % 60)
    } else if total_seconds >= 1 {
        format!("{}.{}s", total_seconds, duration.subsec_millis() / 100)
    } else {
        format!("{}ms", duration.subsec_millis())
    }
}
