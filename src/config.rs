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

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{global::defaults, journal::Journal, utils};

/// Maintenance settings loaded from the JSON config file. Every field is
/// optional in the file; missing fields fall back to the built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub backup_sources: Vec<PathBuf>,
    pub backup_destination: PathBuf,
    pub backup_retention_days: i64,
    pub cpu_usage_threshold: f64,
    pub memory_usage_threshold: f64,
    pub disk_usage_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backup_sources: defaults::DEFAULT_BACKUP_SOURCES
                .iter()
                .map(PathBuf::from)
                .collect(),
            backup_destination: PathBuf::from(defaults::DEFAULT_BACKUP_DESTINATION),
            backup_retention_days: defaults::DEFAULT_RETENTION_DAYS,
            cpu_usage_threshold: defaults::DEFAULT_CPU_THRESHOLD,
            memory_usage_threshold: defaults::DEFAULT_MEMORY_THRESHOLD,
            disk_usage_threshold: defaults::DEFAULT_DISK_THRESHOLD,
        }
    }
}

impl Config {
    /// Loads the config from `path`. A missing file yields the defaults
    /// silently; an unreadable or malformed file yields the defaults and
    /// leaves a warning in the journal.
    pub fn load_or_default(path: &Path, journal: &Journal) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match utils::load_json::<Config>(path) {
            Ok(config) => config,
            Err(e) => {
                journal.warning(&format!(
                    "Could not load config file '{}': {e}. Using defaults",
                    path.display()
                ));
                Self::default()
            }
        }
    }
}
