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

// -- Well-known file names --
pub const DEFAULT_CONFIG_FILE: &str = "maintenance.json";
pub const DEFAULT_LOG_FILE: &str = "maintenance.log";
pub const HEALTH_CSV_FILE: &str = "system_health.csv";
pub const REPORT_FILE_PREFIX: &str = "maintenance_report_";

// -- Configuration defaults --
// Every configuration key has a default so that a missing, partial or
// malformed configuration file still yields a fully populated Config.
pub const DEFAULT_BACKUP_SOURCES: &[&str] = &["./docs", "./src"];
pub const DEFAULT_BACKUP_DESTINATION: &str = "./backups";
pub const DEFAULT_RETENTION_DAYS: i64 = 30;
pub const DEFAULT_CPU_THRESHOLD: f64 = 90.0;
pub const DEFAULT_MEMORY_THRESHOLD: f64 = 85.0;
pub const DEFAULT_DISK_THRESHOLD: f64 = 80.0;

// -- Backup naming --
// Backup directories are named backup_<YYYYMMDD_HHMMSS>. Retention pruning
// only looks at the date token; the time of day is ignored.
pub const BACKUP_DIR_PREFIX: &str = "backup_";
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
pub const BACKUP_DATE_FORMAT: &str = "%Y%m%d";

// -- Temporary file cleanup --
pub const TEMP_SCAN_DIRS: &[&str] = &["/tmp", "./tmp", "./temp"];
pub const TEMP_SUFFIXES: &[&str] = &[".tmp", ".temp", ".log.old", ".cache"];
pub const TEMP_MAX_AGE_DAYS: u64 = 7;

// -- Dependency manifests --
pub const NPM_MANIFEST: &str = "package.json";
pub const PIP_MANIFEST: &str = "requirements.txt";

// -- Journal & report --
pub const JOURNAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const REPORT_DATE_FORMAT: &str = "%Y%m%d";
pub const REPORT_TAIL_LINES: usize = 10;

pub const DEFAULT_VERBOSITY: u32 = 1;
