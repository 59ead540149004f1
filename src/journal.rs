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
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Local;

use crate::{global::defaults::JOURNAL_TIMESTAMP_FORMAT, ui};

/// Severity of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Warning => write!(f, "WARNING"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// The append-only maintenance log. Every entry is one
/// `[<timestamp>] [<LEVEL>] <message>` line; the file is opened, appended
/// and closed per write. Entries are echoed to the console.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn info(&self, message: &str) {
        self.append(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.append(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.append(Level::Error, message);
    }

    /// Appends one entry to the log file and echoes it to the console.
    /// The file write is best effort: a failed write must never abort a
    /// maintenance step.
    pub fn append(&self, level: Level, message: &str) {
        let line = format!(
            "[{}] [{}] {}",
            Local::now().format(JOURNAL_TIMESTAMP_FORMAT),
            level,
            message
        );

        match level {
            Level::Info => {
                ui::cli::log!("{line}");
            }
            Level::Warning => {
                ui::cli::warning!("{message}");
            }
            Level::Error => {
                ui::cli::error!("{message}");
            }
        }

        if let Err(e) = self.write_line(&line) {
            ui::cli::error!("Failed to write to log file '{}': {e}", self.path.display());
        }
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }

    /// Returns the last `n` lines of the log file. A missing or unreadable
    /// file yields an empty list.
    pub fn tail(&self, n: usize) -> Vec<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => {
                let lines: Vec<&str> = text.lines().collect();
                lines[lines.len().saturating_sub(n)..]
                    .iter()
                    .map(|line| line.to_string())
                    .collect()
            }
            Err(_) => Vec::new(),
        }
    }
}
