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

use crate::{config::Config, journal::Journal};

/// Everything a maintenance step needs: the working directory, the loaded
/// configuration and the shared journal.
#[derive(Debug, Clone)]
pub struct Context {
    pub workdir: PathBuf,
    pub config: Config,
    pub journal: Journal,
}

impl Context {
    /// Builds a context rooted at `workdir`. Relative config and log paths
    /// are resolved against the working directory.
    pub fn new(workdir: PathBuf, config_file: &Path, log_file: &Path) -> Self {
        let journal = Journal::new(join_workdir(&workdir, log_file));
        let config = Config::load_or_default(&join_workdir(&workdir, config_file), &journal);

        Self {
            workdir,
            config,
            journal,
        }
    }

    /// Resolves a path against the working directory. Absolute paths are
    /// returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        join_workdir(&self.workdir, path)
    }

    pub fn backup_destination(&self) -> PathBuf {
        self.resolve(&self.config.backup_destination)
    }
}

fn join_workdir(workdir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workdir.join(path)
    }
}
