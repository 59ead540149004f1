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

use caretaker::{commands::GlobalArgs, global::defaults};

mod test_cmd_backup;
mod test_cmd_clean;
mod test_cmd_run;

/// Global args rooted at a test directory with logging disabled.
fn quiet_global_args(workdir: &Path) -> GlobalArgs {
    GlobalArgs {
        workdir: Some(workdir.to_path_buf()),
        config: PathBuf::from(defaults::DEFAULT_CONFIG_FILE),
        log_file: PathBuf::from(defaults::DEFAULT_LOG_FILE),
        quiet: true,
        verbosity: None,
    }
}
