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

pub mod backup;
pub mod dependencies;
pub mod health;
pub mod report;
pub mod temp_clean;

/// The result of one maintenance step. Steps are best effort: they report
/// failure here instead of propagating errors to the sequencer.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub name: &'static str,
    pub success: bool,
    pub detail: String,
}

impl StepOutcome {
    pub fn ok(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            success: true,
            detail: detail.into(),
        }
    }

    pub fn failed(name: &'static str, detail: impl Into<String>) -> Self {
        Self {
            name,
            success: false,
            detail: detail.into(),
        }
    }
}
