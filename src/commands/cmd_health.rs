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

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{commands::GlobalArgs, global::defaults, steps};

#[derive(Parser, Debug)]
pub struct CmdArgs {
    /// CSV file for health history, relative to the working directory
    #[clap(long, value_parser, default_value = defaults::HEALTH_CSV_FILE)]
    pub csv_file: PathBuf,
}

pub fn run(global_args: &GlobalArgs, args: &CmdArgs) -> Result<()> {
    let ctx = crate::commands::build_context(global_args);
    steps::health::run(&ctx, &ctx.resolve(&args.csv_file));
    Ok(())
}
