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
use colored::Colorize;

use crate::{
    commands::GlobalArgs,
    context::Context,
    global::defaults,
    steps::{self, StepOutcome},
    ui::{
        self,
        table::{Alignment, Table},
    },
    utils::pretty_print_duration,
};

#[derive(Parser, Debug, Default)]
pub struct CmdArgs {
    /// Skip pruning old backups
    #[clap(long, value_parser)]
    pub no_prune: bool,

    /// Directory to sweep for temporary files (repeatable)
    #[clap(long = "temp-dir", value_parser)]
    pub temp_dirs: Vec<PathBuf>,
}

pub fn run(global_args: &GlobalArgs, args: &CmdArgs) -> Result<()> {
    let ctx = crate::commands::build_context(global_args);
    run_steps(&ctx, args);
    Ok(())
}

/// Executes all maintenance steps in order. Steps are independent: a failed
/// step is reported in the summary, never propagated.
pub fn run_steps(ctx: &Context, args: &CmdArgs) -> Vec<StepOutcome> {
    let start_time = std::time::Instant::now();

    ctx.journal.info("Starting maintenance run");

    let temp_dirs: Vec<PathBuf> = if args.temp_dirs.is_empty() {
        defaults::TEMP_SCAN_DIRS.iter().map(PathBuf::from).collect()
    } else {
        args.temp_dirs.clone()
    };

    let outcomes = vec![
        steps::health::run(ctx, &ctx.resolve(std::path::Path::new(defaults::HEALTH_CSV_FILE))),
        steps::backup::run(ctx, !args.no_prune),
        steps::temp_clean::run(ctx, &temp_dirs),
        steps::dependencies::run(ctx),
        steps::report::run(ctx),
    ];

    ctx.journal.info("Maintenance run finished");

    let mut table = Table::new_with_alignments(vec![Alignment::Left, Alignment::Right]);
    for outcome in &outcomes {
        let status = if outcome.success {
            "OK".bold().green().to_string()
        } else {
            "FAILED".bold().red().to_string()
        };
        table.add_row(vec![outcome.name.to_string(), status]);
    }
    ui::cli::log!("{}", table.render());
    ui::cli::log!(
        "Finished in {}",
        pretty_print_duration(start_time.elapsed())
    );

    outcomes
}
