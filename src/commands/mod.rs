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
use clap::{ArgGroup, Parser, Subcommand};

use crate::{context::Context, global::defaults};

pub mod cmd_backup;
pub mod cmd_clean;
pub mod cmd_deps;
pub mod cmd_health;
pub mod cmd_report;
pub mod cmd_run;

// CLI arguments
#[derive(Parser, Debug)]
#[clap(
    version = env!("CARGO_PKG_VERSION"), // Version from crate metadata
    about = "caretaker host maintenance tool",
)]
pub struct Cli {
    // Subcommand
    #[command(subcommand)]
    pub command: Command,

    // Global arguments
    #[clap(flatten)]
    pub global_args: GlobalArgs,
}

// List of commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run all maintenance steps
    Run(cmd_run::CmdArgs),
    /// Take a system health snapshot
    Health(cmd_health::CmdArgs),
    /// Back up the configured sources
    Backup(cmd_backup::CmdArgs),
    /// Sweep temporary files
    Clean(cmd_clean::CmdArgs),
    /// Check project dependencies
    Deps(cmd_deps::CmdArgs),
    /// Write the maintenance report
    Report(cmd_report::CmdArgs),
}

#[derive(Parser, Debug)]
#[clap(group = ArgGroup::new("verbosity_group").multiple(true))]
pub struct GlobalArgs {
    /// Working directory (defaults to the current directory)
    #[clap(short = 'C', long, value_parser)]
    pub workdir: Option<PathBuf>,

    /// Config file, relative to the working directory unless absolute
    #[clap(short = 'c', long, value_parser, default_value = defaults::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Log file, relative to the working directory unless absolute
    #[clap(long, value_parser, default_value = defaults::DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Disable logging (verbosity = 0)
    #[clap(long, value_parser, group = "verbosity_group")]
    pub quiet: bool,

    /// Set the verbosity level [0-3]
    #[clap(short = 'v', long, value_parser, group = "verbosity_group")]
    pub verbosity: Option<u32>,
}

pub(crate) fn build_context(global_args: &GlobalArgs) -> Context {
    let workdir = global_args
        .workdir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    Context::new(workdir, &global_args.config, &global_args.log_file)
}

pub fn run(args: &Cli) -> Result<()> {
    match &args.command {
        Command::Run(cmd_args) => cmd_run::run(&args.global_args, cmd_args),
        Command::Health(cmd_args) => cmd_health::run(&args.global_args, cmd_args),
        Command::Backup(cmd_args) => cmd_backup::run(&args.global_args, cmd_args),
        Command::Clean(cmd_args) => cmd_clean::run(&args.global_args, cmd_args),
        Command::Deps(cmd_args) => cmd_deps::run(&args.global_args, cmd_args),
        Command::Report(cmd_args) => cmd_report::run(&args.global_args, cmd_args),
    }
}
