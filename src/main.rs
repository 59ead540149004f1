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

use clap::Parser;

use caretaker::commands::{self, Cli};
use caretaker::{global, ui};

fn main() {
    let args = Cli::parse();
    global::set_global_opts_with_args(&args.global_args);

    if let Err(e) = commands::run(&args) {
        ui::cli::error!("{e}");
        std::process::exit(1);
    }
}
