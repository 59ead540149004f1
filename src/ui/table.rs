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

/// Column alignment for [`Table`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alignment {
    Left,
    Right,
}

/// A small fixed-width table renderer for command summaries.
pub struct Table {
    alignments: Vec<Alignment>,
    rows: Vec<Vec<String>>,
    padding: usize,
}

impl Table {
    /// Creates a table with one alignment per column.
    pub fn new_with_alignments(alignments: Vec<Alignment>) -> Self {
        Self {
            alignments,
            rows: Vec::new(),
            padding: 1,
        }
    }

    /// Adds a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Renders the table to a String.
    pub fn render(&self) -> String {
        let columns = self
            .alignments
            .len()
            .max(self.rows.iter().map(Vec::len).max().unwrap_or(0));
        if columns == 0 {
            return String::new();
        }

        let mut widths = vec![0_usize; columns];
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(visible_len(cell));
            }
        }

        let rule_len = widths.iter().map(|w| w + 2 * self.padding).sum::<usize>()
            + columns.saturating_sub(1) * 2;
        let rule = format!("{}\n", "-".repeat(rule_len));

        let mut out = String::new();
        out.push_str(&rule);
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let fill = widths[i] - visible_len(cell) + self.padding;
                match self.alignments.get(i).copied().unwrap_or(Alignment::Left) {
                    Alignment::Left => {
                        out.push_str(&" ".repeat(self.padding));
                        out.push_str(cell);
                        out.push_str(&" ".repeat(fill));
                    }
                    Alignment::Right => {
                        out.push_str(&" ".repeat(fill));
                        out.push_str(cell);
                        out.push_str(&" ".repeat(self.padding));
                    }
                }
                if i + 1 < row.len() {
                    out.push_str("  ");
                }
            }
            out.push('\n');
        }
        out.push_str(&rule);

        out
    }
}

/// The "visible" length of a string, ignoring ANSI escape sequences.
fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_ansi_escape = false;

    for c in s.chars() {
        if in_ansi_escape {
            if c == 'm' {
                in_ansi_escape = false;
            }
        } else if c == '\x1b' {
            in_ansi_escape = true;
        } else {
            len += 1;
        }
    }
    len
}
