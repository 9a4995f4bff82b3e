//! Plain-text grid tables with centered, multi-line cells.
//!
//! ```text
//! +-----+---------+
//! |  #  |  Movie  |
//! +=====+=========+
//! |  1  | Red One |
//! +-----+---------+
//! ```

/// A table of string cells. Cells may contain newlines; each line is
/// centered within its column.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(headers: &[S]) -> Table {
        Table {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing trailing cells render empty; extra cells are ignored.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut lines = vec![separator(&widths, '-')];
        lines.extend(render_row(&self.headers, &widths));
        lines.push(separator(&widths, '='));
        for row in &self.rows {
            lines.extend(render_row(row, &widths));
            lines.push(separator(&widths, '-'));
        }
        lines.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.headers.len())
            .map(|col| {
                std::iter::once(&self.headers)
                    .chain(&self.rows)
                    .filter_map(|row| row.get(col))
                    .flat_map(|cell| cell.lines())
                    .map(|line| line.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn separator(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for &w in widths {
        line.extend(std::iter::repeat(fill).take(w + 2));
        line.push('+');
    }
    line
}

fn render_row(cells: &[String], widths: &[usize]) -> Vec<String> {
    let split: Vec<Vec<&str>> = widths
        .iter()
        .enumerate()
        .map(|(col, _)| cells.get(col).map(|c| c.lines().collect()).unwrap_or_default())
        .collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(0).max(1);

    (0..height)
        .map(|i| {
            let mut line = String::from("|");
            for (cell, &w) in split.iter().zip(widths) {
                line.push(' ');
                line.push_str(&center(cell.get(i).copied().unwrap_or(""), w));
                line.push_str(" |");
            }
            line
        })
        .collect()
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
