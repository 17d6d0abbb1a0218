//! Column layout for the default listing mode.
//!
//! Names are packed into at most [`MAX_COLUMNS`] columns and read
//! top-to-bottom within a column, then left-to-right across columns. The
//! column count is lowered one at a time until the widest row fits the
//! display width; a single column is used as-is even when it still
//! overflows, so a listing is always rendered.

use std::iter;

/// Preferred number of columns to start packing with.
const MAX_COLUMNS: usize = 3;
/// Cells between adjacent columns.
const COLUMN_SPACING: usize = 2;

/// On-screen cell count of `s`: single-byte characters take one cell,
/// multi-byte characters two.
pub fn display_width(s: &str) -> usize {
    s.chars().map(|c| if c.len_utf8() == 1 { 1 } else { 2 }).sum()
}

/// Lay `names` out as rows no wider than `width` cells when possible.
/// An empty input produces no rows at all.
pub fn layout(names: &[&str], width: usize) -> Vec<String> {
    if names.is_empty() {
        return Vec::new();
    }

    let mut columns = MAX_COLUMNS;
    let (cols, col_widths) = loop {
        // Sequential slices of ceil(n / columns) names each; the tail
        // slices can be shorter or missing entirely, so the actual column
        // count may end up below `columns`.
        let per_column = names.len().div_ceil(columns);
        let cols: Vec<&[&str]> = names.chunks(per_column).collect();
        let col_widths: Vec<usize> = cols
            .iter()
            .map(|col| col.iter().copied().map(display_width).max().unwrap_or(0))
            .collect();
        let total: usize =
            col_widths.iter().sum::<usize>() + COLUMN_SPACING * (cols.len() - 1);
        if total <= width || columns == 1 {
            break (cols, col_widths);
        }
        columns -= 1;
    };

    let rows = cols[0].len();
    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut line = String::new();
        for (col, col_width) in cols.iter().zip(col_widths.iter().copied()) {
            let Some(name) = col.get(row) else { continue };
            line.push_str(name);
            let pad = col_width + COLUMN_SPACING - display_width(name);
            line.extend(iter::repeat_n(' ', pad));
        }
        let trimmed = line.trim_end().len();
        line.truncate(trimmed);
        lines.push(line);
    }
    lines
}
