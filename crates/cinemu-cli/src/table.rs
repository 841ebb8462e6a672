use std::fmt::Write;

use cinemu_core::{Collection, MovieRecord};

/// Renders `movies` as a plain text table headed by `#` and
/// [`MovieRecord::COLUMNS`]. Numbers start at 1.
pub fn render(movies: &Collection) -> String {
    let header: Vec<String> = std::iter::once("#")
        .chain(MovieRecord::COLUMNS)
        .map(str::to_string)
        .collect();

    let rows: Vec<Vec<String>> = movies
        .iter()
        .enumerate()
        .map(|(i, movie)| std::iter::once((i + 1).to_string()).chain(movie.table_row()).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let _ = write!(line, "{cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
