//! Markdown table rendering.

/// A table row; rows may be shorter than the header.
pub type Row = Vec<String>;

const MIN_CELL_WIDTH: usize = 3;

/// Render rows as a GitHub-flavored markdown table.
///
/// The first row is the header. Every row is widened to the longest row with
/// empty cells, an empty row renders as a blank table line, and each column
/// is padded to its widest cell.
pub fn render_markdown_table(rows: &[Row]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }

    let mut widths = vec![MIN_CELL_WIDTH; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell_width(cell));
        }
    }

    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 1);
    for (index, row) in rows.iter().enumerate() {
        let cells: Vec<String> = (0..columns)
            .map(|i| pad(row.get(i).map(String::as_str).unwrap_or(""), widths[i]))
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));

        if index == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            lines.push(format!("| {} |", rule.join(" | ")));
        }
    }

    lines.join("\n")
}

fn cell_width(cell: &str) -> usize {
    cell.chars().count()
}

fn pad(cell: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    out.push_str(cell);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(cell_width(cell))));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_render_pads_columns_and_adds_rule() {
        let md = render_markdown_table(&[row(&["", "before", "after"]), row(&["Type count", "100", "120"])]);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "|            | before | after |");
        assert_eq!(lines[1], "| ---------- | ------ | ----- |");
        assert_eq!(lines[2], "| Type count | 100    | 120   |");
    }

    #[test]
    fn test_short_and_empty_rows_are_filled() {
        let md = render_markdown_table(&[row(&["a", "b"]), row(&["**Section**"]), Vec::new()]);
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[2], "| **Section** |     |");
        assert_eq!(lines[3], "|             |     |");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markdown_table(&[]), "");
    }
}
