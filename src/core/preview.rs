//! Console preview of the leading rows of a dataset.

use crate::domain::model::Dataset;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Wider datasets show this many columns from each end with `...` in between.
const EDGE_COLUMNS: usize = 4;
const MAX_CELL_WIDTH: usize = 18;
const ELLIPSIS: &str = "...";

/// Renders the first `rows` rows as a right-aligned table with a row-number
/// column, followed by a `[R rows x C columns]` footer.
pub fn render(dataset: &Dataset, rows: usize) -> String {
    let visible = visible_columns(dataset.column_count());

    let mut table: Vec<Vec<String>> = Vec::with_capacity(rows.min(dataset.len()) + 1);

    let mut header = vec![String::new()];
    header.extend(visible.iter().map(|column| match column {
        Some(i) => truncate(&dataset.columns[*i]),
        None => ELLIPSIS.to_string(),
    }));
    table.push(header);

    for (n, row) in dataset.rows.iter().take(rows).enumerate() {
        let mut line = vec![n.to_string()];
        line.extend(visible.iter().map(|column| match column {
            Some(i) => truncate(row.get(*i).map(String::as_str).unwrap_or("")),
            None => ELLIPSIS.to_string(),
        }));
        table.push(line);
    }

    let widths: Vec<usize> = (0..table[0].len())
        .map(|j| {
            table
                .iter()
                .map(|line| line[j].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = table
        .iter()
        .map(|line| {
            line.iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:>width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");

    out.push_str(&format!(
        "\n\n[{} rows x {} columns]",
        dataset.len(),
        dataset.column_count()
    ));
    out
}

/// `None` marks the elided middle.
fn visible_columns(count: usize) -> Vec<Option<usize>> {
    if count <= EDGE_COLUMNS * 2 {
        return (0..count).map(Some).collect();
    }

    (0..EDGE_COLUMNS)
        .map(Some)
        .chain(std::iter::once(None))
        .chain((count - EDGE_COLUMNS..count).map(Some))
        .collect()
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let kept: String = cell.chars().take(MAX_CELL_WIDTH - ELLIPSIS.len()).collect();
    format!("{}{}", kept, ELLIPSIS)
}
