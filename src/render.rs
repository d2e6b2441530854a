//! Overview table rendering.

use crate::board::Lane;

const ELLIPSIS: &str = "...";

/// Render the board as a bordered grid, one column per lane.
///
/// Every line ends with a newline. With no lanes the grid is just the
/// closing borders of the header and separator rows.
pub fn render_board(lanes: &[Lane], max_width: usize) -> String {
    let widths = column_widths(lanes, max_width);
    let mut output = String::new();

    for (lane, &width) in lanes.iter().zip(&widths) {
        output.push_str("| ");
        output.push_str(&fit(&single_line(&lane.name), width));
        output.push(' ');
    }
    output.push_str(" |\n");

    for &width in &widths {
        output.push_str("|-");
        output.push_str(&"-".repeat(width));
        output.push('-');
    }
    output.push_str("-|\n");

    let rows = lanes.iter().map(|l| l.tasks.len()).max().unwrap_or(0);
    for row in 0..rows {
        for (lane, &width) in lanes.iter().zip(&widths) {
            let text = lane
                .tasks
                .get(row)
                .map(|t| single_line(&t.cell_text()))
                .unwrap_or_default();
            output.push_str("| ");
            output.push_str(&fit(&text, width));
            output.push(' ');
        }
        output.push_str(" |\n");
    }

    output
}

/// Effective column width of each lane: its widest cell, capped at `max_width`.
pub fn column_widths(lanes: &[Lane], max_width: usize) -> Vec<usize> {
    lanes
        .iter()
        .map(|lane| {
            let widest_task = lane
                .tasks
                .iter()
                .map(|t| display_len(&single_line(&t.cell_text())))
                .max()
                .unwrap_or(0);
            display_len(&lane.name).max(widest_task).min(max_width)
        })
        .collect()
}

/// Pad `text` to exactly `width` characters, or cut it and end with `...`.
pub fn fit(text: &str, width: usize) -> String {
    if display_len(text) > width {
        let kept: String = text.chars().take(width.saturating_sub(ELLIPSIS.len())).collect();
        format!("{}{}", kept, ELLIPSIS)
    } else {
        format!("{:<width$}", text)
    }
}

/// Truncate to `max_len` characters, ending with `...` when cut.
pub fn truncate_to(text: &str, max_len: usize) -> String {
    if display_len(text) <= max_len {
        text.to_string()
    } else {
        fit(text, max_len)
    }
}

/// Replace newlines, tabs and other control characters with spaces so a
/// cell never spans more than one output line.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn display_len(text: &str) -> usize {
    text.chars().count()
}
