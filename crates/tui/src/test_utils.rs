//! Helpers shared by the crate's unit tests.

use ratatui::buffer::Buffer;

/// Flattens a rendered buffer into text, one line per row.
///
/// Styles are dropped and trailing spaces removed, so assertions and
/// snapshots only depend on the visible symbols.
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol()))
                .collect();
            format!("{}\n", row.trim_end_matches(' '))
        })
        .collect()
}
