//! Fixed column geometry of the exported sheet.

/// Column widths in character units, in `COLUMN_LABELS` order (A through I).
pub const COLUMN_WIDTHS: [u16; 9] = [5, 30, 60, 30, 30, 10, 10, 10, 10];

/// Zero-based columns whose cells are centered: the rank and the four
/// numeric columns on the right (A, F, G, H, I).
pub const CENTERED_COLUMNS: [u16; 5] = [0, 5, 6, 7, 8];

#[must_use]
pub fn is_centered(col: u16) -> bool {
    CENTERED_COLUMNS.contains(&col)
}
