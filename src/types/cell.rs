use serde::{Deserialize, Serialize};

/// Zero-based position of a table cell.
///
/// Column comes first, matching the `(x, y)` order of pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPosition {
    pub col: u32,
    pub row: u32,
}

impl CellPosition {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

impl From<(u32, u32)> for CellPosition {
    fn from((col, row): (u32, u32)) -> Self {
        Self { col, row }
    }
}
