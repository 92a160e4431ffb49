use serde::Serialize;

use super::CellPosition;

/// Anchor and moving end of a drag selection.
///
/// No ordering is enforced: `end` may lie before `start` on either axis.
/// Both are unset until the first pointer-down / throttled move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub start: Option<CellPosition>,
    pub end: Option<CellPosition>,
}

/// Inclusive, zero-based index span on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub first_row: u32,
    pub last_row: u32,
    pub first_col: u32,
    pub last_col: u32,
}

impl Selection {
    /// Both endpoints, if set.
    pub fn endpoints(&self) -> Option<(CellPosition, CellPosition)> {
        Some((self.start?, self.end?))
    }

    /// Span taking `start` as the lower bound and `end` as the upper bound
    /// as-is. A backwards drag yields `first > last` on that axis.
    pub fn raw_span(&self) -> Option<SelectionSpan> {
        let (start, end) = self.endpoints()?;
        Some(SelectionSpan {
            first_row: start.row,
            last_row: end.row,
            first_col: start.col,
            last_col: end.col,
        })
    }

    /// Span with min/max sorted bounds on both axes.
    pub fn normalized_span(&self) -> Option<SelectionSpan> {
        let (start, end) = self.endpoints()?;
        Some(SelectionSpan {
            first_row: start.row.min(end.row),
            last_row: start.row.max(end.row),
            first_col: start.col.min(end.col),
            last_col: start.col.max(end.col),
        })
    }
}

impl SelectionSpan {
    /// Whether the span selects no cell (a backwards bound on some axis).
    pub fn is_empty(&self) -> bool {
        self.first_row > self.last_row || self.first_col > self.last_col
    }
}
