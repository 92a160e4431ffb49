//! Table markup generation.
//!
//! Every row and cell carries its own index in `data-row` / `data-col`
//! attributes, so pointer targets resolve to a [`CellPosition`] without
//! walking the DOM to count siblings.

use std::fmt::{self, Write};

use crate::types::CellPosition;

/// Attribute holding a row index, on both `<tr>` and `<td>`.
pub const ROW_ATTR: &str = "data-row";
/// Attribute holding a column index, on `<td>` only.
pub const COL_ATTR: &str = "data-col";
/// Selector matching cells produced by [`Grid`].
pub const CELL_SELECTOR: &str = "td[data-row][data-col]";

/// Fixed-size grid of empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
}

impl Grid {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    pub const fn rows(&self) -> u32 {
        self.rows
    }

    pub const fn cols(&self) -> u32 {
        self.cols
    }

    pub fn cell_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.cols)
    }

    pub fn contains(&self, cell: CellPosition) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Write the `<tr>`/`<td>` markup for the whole grid.
    ///
    /// # Errors
    /// Propagates errors from the underlying writer.
    pub fn write_html<W: Write>(&self, out: &mut W) -> fmt::Result {
        for row in 0..self.rows {
            write!(out, "<tr {ROW_ATTR}=\"{row}\">")?;
            for col in 0..self.cols {
                write!(out, "<td {ROW_ATTR}=\"{row}\" {COL_ATTR}=\"{col}\"></td>")?;
            }
            out.write_str("</tr>")?;
        }
        Ok(())
    }

    /// Markup for the whole grid as a single string, ready for `innerHTML`.
    pub fn to_html(&self) -> String {
        // Roughly 40 bytes per cell.
        let capacity = usize::try_from(self.cell_count().saturating_mul(40)).unwrap_or(0);
        let mut html = String::with_capacity(capacity);
        // Writing into a String cannot fail.
        let _ = self.write_html(&mut html);
        html
    }
}

/// Resolve a cell's data attributes back to its position.
///
/// Returns `None` when either attribute is missing or not a plain index,
/// which is how pointer targets outside the grid are rejected.
pub fn parse_cell_id(row_attr: Option<&str>, col_attr: Option<&str>) -> Option<CellPosition> {
    let row = row_attr?.trim().parse::<u32>().ok()?;
    let col = col_attr?.trim().parse::<u32>().ok()?;
    Some(CellPosition::new(col, row))
}
