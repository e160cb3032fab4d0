//! Validated grid document.
//!
//! The wire document is rows of nodes where row index = Y and column index =
//! X. Both drawing and pointer hit-testing rely on that correspondence, so
//! it is checked once at construction instead of on every access.

use citymap_protocol::{NodeEntry, WebGrid};

use crate::error::{CellOutOfRange, GridError};
use crate::pointer::Cell;

/// An immutable, rectangular snapshot of the fetched map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDocument {
    name: String,
    rows: Vec<Vec<NodeEntry>>,
    width: usize,
    height: usize,
}

impl GridDocument {
    /// Validate a wire grid: non-empty, rectangular, and each node's embedded
    /// location agreeing with its structural position.
    pub fn new(grid: WebGrid) -> Result<Self, GridError> {
        let height = grid.nodes.len();
        let width = grid.nodes.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        for (row, nodes) in grid.nodes.iter().enumerate() {
            if nodes.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    len: nodes.len(),
                    expected: width,
                });
            }
            for (col, entry) in nodes.iter().enumerate() {
                let loc = entry.node.location;
                if loc.x != col as i32 || loc.y != row as i32 {
                    return Err(GridError::LocationMismatch {
                        col,
                        row,
                        x: loc.x,
                        y: loc.y,
                    });
                }
            }
        }

        Ok(Self {
            name: grid.name,
            rows: grid.nodes,
            width,
            height,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns (X extent).
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows (Y extent).
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows of node entries, in Y order.
    pub fn rows(&self) -> &[Vec<NodeEntry>] {
        &self.rows
    }

    /// Node at a cell, or `None` when the cell lies outside the grid.
    pub fn get(&self, cell: Cell) -> Option<&NodeEntry> {
        self.rows.get(cell.row).and_then(|row| row.get(cell.col))
    }

    /// Bounds-checked node access for pointer-resolved cells.
    pub fn node_at(&self, cell: Cell) -> Result<&NodeEntry, CellOutOfRange> {
        self.get(cell).ok_or(CellOutOfRange {
            col: cell.col,
            row: cell.row,
            width: self.width,
            height: self.height,
        })
    }

    /// Whether a cell lies within the document.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col < self.width && cell.row < self.height
    }
}
