//! Typed failures of the rendering core.

use thiserror::Error;

use crate::table::TileCategory;

/// A grid document that violates the renderer's structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid document has no rows")]
    Empty,
    #[error("row {row} has {len} nodes, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("node at column {col}, row {row} carries location ({x}, {y})")]
    LocationMismatch {
        col: usize,
        row: usize,
        x: i32,
        y: i32,
    },
}

/// Layer construction failure.
///
/// A missing table entry aborts the build rather than painting a default
/// tile; a half-painted map is harder to diagnose than an error naming the
/// missing key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("tile table has no {category} entry for {name:?}")]
    LookupMiss { category: TileCategory, name: String },
}

/// A cell address outside the document, from a pointer that resolved past the
/// grid edge. Callers suppress the hover/click action on this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
pub struct CellOutOfRange {
    pub col: usize,
    pub row: usize,
    pub width: usize,
    pub height: usize,
}
