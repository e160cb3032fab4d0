//! Pointer <-> cell coordinate mapping.
//!
//! Layers place cell `(col, row)` at pixel `(col * tile_size, row * tile_size)`
//! for a fixed square tile edge; these functions are the pure inverse of that
//! placement. Bounds against the document are the caller's job
//! ([`crate::GridDocument::node_at`]).

/// Tile edge of the small rendering configuration, in pixels.
pub const TILE_SIZE_SMALL: u16 = 16;
/// Tile edge of the large rendering configuration, in pixels.
pub const TILE_SIZE_LARGE: u16 = 32;

/// A grid cell address: column (X) and row (Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// Map a pointer position onto the tile grid by flooring to the tile edge.
///
/// Returns `None` for positions left of or above the grid origin; positions
/// past the far edges still resolve and must be bounds-checked against the
/// document before indexing.
pub fn pointer_to_cell(px: i32, py: i32, tile_size: u16) -> Option<Cell> {
    if px < 0 || py < 0 {
        return None;
    }
    let tile = i32::from(tile_size.max(1));
    Some(Cell {
        col: (px / tile) as usize,
        row: (py / tile) as usize,
    })
}

/// Pixel position of a cell's top-left corner.
pub fn cell_to_pixel(cell: Cell, tile_size: u16) -> (i32, i32) {
    let tile = i32::from(tile_size);
    (cell.col as i32 * tile, cell.row as i32 * tile)
}
