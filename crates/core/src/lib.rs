//! Rendering core: grid document -> tile layers, plus pointer hit-testing.
//!
//! This crate is I/O-free. It consumes an already-fetched wire document
//! (`citymap-protocol`) and a tile lookup table, and produces the four tile
//! layers the presentation side composites back-to-front: ground,
//! environment, road, structure.

mod error;
mod grid;
mod layers;
mod pointer;
mod table;

pub use error::{CellOutOfRange, GridError, RenderError};
pub use grid::GridDocument;
pub use layers::{build_layers, LayerKind, LayerSet, TileLayer, EMPTY_TILE};
pub use pointer::{cell_to_pixel, pointer_to_cell, Cell, TILE_SIZE_LARGE, TILE_SIZE_SMALL};
pub use table::{resolve_tile_index, TileCategory, TileTable, ROAD_KEY, STRUCTURE_KEY};

pub use citymap_protocol::TileIndex;
