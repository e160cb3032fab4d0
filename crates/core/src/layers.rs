//! Tile layers and the grid -> layers translation.

use citymap_protocol::TileIndex;

use crate::error::RenderError;
use crate::grid::GridDocument;
use crate::table::{resolve_tile_index, TileCategory, TileTable};

/// Tile index every layer cell starts with. Drawn as "nothing here" by any
/// tileset this renderer has seen, and treated as transparent when layers are
/// composited.
pub const EMPTY_TILE: TileIndex = 1;

/// One tile layer: a rectangular grid of tile indices.
///
/// Flat row-major storage with bounds-checked access; out-of-range reads
/// return `None` and out-of-range writes are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    width: usize,
    height: usize,
    tiles: Vec<TileIndex>,
}

impl TileLayer {
    /// Create a layer filled with [`EMPTY_TILE`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![EMPTY_TILE; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn idx(&self, col: usize, row: usize) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn get(&self, col: usize, row: usize) -> Option<TileIndex> {
        self.idx(col, row).map(|i| self.tiles[i])
    }

    /// Set one cell. Returns `false` when the cell is out of range.
    pub fn set(&mut self, col: usize, row: usize, tile: TileIndex) -> bool {
        match self.idx(col, row) {
            Some(i) => {
                self.tiles[i] = tile;
                true
            }
            None => false,
        }
    }

    pub fn tiles(&self) -> &[TileIndex] {
        &self.tiles
    }
}

/// The four layers, named by what they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Ground,
    Environment,
    Road,
    Structure,
}

impl LayerKind {
    /// Back-to-front draw order; later layers occlude earlier ones.
    pub const DRAW_ORDER: [LayerKind; 4] = [
        LayerKind::Ground,
        LayerKind::Environment,
        LayerKind::Road,
        LayerKind::Structure,
    ];
}

/// All four layers of one rendered map, equal-sized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSet {
    pub ground: TileLayer,
    pub environment: TileLayer,
    pub road: TileLayer,
    pub structure: TileLayer,
}

impl LayerSet {
    fn new(width: usize, height: usize) -> Self {
        Self {
            ground: TileLayer::new(width, height),
            environment: TileLayer::new(width, height),
            road: TileLayer::new(width, height),
            structure: TileLayer::new(width, height),
        }
    }

    pub fn layer(&self, kind: LayerKind) -> &TileLayer {
        match kind {
            LayerKind::Ground => &self.ground,
            LayerKind::Environment => &self.environment,
            LayerKind::Road => &self.road,
            LayerKind::Structure => &self.structure,
        }
    }

    pub fn width(&self) -> usize {
        self.ground.width()
    }

    pub fn height(&self) -> usize {
        self.ground.height()
    }

    /// Topmost non-empty tile at a cell, following the draw order.
    pub fn top_tile(&self, col: usize, row: usize) -> Option<TileIndex> {
        let mut top = self.ground.get(col, row)?;
        for kind in LayerKind::DRAW_ORDER {
            match self.layer(kind).get(col, row) {
                Some(tile) if tile != EMPTY_TILE => top = tile,
                _ => {}
            }
        }
        Some(top)
    }
}

/// Translate a grid document into the four tile layers.
///
/// Single pass over all R x C nodes; pure in its inputs. Per node:
/// a structure paints the structure layer, otherwise a road paints the road
/// layer (structure wins when a node claims both), and independently of that
/// a present landscape/ground paints the environment/ground layer. Absent
/// terrain fields are skipped before any table lookup, so sentinels never
/// reach the table.
pub fn build_layers(document: &GridDocument, table: &TileTable) -> Result<LayerSet, RenderError> {
    let mut layers = LayerSet::new(document.width(), document.height());

    for (row, nodes) in document.rows().iter().enumerate() {
        for (col, entry) in nodes.iter().enumerate() {
            let node = &entry.node;

            if node.is_structure {
                let tile = resolve_tile_index(node, TileCategory::Structure, table)?;
                layers.structure.set(col, row, tile);
            } else if node.is_road {
                let tile = resolve_tile_index(node, TileCategory::Road, table)?;
                layers.road.set(col, row, tile);
            }

            if node.landscape.name().is_some() {
                let tile = resolve_tile_index(node, TileCategory::Landscape, table)?;
                layers.environment.set(col, row, tile);
            }

            if node.ground.name().is_some() {
                let tile = resolve_tile_index(node, TileCategory::Ground, table)?;
                layers.ground.set(col, row, tile);
            }
        }
    }

    Ok(layers)
}
