//! Tile lookup table: semantic terrain/structure names -> tile indices.

use std::collections::BTreeMap;
use std::fmt;

use citymap_protocol::{NodeRecord, TileIndex, TileSetDoc};

use crate::error::RenderError;

/// Fixed key used for every structure lookup.
///
/// The tileset keys structures and roads by category rather than by any
/// per-node variant, so all structures share one tile (and likewise roads).
/// Preserved as-is from the backend's tileset; per-node structure types would
/// need a wire change first.
pub const STRUCTURE_KEY: &str = "City";
/// Fixed key used for every road lookup.
pub const ROAD_KEY: &str = "Road";

/// The four lookup categories of the tileset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileCategory {
    Landscape,
    Ground,
    Structure,
    Road,
}

impl TileCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TileCategory::Landscape => "Landscape",
            TileCategory::Ground => "Ground",
            TileCategory::Structure => "Structure",
            TileCategory::Road => "Road",
        }
    }
}

impl fmt::Display for TileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable name -> tile index lookup, one table per category.
///
/// Loaded once per session from the static tileset resource and shared
/// read-only by layer construction and the palette.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileTable {
    landscape: BTreeMap<String, TileIndex>,
    ground: BTreeMap<String, TileIndex>,
    structure: BTreeMap<String, TileIndex>,
    road: BTreeMap<String, TileIndex>,
}

impl TileTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: TileCategory, name: impl Into<String>, tile: TileIndex) {
        self.entries_mut(category).insert(name.into(), tile);
    }

    /// Look up a tile index; `None` when the category has no such key.
    pub fn get(&self, category: TileCategory, name: &str) -> Option<TileIndex> {
        self.entries(category).get(name).copied()
    }

    /// All entries of one category, in name order.
    pub fn entries(&self, category: TileCategory) -> &BTreeMap<String, TileIndex> {
        match category {
            TileCategory::Landscape => &self.landscape,
            TileCategory::Ground => &self.ground,
            TileCategory::Structure => &self.structure,
            TileCategory::Road => &self.road,
        }
    }

    fn entries_mut(&mut self, category: TileCategory) -> &mut BTreeMap<String, TileIndex> {
        match category {
            TileCategory::Landscape => &mut self.landscape,
            TileCategory::Ground => &mut self.ground,
            TileCategory::Structure => &mut self.structure,
            TileCategory::Road => &mut self.road,
        }
    }
}

impl From<TileSetDoc> for TileTable {
    fn from(doc: TileSetDoc) -> Self {
        Self {
            landscape: doc.landscape,
            ground: doc.ground,
            structure: doc.structure,
            road: doc.road,
        }
    }
}

/// Resolve the tile index for one node and category.
///
/// `Landscape`/`Ground` key on the node's own terrain name; callers skip the
/// call entirely when the field is absent (a call with an absent field misses
/// on the sentinel name, which no table contains). `Structure` and `Road`
/// ignore the node and key on [`STRUCTURE_KEY`] / [`ROAD_KEY`].
pub fn resolve_tile_index(
    node: &NodeRecord,
    category: TileCategory,
    table: &TileTable,
) -> Result<TileIndex, RenderError> {
    let name = match category {
        TileCategory::Landscape => node.landscape.name().unwrap_or(citymap_protocol::NO_LANDSCAPE),
        TileCategory::Ground => node.ground.name().unwrap_or(citymap_protocol::NO_GROUND),
        TileCategory::Structure => STRUCTURE_KEY,
        TileCategory::Road => ROAD_KEY,
    };

    table.get(category, name).ok_or_else(|| RenderError::LookupMiss {
        category,
        name: name.to_string(),
    })
}
