//! Tile index -> glyph mapping.
//!
//! The pixel-art tileset the backend's web client uses is an image atlas; in
//! the terminal each tile index becomes one styled glyph instead. Known
//! terrain names get dedicated glyphs, anything else falls back to the first
//! letter of its name in the category color, so a tileset extension stays
//! visible without a palette change here.

use std::collections::BTreeMap;

use citymap_core::{TileCategory, TileIndex, TileTable, EMPTY_TILE};

use crate::fb::{Glyph, Rgb, Style};

/// Resolved glyph per tile index, derived once from the tile table.
#[derive(Debug, Clone)]
pub struct TilePalette {
    glyphs: BTreeMap<TileIndex, Glyph>,
    empty: Glyph,
    fallback: Glyph,
}

impl TilePalette {
    pub fn from_table(table: &TileTable) -> Self {
        let mut glyphs = BTreeMap::new();
        for category in [
            TileCategory::Ground,
            TileCategory::Landscape,
            TileCategory::Road,
            TileCategory::Structure,
        ] {
            for (name, &tile) in table.entries(category) {
                glyphs.insert(tile, glyph_for(category, name));
            }
        }

        let empty = Glyph::new(
            '·',
            Style {
                fg: Rgb::new(70, 70, 80),
                bg: Rgb::new(20, 20, 26),
                bold: false,
            },
        );
        // Deliberately loud: an index the table never produced.
        let fallback = Glyph::new(
            '?',
            Style {
                fg: Rgb::new(240, 80, 240),
                bg: Rgb::new(20, 20, 26),
                bold: true,
            },
        );

        Self {
            glyphs,
            empty,
            fallback,
        }
    }

    pub fn glyph(&self, tile: TileIndex) -> Glyph {
        if tile == EMPTY_TILE {
            return self.empty;
        }
        self.glyphs.get(&tile).copied().unwrap_or(self.fallback)
    }
}

fn glyph_for(category: TileCategory, name: &str) -> Glyph {
    let bg = Rgb::new(20, 20, 26);
    let (ch, fg, bold) = match (category, name) {
        (TileCategory::Ground, "Plain") => ('"', Rgb::new(90, 180, 70), false),
        (TileCategory::Ground, "Desert") => ('~', Rgb::new(220, 190, 90), false),
        (TileCategory::Ground, "Sea") => ('≈', Rgb::new(60, 110, 220), false),
        (TileCategory::Landscape, "Mountain") => ('^', Rgb::new(150, 140, 130), false),
        (TileCategory::Landscape, "Forest") => ('♠', Rgb::new(40, 140, 60), false),
        (TileCategory::Landscape, "River") => ('~', Rgb::new(90, 160, 240), false),
        (TileCategory::Road, _) => ('+', Rgb::new(170, 150, 110), false),
        (TileCategory::Structure, _) => ('◆', Rgb::new(240, 220, 120), true),
        (category, name) => (
            name.chars().next().map_or('?', |c| c.to_ascii_uppercase()),
            category_color(category),
            false,
        ),
    };
    Glyph::new(ch, Style { fg, bg, bold })
}

fn category_color(category: TileCategory) -> Rgb {
    match category {
        TileCategory::Ground => Rgb::new(140, 170, 100),
        TileCategory::Landscape => Rgb::new(100, 160, 130),
        TileCategory::Road => Rgb::new(170, 150, 110),
        TileCategory::Structure => Rgb::new(240, 220, 120),
    }
}
