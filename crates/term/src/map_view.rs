//! MapView: composites tile layers into a terminal framebuffer.
//!
//! This module is pure (no I/O) and unit-testable. The view owns the
//! cell-to-screen placement, and hands back a [`MapLayout`] so the event loop
//! maps mouse positions through the exact same numbers.

use citymap_core::{pointer_to_cell, Cell, GridDocument, LayerSet, EMPTY_TILE};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::palette::TilePalette;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything one frame renders from.
#[derive(Debug, Clone, Copy)]
pub struct MapScene<'a> {
    pub layers: &'a LayerSet,
    pub document: &'a GridDocument,
    pub palette: &'a TilePalette,
    pub hovered: Option<Cell>,
}

/// Screen placement of the rendered map, for pointer mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    /// Square glyph edge per grid cell.
    pub scale: u16,
    pub cols: usize,
    pub rows: usize,
}

impl MapLayout {
    /// Grid cell under a terminal position, or `None` when the position falls
    /// outside the map (hover handlers suppress the action on `None`).
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Cell> {
        let local_x = i32::from(x) - i32::from(self.origin_x);
        let local_y = i32::from(y) - i32::from(self.origin_y);
        let cell = pointer_to_cell(local_x, local_y, self.scale)?;
        if cell.col >= self.cols || cell.row >= self.rows {
            return None;
        }
        Some(cell)
    }
}

/// Renders a [`MapScene`]: layers back-to-front, hover and neighbour
/// highlights, map title, and an info panel for the hovered cell.
#[derive(Debug, Clone, Copy)]
pub struct MapView {
    scale: u16,
}

impl Default for MapView {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

const NEIGHBOUR_BG: Rgb = Rgb::new(70, 50, 10);

/// Cell count times glyph scale, pinned to the terminal coordinate range.
fn scaled_extent(cells: usize, scale: u16) -> u16 {
    let extent = cells.saturating_mul(usize::from(scale));
    u16::try_from(extent).unwrap_or(u16::MAX)
}

impl MapView {
    pub fn new(scale: u16) -> Self {
        Self {
            scale: scale.max(1),
        }
    }

    pub fn layout(&self, scene: &MapScene<'_>) -> MapLayout {
        MapLayout {
            origin_x: 1,
            origin_y: 2,
            scale: self.scale,
            cols: scene.layers.width(),
            rows: scene.layers.height(),
        }
    }

    /// Render into an existing framebuffer; callers reuse one buffer across
    /// frames and only pay a resize when the terminal size changes.
    pub fn render_into(
        &self,
        scene: &MapScene<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> MapLayout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let layout = self.layout(scene);
        self.draw_title(scene, fb);
        self.draw_frame(&layout, fb);
        self.draw_cells(scene, &layout, fb);
        self.draw_info_panel(scene, &layout, viewport, fb);
        layout
    }

    /// Convenience variant that allocates a fresh framebuffer.
    pub fn render(&self, scene: &MapScene<'_>, viewport: Viewport) -> (FrameBuffer, MapLayout) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = self.render_into(scene, viewport, &mut fb);
        (fb, layout)
    }

    fn draw_title(&self, scene: &MapScene<'_>, fb: &mut FrameBuffer) {
        let title = Style {
            bold: true,
            ..Style::default()
        };
        let name = scene.document.name();
        let text = if name.is_empty() { "unnamed map" } else { name };
        fb.put_str(1, 0, text, title);
    }

    fn draw_frame(&self, layout: &MapLayout, fb: &mut FrameBuffer) {
        // A huge document times the scale can exceed u16; the writes are
        // bounds-checked, so only the arithmetic needs to stay in range.
        let w = scaled_extent(layout.cols, layout.scale).saturating_add(2);
        let h = scaled_extent(layout.rows, layout.scale).saturating_add(2);
        let x = layout.origin_x - 1;
        let y = layout.origin_y - 1;
        let style = Style {
            fg: Rgb::new(120, 120, 130),
            ..Style::default()
        };

        let x2 = x.saturating_add(w).saturating_sub(1);
        let y2 = y.saturating_add(h).saturating_sub(1);

        fb.put(x, y, Glyph::new('┌', style));
        fb.put(x2, y, Glyph::new('┐', style));
        fb.put(x, y2, Glyph::new('└', style));
        fb.put(x2, y2, Glyph::new('┘', style));
        for dx in 1..w - 1 {
            fb.put(x.saturating_add(dx), y, Glyph::new('─', style));
            fb.put(x.saturating_add(dx), y2, Glyph::new('─', style));
        }
        for dy in 1..h - 1 {
            fb.put(x, y.saturating_add(dy), Glyph::new('│', style));
            fb.put(x2, y.saturating_add(dy), Glyph::new('│', style));
        }
    }

    fn draw_cells(&self, scene: &MapScene<'_>, layout: &MapLayout, fb: &mut FrameBuffer) {
        let neighbour_cells = scene
            .hovered
            .and_then(|cell| scene.document.get(cell))
            .filter(|entry| entry.city().is_some())
            .map(|entry| entry.neighbours().to_vec())
            .unwrap_or_default();

        for row in 0..layout.rows {
            for col in 0..layout.cols {
                let tile = scene
                    .layers
                    .top_tile(col, row)
                    .unwrap_or(EMPTY_TILE);
                let mut glyph = scene.palette.glyph(tile);

                let is_neighbour = neighbour_cells
                    .iter()
                    .any(|loc| loc.x == col as i32 && loc.y == row as i32);
                if is_neighbour {
                    glyph.style.bg = NEIGHBOUR_BG;
                    glyph.style.bold = true;
                }
                if scene.hovered == Some(Cell::new(col, row)) {
                    glyph.style = glyph.style.inverted();
                }

                let px = usize::from(layout.origin_x) + col * usize::from(layout.scale);
                let py = usize::from(layout.origin_y) + row * usize::from(layout.scale);
                if px >= usize::from(fb.width()) || py >= usize::from(fb.height()) {
                    continue;
                }
                let w = usize::from(layout.scale).min(usize::from(fb.width()) - px) as u16;
                let h = usize::from(layout.scale).min(usize::from(fb.height()) - py) as u16;
                fb.fill_rect(px as u16, py as u16, w, h, glyph);
            }
        }
    }

    fn draw_info_panel(
        &self,
        scene: &MapScene<'_>,
        layout: &MapLayout,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let panel_x = usize::from(layout.origin_x)
            + layout.cols * usize::from(layout.scale)
            + 3;
        if panel_x + 12 > usize::from(viewport.width) {
            return;
        }
        let panel_x = panel_x as u16;

        let label = Style {
            bold: true,
            ..Style::default()
        };
        let value = Style::default();

        let Some(cell) = scene.hovered else {
            fb.put_str(panel_x, layout.origin_y, "hover a cell", value);
            return;
        };
        let Some(entry) = scene.document.get(cell) else {
            return;
        };

        let mut y = layout.origin_y;
        let mut line = |fb: &mut FrameBuffer, text: &str, style: Style| {
            fb.put_str(panel_x, y, text, style);
            y = y.saturating_add(1);
        };

        line(fb, &format!("CELL ({}, {})", cell.col, cell.row), label);
        line(
            fb,
            &format!("ground    {}", entry.node.ground.name().unwrap_or("-")),
            value,
        );
        line(
            fb,
            &format!("landscape {}", entry.node.landscape.name().unwrap_or("-")),
            value,
        );
        if entry.node.is_structure {
            line(fb, "structure", value);
        } else if entry.node.is_road {
            line(fb, "road", value);
        }
        if let Some(city) = entry.city() {
            line(fb, &format!("city      {}", city.name), label);
            line(
                fb,
                &format!("links     {}", entry.neighbours().len()),
                value,
            );
        }
    }
}
