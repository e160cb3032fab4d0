//! Terminal presentation: framebuffer, tile palette, map view, renderer.

mod fb;
mod map_view;
mod palette;
mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use map_view::{MapLayout, MapScene, MapView, Viewport};
pub use palette::TilePalette;
pub use renderer::TerminalRenderer;
