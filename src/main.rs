//! Map viewer binary.
//!
//! Loads the tileset and a grid document (local file or map endpoint),
//! builds the tile layers once, then runs a crossterm event loop with a
//! mouse/keyboard hover cursor.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event;
use log::debug;

use citymap_client::{MapSource, Session};
use citymap_core::{build_layers, Cell, LayerSet};
use citymap_input::{map_event, step_cursor, ViewerAction};
use citymap_term::{FrameBuffer, MapScene, MapView, TerminalRenderer, TilePalette, Viewport};

/// Terminal viewer for city-simulation maps.
#[derive(Debug, Parser)]
#[command(name = "citymap", version, about)]
struct Args {
    /// Tileset resource (name -> tile index tables).
    #[arg(long, default_value = "assets/tileset.json")]
    tileset: PathBuf,

    /// Exported map document to view.
    #[arg(long, default_value = "assets/sample_map.json")]
    map: PathBuf,

    /// Fetch the map from this host:port instead of a local file.
    #[arg(long)]
    addr: Option<String>,

    /// Map id to request from the endpoint.
    #[arg(long, default_value_t = 3)]
    map_id: u32,

    /// Terminal glyphs per grid cell edge.
    #[arg(long, default_value_t = 1)]
    scale: u16,
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = Args::parse();
    let source = match args.addr {
        Some(addr) => MapSource::remote(args.tileset, addr, args.map_id),
        None => MapSource::file(args.tileset, args.map),
    };

    // Load stage: both inputs are fully fetched before any rendering starts.
    let runtime = tokio::runtime::Runtime::new()?;
    let session = runtime.block_on(Session::load(&source))?;

    let layers = build_layers(session.document(), session.table())?;
    let palette = TilePalette::from_table(session.table());
    let view = MapView::new(args.scale);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &session, &layers, &palette, view);
    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &Session,
    layers: &LayerSet,
    palette: &TilePalette,
    view: MapView,
) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut hovered: Option<Cell> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let scene = MapScene {
            layers,
            document: session.document(),
            palette,
            hovered,
        };
        let layout = view.render_into(&scene, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match map_event(&event::read()?) {
            Some(ViewerAction::Quit) => return Ok(()),
            Some(ViewerAction::PointerMoved { x, y }) => {
                // A pointer outside the map keeps the previous hover.
                if let Some(cell) = layout.cell_at(x, y) {
                    hovered = Some(cell);
                }
            }
            Some(ViewerAction::Select { x, y }) => {
                if let Some(cell) = layout.cell_at(x, y) {
                    if let Some(entry) = session.hit_test(cell) {
                        // City detail lookup is the backend's business; the
                        // viewer only resolves the coordinates.
                        match entry.city() {
                            Some(city) => {
                                debug!("selected city {:?} at ({}, {})", city.name, cell.col, cell.row)
                            }
                            None => debug!("selected cell ({}, {})", cell.col, cell.row),
                        }
                        hovered = Some(cell);
                    }
                }
            }
            Some(ViewerAction::MoveCursor(dir)) => {
                let doc = session.document();
                hovered = Some(step_cursor(
                    hovered.unwrap_or(Cell::new(0, 0)),
                    dir,
                    doc.width(),
                    doc.height(),
                ));
            }
            Some(ViewerAction::Redraw) | None => {}
        }
    }
}
