//! Layer construction tests.

use citymap::core::{
    build_layers, GridDocument, GridError, RenderError, TileCategory, TileTable, EMPTY_TILE,
};
use citymap::protocol::{Ground, Landscape, Location, NodeEntry, NodeRecord, WebGrid};

fn entry(x: i32, y: i32) -> NodeEntry {
    NodeEntry {
        node: NodeRecord {
            location: Location::new(x, y),
            is_structure: false,
            is_road: false,
            ground: Ground::Absent,
            landscape: Landscape::Absent,
        },
        city: None,
        neighbours: None,
    }
}

fn document(width: usize, height: usize) -> GridDocument {
    let nodes = (0..height)
        .map(|y| (0..width).map(|x| entry(x as i32, y as i32)).collect())
        .collect();
    GridDocument::new(WebGrid {
        nodes,
        name: "test".into(),
    })
    .unwrap()
}

fn table() -> TileTable {
    let mut table = TileTable::new();
    table.insert(TileCategory::Ground, "Grass", 2);
    table.insert(TileCategory::Landscape, "Forest", 5);
    table.insert(TileCategory::Structure, "City", 43);
    table.insert(TileCategory::Road, "Road", 9);
    table
}

#[test]
fn layers_match_document_dimensions() {
    let doc = document(7, 4);
    let layers = build_layers(&doc, &table()).unwrap();
    for layer in [
        &layers.ground,
        &layers.environment,
        &layers.road,
        &layers.structure,
    ] {
        assert_eq!(layer.width(), 7);
        assert_eq!(layer.height(), 4);
    }
}

#[test]
fn road_node_with_grass_ground() {
    // Single node: road over grass, no landscape.
    let mut e = entry(0, 0);
    e.node.is_road = true;
    e.node.ground = Ground::Named("Grass".into());
    let doc = GridDocument::new(WebGrid {
        nodes: vec![vec![e]],
        name: String::new(),
    })
    .unwrap();

    let layers = build_layers(&doc, &table()).unwrap();
    assert_eq!(layers.road.get(0, 0), Some(9));
    assert_eq!(layers.ground.get(0, 0), Some(2));
    assert_eq!(layers.environment.get(0, 0), Some(EMPTY_TILE));
    assert_eq!(layers.structure.get(0, 0), Some(EMPTY_TILE));
}

#[test]
fn structure_wins_over_road() {
    let mut e = entry(0, 0);
    e.node.is_structure = true;
    e.node.is_road = true;
    let doc = GridDocument::new(WebGrid {
        nodes: vec![vec![e]],
        name: String::new(),
    })
    .unwrap();

    let layers = build_layers(&doc, &table()).unwrap();
    assert_eq!(layers.structure.get(0, 0), Some(43));
    // The road layer stays untouched for that cell.
    assert_eq!(layers.road.get(0, 0), Some(EMPTY_TILE));
}

#[test]
fn absent_ground_keeps_the_empty_tile() {
    let doc = document(3, 3);
    let layers = build_layers(&doc, &table()).unwrap();
    assert!(layers
        .ground
        .tiles()
        .iter()
        .all(|&tile| tile == EMPTY_TILE));
}

#[test]
fn terrain_paints_independently_of_flags() {
    let mut e = entry(0, 0);
    e.node.is_structure = true;
    e.node.ground = Ground::Named("Grass".into());
    e.node.landscape = Landscape::Named("Forest".into());
    let doc = GridDocument::new(WebGrid {
        nodes: vec![vec![e]],
        name: String::new(),
    })
    .unwrap();

    let layers = build_layers(&doc, &table()).unwrap();
    assert_eq!(layers.structure.get(0, 0), Some(43));
    assert_eq!(layers.environment.get(0, 0), Some(5));
    assert_eq!(layers.ground.get(0, 0), Some(2));
}

#[test]
fn ragged_rows_are_rejected() {
    let nodes = vec![
        vec![entry(0, 0), entry(1, 0)],
        vec![entry(0, 1)],
    ];
    let err = GridDocument::new(WebGrid {
        nodes,
        name: String::new(),
    })
    .unwrap_err();
    assert_eq!(
        err,
        GridError::RaggedRow {
            row: 1,
            len: 1,
            expected: 2,
        }
    );
}

#[test]
fn missing_table_entry_aborts_the_build() {
    let mut e = entry(0, 0);
    e.node.ground = Ground::Named("Tundra".into());
    let doc = GridDocument::new(WebGrid {
        nodes: vec![vec![e]],
        name: String::new(),
    })
    .unwrap();

    let err = build_layers(&doc, &table()).unwrap_err();
    assert_eq!(
        err,
        RenderError::LookupMiss {
            category: TileCategory::Ground,
            name: "Tundra".into(),
        }
    );
}

#[test]
fn build_does_not_mutate_its_inputs() {
    let doc = document(4, 4);
    let tbl = table();
    let before = doc.clone();
    let first = build_layers(&doc, &tbl).unwrap();
    let second = build_layers(&doc, &tbl).unwrap();
    assert_eq!(doc, before);
    assert_eq!(first, second);
}
