use criterion::{black_box, criterion_group, criterion_main, Criterion};
use citymap::core::{build_layers, pointer_to_cell, GridDocument, TileCategory, TileTable, TILE_SIZE_SMALL};
use citymap::protocol::{Ground, Landscape, Location, NodeEntry, NodeRecord, WebGrid};

fn synthetic_grid(width: usize, height: usize) -> GridDocument {
    let nodes = (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let ground = match (col + row) % 3 {
                        0 => "Plain",
                        1 => "Desert",
                        _ => "Sea",
                    };
                    let landscape = match (col * 7 + row) % 5 {
                        0 => Landscape::Named("Forest".into()),
                        1 => Landscape::Named("Mountain".into()),
                        _ => Landscape::Absent,
                    };
                    NodeEntry {
                        node: NodeRecord {
                            location: Location::new(col as i32, row as i32),
                            is_structure: col % 17 == 0 && row % 13 == 0,
                            is_road: row % 9 == 0,
                            ground: Ground::Named(ground.into()),
                            landscape,
                        },
                        city: None,
                        neighbours: None,
                    }
                })
                .collect()
        })
        .collect();
    GridDocument::new(WebGrid {
        nodes,
        name: "bench".into(),
    })
    .unwrap()
}

fn bench_table() -> TileTable {
    let mut table = TileTable::new();
    table.insert(TileCategory::Ground, "Plain", 2);
    table.insert(TileCategory::Ground, "Desert", 3);
    table.insert(TileCategory::Ground, "Sea", 17);
    table.insert(TileCategory::Landscape, "Forest", 5);
    table.insert(TileCategory::Landscape, "Mountain", 12);
    table.insert(TileCategory::Structure, "City", 43);
    table.insert(TileCategory::Road, "Road", 9);
    table
}

fn bench_build_layers(c: &mut Criterion) {
    let doc = synthetic_grid(100, 100);
    let table = bench_table();

    c.bench_function("build_layers_100x100", |b| {
        b.iter(|| build_layers(black_box(&doc), black_box(&table)).unwrap())
    });
}

fn bench_top_tile_scan(c: &mut Criterion) {
    let doc = synthetic_grid(100, 100);
    let table = bench_table();
    let layers = build_layers(&doc, &table).unwrap();

    c.bench_function("top_tile_full_scan", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for row in 0..layers.height() {
                for col in 0..layers.width() {
                    acc += u64::from(layers.top_tile(col, row).unwrap_or(0));
                }
            }
            black_box(acc)
        })
    });
}

fn bench_pointer_to_cell(c: &mut Criterion) {
    c.bench_function("pointer_to_cell", |b| {
        b.iter(|| pointer_to_cell(black_box(1597), black_box(983), TILE_SIZE_SMALL))
    });
}

criterion_group!(
    benches,
    bench_build_layers,
    bench_top_tile_scan,
    bench_pointer_to_cell
);
criterion_main!(benches);
