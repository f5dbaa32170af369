//! Grid map tests.

use tui_raycaster::core::{GridMap, MapError};
use tui_raycaster::types::{Tile, MAP_HEIGHT, MAP_WIDTH, TILE_SIZE};

#[test]
fn default_grid_dimensions() {
    let map = GridMap::default();
    assert_eq!(map.width(), MAP_WIDTH);
    assert_eq!(map.height(), MAP_HEIGHT);
    assert_eq!(map.tile_size(), TILE_SIZE);
    assert_eq!(map.world_width(), 512.0);
    assert_eq!(map.world_height(), 512.0);
    assert_eq!(map.cells().count(), MAP_WIDTH * MAP_HEIGHT);
}

#[test]
fn right_edge_does_not_wrap_into_next_row() {
    let map = GridMap::default();
    assert_eq!(map.tile_at(512.0, 0.0), None);
    assert_eq!(map.tile_at(512.0, 100.0), None);
    assert_eq!(map.tile_at(-1.0, 0.0), None);
    assert_eq!(map.tile_at(0.0, 0.0), Some(Tile::Wall));
}

#[test]
fn tile_at_maps_world_to_cell() {
    let map = GridMap::default();
    for (col, row, tile) in map.cells() {
        let x = col as f64 * TILE_SIZE + 0.5;
        let y = row as f64 * TILE_SIZE + TILE_SIZE - 0.5;
        assert_eq!(map.tile_at(x, y), Some(tile), "cell ({col}, {row})");
    }
}

#[test]
fn cells_are_row_major() {
    let map = GridMap::from_rows(10.0, &["#..", "..#"]).unwrap();
    let cells: Vec<_> = map.cells().collect();
    assert_eq!(
        cells,
        vec![
            (0, 0, Tile::Wall),
            (1, 0, Tile::Empty),
            (2, 0, Tile::Empty),
            (0, 1, Tile::Empty),
            (1, 1, Tile::Empty),
            (2, 1, Tile::Wall),
        ]
    );
}

#[test]
fn construction_errors_are_descriptive() {
    let err = GridMap::new(3, 3, 64.0, vec![Tile::Wall; 8]).unwrap_err();
    assert_eq!(err.to_string(), "expected 9 cells for the grid, got 8");

    let err = GridMap::from_rows(64.0, &["#?"]).unwrap_err();
    assert!(matches!(err, MapError::UnknownGlyph { glyph: '?', .. }));
}
