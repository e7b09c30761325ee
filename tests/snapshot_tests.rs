//! Snapshot tests - save/restore round trips and the wire shape

use same_gravity::core::{Grid, GridSize, GridSnapshot};
use same_gravity::types::GravityDirection;

#[test]
fn test_roundtrip_preserves_everything() {
    let mut grid = Grid::generate(5, 10, 4, 808);
    let destroyed = grid.compute_destroy(2, 3);
    grid.apply_destroy(&destroyed);
    grid.apply_gravity(GravityDirection::Left);

    let snapshot = grid.snapshot();
    let restored = Grid::from_snapshot(&snapshot);

    assert_eq!(restored.width(), grid.width());
    assert_eq!(restored.height(), grid.height());
    assert_eq!(restored.nb_colors(), grid.nb_colors());
    assert_eq!(restored.snapshot().columns, snapshot.columns);
}

#[test]
fn test_snapshot_is_a_deep_copy() {
    let mut grid = Grid::generate(3, 3, 2, 17);
    let snapshot = grid.snapshot();
    let before = snapshot.clone();

    for x in 0..3 {
        for y in 0..3 {
            grid.set(x, y, None);
        }
    }
    assert_eq!(snapshot, before);
    assert_eq!(Grid::from_snapshot(&snapshot).count_blocks(), 9);
}

#[test]
fn test_json_wire_shape() {
    let mut grid = Grid::empty(2, 2, 3);
    grid.set(0, 0, Some(1));

    let json = serde_json::to_value(grid.snapshot()).expect("snapshot serializes");
    assert_eq!(json["size"]["x"], 2);
    assert_eq!(json["size"]["y"], 2);
    assert_eq!(json["nbColors"], 3);
    assert_eq!(json["columns"][0][0], 1);
    assert!(json["columns"][0][1].is_null());
    assert!(json["columns"][1][0].is_null());
}

#[test]
fn test_json_roundtrip() {
    let grid = Grid::generate(5, 10, 4, 4242);
    let text = serde_json::to_string(&grid.snapshot()).expect("snapshot serializes");
    let parsed: GridSnapshot = serde_json::from_str(&text).expect("snapshot parses");

    assert_eq!(parsed, grid.snapshot());
    assert_eq!(Grid::from_snapshot(&parsed).snapshot(), grid.snapshot());
}

#[test]
fn test_saved_compacted_columns_restore() {
    // A save written from a compacted board may carry short columns
    let text = r#"{
        "size": { "x": 3, "y": 4 },
        "nbColors": 2,
        "columns": [[0, 1], [], [1]]
    }"#;
    let snapshot: GridSnapshot = serde_json::from_str(text).expect("snapshot parses");
    assert_eq!(snapshot.size, GridSize { x: 3, y: 4 });

    let grid = Grid::from_snapshot(&snapshot);
    assert_eq!(grid.column(0), &[Some(0), Some(1), None, None]);
    assert_eq!(grid.column(1), &[None, None, None, None]);
    assert_eq!(grid.column(2), &[Some(1), None, None, None]);
    assert_eq!(grid.gravity(), None);
}
