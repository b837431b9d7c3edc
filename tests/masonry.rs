//! End-to-end masonry lifecycle through the public API.
//!
//! Run with: cargo test --test masonry

use spark_masonry::{
    Item, Masonry, MasonryConfig, MeasuredGeometry, ReactorState, RecordingSink, Relayout,
};
use taffy::{Point, Size};

type Grid = Masonry<MeasuredGeometry, RecordingSink>;

// =============================================================================
// HELPERS
// =============================================================================

fn grid(container: f32) -> Grid {
    let cards = [50.0, 80.0, 30.0, 60.0, 40.0].map(|height| Size { width: 100.0, height });
    Masonry::initialize(
        MasonryConfig::with_gutter(20.0, 10.0),
        MeasuredGeometry::new(container),
        RecordingSink::new(),
        cards,
    )
    .expect("layout")
}

fn positions(grid: &Grid) -> Vec<(f32, f32)> {
    grid.items()
        .iter()
        .map(Item::position)
        .map(|Point { x, y }| (x, y))
        .collect()
}

fn resize(grid: &mut Grid, width: f32) -> Relayout {
    grid.geometry_mut().set_container_width(width);
    grid.on_resize()
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[test]
fn test_full_lifecycle() {
    let mut grid = grid(340.0);

    assert_eq!(
        positions(&grid),
        vec![(0.0, 0.0), (120.0, 0.0), (240.0, 0.0), (240.0, 40.0), (0.0, 60.0)]
    );
    assert_eq!(grid.column_heights(), &[110.0, 90.0, 110.0]);
    assert_eq!(grid.sink().passes(), 1);

    // Same width: nothing happens
    assert_eq!(grid.on_resize(), Relayout::NONE);
    assert_eq!(grid.sink().passes(), 1);

    // Wider, still 3 columns: width stored, no pass
    assert_eq!(resize(&mut grid, 350.0), Relayout::WIDTH_CHANGED);
    assert_eq!(grid.state(), ReactorState::Stable { width: 350.0, columns: 3 });
    assert_eq!(grid.sink().passes(), 1);

    // Narrow to 2 columns: full repack from zeroed heights
    let outcome = resize(&mut grid, 220.0);
    assert!(outcome.contains(Relayout::COLUMNS_CHANGED | Relayout::PACKED));
    assert_eq!(
        positions(&grid),
        vec![(0.0, 0.0), (120.0, 0.0), (0.0, 60.0), (120.0, 90.0), (0.0, 100.0)]
    );
    assert_eq!(grid.column_heights(), &[150.0, 160.0]);
    assert_eq!(grid.sink().passes(), 2);
    assert_eq!(grid.sink().placements().len(), 5);

    // Content box: 2 * 100 + 20 wide, tallest column minus trailing gutter
    assert_eq!(grid.content_size(), Size { width: 220.0, height: 150.0 });

    grid.destroy();
    grid.destroy();
    assert_eq!(grid.state(), ReactorState::Uninitialized);
    assert!(grid.items().is_empty());

    // Destroyed grids ignore resizes
    assert_eq!(resize(&mut grid, 340.0), Relayout::NONE);
    assert_eq!(grid.sink().passes(), 2);
}

#[test]
fn test_repack_matches_fresh_layout() {
    let mut resized = grid(340.0);
    resize(&mut resized, 220.0);

    let fresh = grid(220.0);
    assert_eq!(positions(&resized), positions(&fresh));
    assert_eq!(resized.column_heights(), fresh.column_heights());
}

#[test]
fn test_config_from_json() {
    let config: MasonryConfig = serde_json::from_str(r#"{"gutter":[20,10]}"#).expect("config");
    let grid = Masonry::initialize(
        config,
        MeasuredGeometry::new(340.0),
        RecordingSink::new(),
        [Size { width: 100.0, height: 50.0 }],
    )
    .expect("layout");

    assert_eq!(grid.column_count(), 3);
    assert_eq!(grid.column_heights(), &[60.0, 0.0, 0.0]);
}
