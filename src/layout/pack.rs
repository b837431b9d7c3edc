//! Shortest-Column Packing
//!
//! Greedy masonry layout over items of a shared width.
//!
//! # Algorithm
//!
//! For each item, in registration order:
//!
//! 1. Pick the column with the least accumulated height (lowest index on ties)
//! 2. `y` = that column's height, `x` = one item width plus one gutter per column to the left
//! 3. Grow the column by the item height plus the vertical gutter
//!
//! The vertical gutter is added beneath every item, the last one in a column
//! included. The pass starts from whatever heights the caller hands in;
//! repacking from zeroed columns with the same items always gives the same
//! positions.

use taffy::{Point, Size};
use tracing::debug;

use crate::renderer::PlacementSink;
use crate::types::{Gutter, Item};

use super::columns::Columns;

// =============================================================================
// PACK
// =============================================================================

/// Assign a position to every item and accumulate column heights.
///
/// With no columns there is nowhere to put anything: positions are left as
/// they were.
pub fn pack(items: &mut [Item], columns: &mut Columns, gutter: Gutter) {
    if columns.count() == 0 {
        if !items.is_empty() {
            debug!(items = items.len(), "no columns fit, skipping pack");
        }
        return;
    }

    for item in items.iter_mut() {
        let Some(column) = columns.shortest() else { return };
        let y = columns.heights()[column];
        let col = column as f32;
        let x = col * item.width() + col * gutter.horizontal;

        item.set_position(x, y);
        columns.grow(column, item.height() + gutter.vertical);
    }
}

// =============================================================================
// RENDER
// =============================================================================

/// Hand every computed position to the sink, unchanged.
pub fn render<'a, E, S>(placed: impl IntoIterator<Item = (&'a Item, &'a E)>, sink: &mut S)
where
    E: 'a,
    S: PlacementSink<E> + ?Sized,
{
    sink.begin_pass();
    for (item, element) in placed {
        sink.place(element, item.position());
    }
    sink.end_pass();
}

// =============================================================================
// CONTENT SIZE
// =============================================================================

/// Bounding box of the packed grid.
///
/// Width spans the columns and the gutters between them. Height is the
/// tallest column without its trailing vertical gutter.
pub fn content_size(columns: &Columns, item_width: f32, gutter: Gutter) -> Size<f32> {
    let count = columns.count();
    if count == 0 {
        return Size { width: 0.0, height: 0.0 };
    }

    let n = count as f32;
    let tallest = columns.tallest();
    let height = if tallest > 0.0 {
        (tallest - gutter.vertical).max(0.0)
    } else {
        0.0
    };

    Size {
        width: n * item_width + (n - 1.0) * gutter.horizontal,
        height,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSink;
    use proptest::prelude::*;

    const ORIGIN: Point<f32> = Point { x: 0.0, y: 0.0 };

    fn items(width: f32, heights: &[f32]) -> Vec<Item> {
        heights
            .iter()
            .enumerate()
            .map(|(i, h)| Item::measured(i, width, *h).unwrap())
            .collect()
    }

    fn positions(items: &[Item]) -> Vec<(f32, f32)> {
        items.iter().map(|i| (i.position().x, i.position().y)).collect()
    }

    #[test]
    fn test_pack_scenario() {
        let mut items = items(100.0, &[50.0, 80.0, 30.0, 60.0, 40.0]);
        let mut columns = Columns::new(3);

        pack(&mut items, &mut columns, Gutter::new(20.0, 10.0));

        assert_eq!(
            positions(&items),
            vec![(0.0, 0.0), (120.0, 0.0), (240.0, 0.0), (240.0, 40.0), (0.0, 60.0)]
        );
        assert_eq!(columns.heights(), &[110.0, 90.0, 110.0]);
    }

    #[test]
    fn test_pack_tie_break_lowest_index() {
        let mut items = items(100.0, &[10.0]);
        let mut columns = Columns::from(vec![50.0, 30.0, 30.0]);

        pack(&mut items, &mut columns, Gutter::new(10.0, 10.0));

        assert_eq!(items[0].position(), Point { x: 110.0, y: 30.0 });
        assert_eq!(columns.heights(), &[50.0, 50.0, 30.0]);
    }

    #[test]
    fn test_pack_height_accumulation() {
        let mut items = items(100.0, &[40.0]);
        let mut columns = Columns::from(vec![60.0, 30.0]);

        pack(&mut items, &mut columns, Gutter::new(0.0, 10.0));

        assert_eq!(columns.height(1), Some(80.0));
    }

    #[test]
    fn test_pack_horizontal_offset() {
        let mut items = items(100.0, &[10.0]);
        let mut columns = Columns::from(vec![5.0, 5.0, 0.0]);

        pack(&mut items, &mut columns, Gutter::new(10.0, 0.0));

        assert_eq!(items[0].position().x, 220.0);
    }

    #[test]
    fn test_pack_trailing_gutter_kept() {
        let mut items = items(100.0, &[20.0]);
        let mut columns = Columns::new(1);

        pack(&mut items, &mut columns, Gutter::new(0.0, 15.0));

        assert_eq!(columns.heights(), &[35.0]);
    }

    #[test]
    fn test_pack_empty_is_noop() {
        let mut columns = Columns::new(3);
        pack(&mut [], &mut columns, Gutter::default());
        assert_eq!(columns.heights(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_pack_without_columns_leaves_positions() {
        let mut items = items(100.0, &[10.0, 20.0]);
        let mut columns = Columns::new(0);

        pack(&mut items, &mut columns, Gutter::default());

        assert!(items.iter().all(|i| i.position() == ORIGIN));
    }

    #[test]
    fn test_render_passes_positions_unchanged() {
        let mut items = items(33.5, &[10.0, 10.0]);
        let mut columns = Columns::new(2);
        pack(&mut items, &mut columns, Gutter::new(0.25, 0.0));

        let elements = ['a', 'b'];
        let mut sink = RecordingSink::new();
        render(items.iter().zip(elements.iter()), &mut sink);

        assert_eq!(sink.passes(), 1);
        assert_eq!(sink.placements(), &[ORIGIN, Point { x: 33.75, y: 0.0 }]);
    }

    #[test]
    fn test_content_size() {
        let mut items = items(100.0, &[50.0, 80.0, 30.0, 60.0, 40.0]);
        let mut columns = Columns::new(3);
        let gutter = Gutter::new(20.0, 10.0);
        pack(&mut items, &mut columns, gutter);

        let size = content_size(&columns, 100.0, gutter);
        assert_eq!(size, Size { width: 340.0, height: 100.0 });

        assert_eq!(
            content_size(&Columns::new(0), 100.0, gutter),
            Size { width: 0.0, height: 0.0 }
        );
        assert_eq!(
            content_size(&Columns::new(2), 100.0, gutter),
            Size { width: 220.0, height: 0.0 }
        );
    }

    proptest! {
        #[test]
        fn prop_pack_is_deterministic(
            heights in prop::collection::vec(0.0f32..500.0, 0..40),
            count in 1usize..8,
            gx in 0.0f32..30.0,
            gy in 0.0f32..30.0,
        ) {
            let gutter = Gutter::new(gx, gy);

            let mut first = items(100.0, &heights);
            let mut columns = Columns::new(count);
            pack(&mut first, &mut columns, gutter);

            let mut second = items(100.0, &heights);
            let mut columns_again = Columns::new(count);
            pack(&mut second, &mut columns_again, gutter);

            prop_assert_eq!(positions(&first), positions(&second));
            prop_assert_eq!(columns.heights(), columns_again.heights());
        }

        #[test]
        fn prop_each_item_lands_on_a_shortest_column(
            heights in prop::collection::vec(1.0f32..200.0, 1..30),
            count in 1usize..6,
        ) {
            let gutter = Gutter::new(10.0, 5.0);
            let mut columns = Columns::new(count);

            for (i, h) in heights.iter().enumerate() {
                let before = columns.heights().to_vec();
                let min = before.iter().copied().fold(f32::INFINITY, f32::min);
                let expected = before.iter().position(|v| *v == min).unwrap();

                let mut one = [Item::measured(i, 100.0, *h).unwrap()];
                pack(&mut one, &mut columns, gutter);

                prop_assert_eq!(one[0].position().y, min);
                prop_assert_eq!(one[0].position().x, expected as f32 * 110.0);
            }
        }
    }
}
