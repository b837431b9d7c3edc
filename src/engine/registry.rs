//! Item Registry - Registration order and measured sizes.
//!
//! Items live in two parallel arrays: the measured `Item` records that the
//! layout pass reads and writes, and the host elements handed back to the
//! placement sink. Both are kept in registration order, which is the packing
//! order.
//!
//! ```text
//! Index 0: Item { 100x50 }  ↔  element 0
//! Index 1: Item { 100x80 }  ↔  element 1
//! Index 3: Item { 100x30 }  ↔  element 3   (element 2 failed measurement)
//! ```

use tracing::warn;

use crate::error::Result;
use crate::types::Item;

use super::geometry::Geometry;

// =============================================================================
// ItemSet
// =============================================================================

/// Ordered collection of registered items and their host elements.
#[derive(Debug, Clone)]
pub struct ItemSet<E> {
    items: Vec<Item>,
    elements: Vec<E>,
    /// Next registration index, consumed even by rejected elements.
    next_index: usize,
    rejected: usize,
}

impl<E> Default for ItemSet<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            elements: Vec::new(),
            next_index: 0,
            rejected: 0,
        }
    }
}

impl<E> ItemSet<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure and register one element.
    ///
    /// Returns the item's index. On a bad measurement the element is dropped,
    /// its index is still consumed, and the error is returned.
    pub fn register<G>(&mut self, geometry: &G, element: E) -> Result<usize>
    where
        G: Geometry<Element = E>,
    {
        let index = self.next_index;
        self.next_index += 1;

        let width = geometry.item_width(&element);
        let height = geometry.item_height(&element);
        match Item::measured(index, width, height) {
            Ok(item) => {
                self.items.push(item);
                self.elements.push(element);
                Ok(index)
            }
            Err(err) => {
                self.rejected += 1;
                Err(err)
            }
        }
    }

    /// Register elements in order, skipping (and logging) the ones whose
    /// measurements are unusable.
    ///
    /// Returns the number of elements accepted.
    pub fn register_all<G, I>(&mut self, geometry: &G, elements: I) -> usize
    where
        G: Geometry<Element = E>,
        I: IntoIterator<Item = E>,
    {
        let mut accepted = 0;
        for element in elements {
            match self.register(geometry, element) {
                Ok(_) => accepted += 1,
                Err(err) => warn!("skipping item: {}", err),
            }
        }
        accepted
    }

    /// Width shared by every item in a pass: the first registered item's.
    pub fn item_width(&self) -> Option<f32> {
        self.items.first().map(Item::width)
    }

    /// Remove an item by registration index.
    ///
    /// The remaining items keep their relative order.
    pub fn remove(&mut self, index: usize) -> Option<E> {
        let pos = self.items.iter().position(|item| item.index() == index)?;
        self.items.remove(pos);
        Some(self.elements.remove(pos))
    }

    /// Drop every item and element.
    pub fn clear(&mut self) {
        self.items.clear();
        self.elements.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements refused at registration.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// Items paired with their elements, in packing order.
    pub fn iter(&self) -> impl Iterator<Item = (&Item, &E)> {
        self.items.iter().zip(self.elements.iter())
    }
}

// =============================================================================
// Tests
// =============================================================================
