//! Fixed-capacity selection state mapping occupations to display slots.
//!
//! The dashboard grid has a fixed number of plot slots. Selecting an
//! occupation assigns it the slot under the allocation cursor; deselecting
//! frees the slot and makes the allocator prefer it next, so the rest of
//! the grid keeps its layout. Selecting beyond capacity evicts whichever
//! occupation holds the cursor slot.

/// A bounded occupation -> slot map with round-robin slot recycling.
///
/// Invariants: at most `capacity` occupations are selected at any time, and
/// occupied slot indices are a duplicate-free subset of `[0, capacity)`.
#[derive(Debug, Clone)]
pub struct Selection {
    slots: Vec<Option<String>>,
    cursor: usize,
}

impl Selection {
    /// Create an empty selection with the given number of display slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            cursor: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently selected occupations.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    pub fn contains(&self, occupation: &str) -> bool {
        self.slot_of(occupation).is_some()
    }

    /// The slot index an occupation is displayed in, if selected.
    pub fn slot_of(&self, occupation: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.as_deref() == Some(occupation))
    }

    /// The slot the next insertion will use.
    pub fn next_slot(&self) -> usize {
        self.cursor
    }

    /// Selected occupations with their slot indices, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_deref().map(|occ| (i, occ)))
    }

    /// Select an occupation, assigning it the cursor slot.
    ///
    /// When the selection is full the cursor slot's occupant is evicted and
    /// returned so the caller can clear its visual state. Inserting an
    /// already-selected occupation is a no-op. Afterwards the cursor moves
    /// to the next free slot, wrapping around and skipping occupied ones.
    pub fn insert(&mut self, occupation: &str) -> Option<String> {
        if self.capacity() == 0 || self.contains(occupation) {
            return None;
        }

        if !self.is_full() && self.slots[self.cursor].is_some() {
            self.advance_to_free();
        }

        let evicted = self.slots[self.cursor].replace(occupation.to_string());
        self.cursor = (self.cursor + 1) % self.capacity();
        if !self.is_full() {
            self.advance_to_free();
        }

        evicted
    }

    /// Deselect an occupation, returning its freed slot index.
    ///
    /// The freed slot becomes the cursor slot, so the next insertion fills
    /// the gap instead of disturbing the rest of the grid.
    pub fn remove(&mut self, occupation: &str) -> Option<usize> {
        let slot = self.slot_of(occupation)?;
        self.slots[slot] = None;
        self.cursor = slot;
        Some(slot)
    }

    /// Move the cursor forward to the nearest free slot. Caller ensures at
    /// least one slot is free.
    fn advance_to_free(&mut self) {
        let capacity = self.capacity();
        for _ in 0..capacity {
            if self.slots[self.cursor].is_none() {
                return;
            }
            self.cursor = (self.cursor + 1) % capacity;
        }
    }
}
