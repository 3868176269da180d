// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public [`FootprintIndex`] API over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::backends::{FlatVec, Grid};
use crate::types::Footprint;

/// Generational handle for reservations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Key(u32, u32);

impl Key {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Index keys are intentionally 32-bit."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Entry<P> {
    generation: u32,
    footprint: Footprint,
    payload: P,
}

/// Index of reserved ground-plane footprints, each carrying a payload.
///
/// Reservations take effect immediately; there is no batching step.
/// Query results come back in slot order, which is insertion order until a
/// removed slot gets reused.
#[derive(Debug)]
pub struct FootprintIndex<P: Copy + Debug, B: Backend = FlatVec> {
    entries: Vec<Option<Entry<P>>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    backend: B,
}

impl<P: Copy + Debug> FootprintIndex<P, FlatVec> {
    /// Create an empty index backed by a flat vector.
    pub fn new() -> Self {
        Self::with_backend(FlatVec::default())
    }
}

impl<P: Copy + Debug> Default for FootprintIndex<P, FlatVec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy + Debug> FootprintIndex<P, Grid> {
    /// Create a grid-backed index with the given cell size and lattice origin.
    pub fn with_uniform_grid(cell_w: f64, cell_d: f64, origin_x: f64, origin_z: f64) -> Self {
        Self::with_backend(Grid::new(cell_w, cell_d, origin_x, origin_z))
    }
}

impl<P: Copy + Debug, B: Backend> FootprintIndex<P, B> {
    /// Create an empty index over an explicit backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            entries: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            backend,
        }
    }

    /// Number of live reservations.
    pub fn len(&self) -> usize {
        self.entries.len() - self.free_list.len()
    }

    /// True if nothing is reserved.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reserve a footprint. Returns a stable handle.
    pub fn insert(&mut self, footprint: Footprint, payload: P) -> Key {
        let entry = |generation| Entry {
            generation,
            footprint,
            payload,
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.entries[idx] = Some(entry(generation));
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.entries.push(Some(entry(generation)));
            self.generations.push(generation);
            (self.entries.len() - 1, generation)
        };
        self.backend.insert(idx, footprint);
        Key::new(idx, generation)
    }

    /// Release a reservation. Stale keys are ignored.
    pub fn remove(&mut self, key: Key) -> Option<P> {
        let live = self.entry(key)?.payload;
        self.backend.remove(key.idx());
        self.entries[key.idx()] = None;
        self.free_list.push(key.idx());
        Some(live)
    }

    /// Drop every reservation.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.generations.clear();
        self.free_list.clear();
        self.backend.clear();
    }

    /// Look up a live reservation.
    pub fn get(&self, key: Key) -> Option<(Footprint, P)> {
        self.entry(key).map(|e| (e.footprint, e.payload))
    }

    /// Reservations that contain the point (boundary inclusive).
    pub fn query_point(&self, x: f64, z: f64) -> impl Iterator<Item = (Key, P)> + '_ {
        let mut slots: Vec<usize> = self.backend.query_point(x, z).collect();
        slots.sort_unstable();
        slots.dedup();
        slots.into_iter().filter_map(move |i| {
            let e = self.entries.get(i)?.as_ref()?;
            e.footprint
                .contains_point(x, z)
                .then(|| (Key::new(i, e.generation), e.payload))
        })
    }

    /// Reservations that overlap `area` with positive area.
    pub fn query_rect(&self, area: Footprint) -> impl Iterator<Item = (Key, Footprint, P)> + '_ {
        let mut slots: Vec<usize> = self.backend.query_rect(area).collect();
        slots.sort_unstable();
        slots.dedup();
        slots.into_iter().filter_map(move |i| {
            let e = self.entries.get(i)?.as_ref()?;
            e.footprint
                .overlaps(&area)
                .then(|| (Key::new(i, e.generation), e.footprint, e.payload))
        })
    }

    /// The first reservation (in slot order) overlapping `area`, if any.
    pub fn first_overlap(&self, area: Footprint) -> Option<(Footprint, P)> {
        self.query_rect(area).next().map(|(_, f, p)| (f, p))
    }

    /// True if `area` overlaps no reservation.
    pub fn is_free(&self, area: Footprint) -> bool {
        self.first_overlap(area).is_none()
    }

    /// Iterate live reservations in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Key, Footprint, P)> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, e)| {
            let e = e.as_ref()?;
            Some((Key::new(i, e.generation), e.footprint, e.payload))
        })
    }

    fn entry(&self, key: Key) -> Option<&Entry<P>> {
        let e = self.entries.get(key.idx())?.as_ref()?;
        (e.generation == key.1).then_some(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn stale_key_is_ignored_after_reuse() {
        let mut idx: FootprintIndex<u32> = FootprintIndex::new();
        let a = idx.insert(Footprint::new(0.0, 0.0, 1.0, 1.0), 1);
        assert_eq!(idx.remove(a), Some(1));
        let b = idx.insert(Footprint::new(5.0, 5.0, 6.0, 6.0), 2);
        assert_ne!(a, b, "slot reuse bumps the generation");
        assert_eq!(idx.remove(a), None);
        assert_eq!(idx.get(b).map(|(_, p)| p), Some(2));
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn first_overlap_follows_insertion_order() {
        let mut idx: FootprintIndex<&str> = FootprintIndex::new();
        idx.insert(Footprint::new(0.0, 0.0, 10.0, 10.0), "wide");
        idx.insert(Footprint::new(2.0, 2.0, 4.0, 4.0), "small");
        let hit = idx.first_overlap(Footprint::new(3.0, 3.0, 3.5, 3.5));
        assert_eq!(hit.map(|(_, p)| p), Some("wide"));
        assert!(idx.is_free(Footprint::new(10.0, 0.0, 12.0, 2.0)), "edge contact is free");
    }

    #[test]
    fn grid_and_flat_agree() {
        let mut flat: FootprintIndex<usize> = FootprintIndex::new();
        let mut grid: FootprintIndex<usize, Grid> =
            FootprintIndex::with_uniform_grid(4.0, 4.0, -50.0, -50.0);
        for i in 0..20_usize {
            let x = (i % 5) as f64 * 7.0 - 20.0;
            let z = (i / 5) as f64 * 6.0 - 10.0;
            let f = Footprint::from_origin_size(x, z, 5.0, 3.0);
            flat.insert(f, i);
            grid.insert(f, i);
        }
        let probe = Footprint::new(-14.0, -8.0, 3.0, 4.0);
        let a: Vec<_> = flat.query_rect(probe).map(|(_, _, p)| p).collect();
        let b: Vec<_> = grid.query_rect(probe).map(|(_, _, p)| p).collect();
        assert!(!a.is_empty());
        assert_eq!(a, b);
        let pa: Vec<_> = flat.query_point(-13.0, -9.0).map(|(_, p)| p).collect();
        let pb: Vec<_> = grid.query_point(-13.0, -9.0).map(|(_, p)| p).collect();
        assert_eq!(pa, pb);
    }
}
