// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend keyed by integer cell coordinates.

use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Footprint;

/// Uniform grid backend.
///
/// Footprints are mapped to every cell they cover; queries aggregate the slots
/// of the covered cells. The origin offset only shifts the cell lattice, so
/// negative coordinates (a centered city) are fine.
pub struct Grid {
    cell_w: f64,
    cell_d: f64,
    origin_x: f64,
    origin_z: f64,
    entries: Vec<Option<Footprint>>,
    cells: BTreeMap<(i64, i64), Vec<usize>>,
}

impl Grid {
    /// Create a grid backend with the given cell size and origin offset.
    ///
    /// Non-positive cell sizes are replaced by `1.0`.
    pub fn new(cell_w: f64, cell_d: f64, origin_x: f64, origin_z: f64) -> Self {
        Self {
            cell_w: if cell_w > 0.0 { cell_w } else { 1.0 },
            cell_d: if cell_d > 0.0 { cell_d } else { 1.0 },
            origin_x,
            origin_z,
            entries: Vec::new(),
            cells: BTreeMap::new(),
        }
    }

    #[inline]
    fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Cell coordinates saturate; layouts never span i64 cells."
        )]
        let i = v as i64;
        if (i as f64) > v { i - 1 } else { i }
    }

    fn key_for(&self, x: f64, z: f64) -> (i64, i64) {
        let cx = Self::floor_to_i64((x - self.origin_x) / self.cell_w);
        let cz = Self::floor_to_i64((z - self.origin_z) / self.cell_d);
        (cx, cz)
    }

    fn cells_for(&self, f: &Footprint) -> impl Iterator<Item = (i64, i64)> + use<> {
        let (min_x, min_z) = self.key_for(f.min_x, f.min_z);
        let (max_x, max_z) = self.key_for(f.max_x, f.max_z);
        (min_z..=max_z).flat_map(move |z| (min_x..=max_x).map(move |x| (x, z)))
    }

    fn remove_from_cells(&mut self, slot: usize) {
        let Some(Some(old)) = self.entries.get(slot).copied() else {
            return;
        };
        let keys: Vec<(i64, i64)> = self.cells_for(&old).collect();
        for key in keys {
            if let Some(slots) = self.cells.get_mut(&key) {
                slots.retain(|&s| s != slot);
                if slots.is_empty() {
                    self.cells.remove(&key);
                }
            }
        }
    }
}

impl Backend for Grid {
    fn insert(&mut self, slot: usize, footprint: Footprint) {
        self.remove_from_cells(slot);
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some(footprint);
        let keys: Vec<(i64, i64)> = self.cells_for(&footprint).collect();
        for key in keys {
            self.cells.entry(key).or_default().push(slot);
        }
    }

    fn remove(&mut self, slot: usize) {
        self.remove_from_cells(slot);
        if let Some(e) = self.entries.get_mut(slot) {
            *e = None;
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.cells.clear();
    }

    fn query_point<'a>(&'a self, x: f64, z: f64) -> Box<dyn Iterator<Item = usize> + 'a> {
        let key = self.key_for(x, z);
        let slots = self.cells.get(&key).map(Vec::as_slice).unwrap_or(&[]);
        Box::new(slots.iter().copied())
    }

    fn query_rect<'a>(&'a self, area: Footprint) -> Box<dyn Iterator<Item = usize> + 'a> {
        let mut set = BTreeSet::new();
        for key in self.cells_for(&area) {
            if let Some(slots) = self.cells.get(&key) {
                set.extend(slots.iter().copied());
            }
        }
        Box::new(set.into_iter())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.entries.len();
        let alive = self.entries.iter().filter(|e| e.is_some()).count();
        f.debug_struct("Grid")
            .field("cell_w", &self.cell_w)
            .field("cell_d", &self.cell_d)
            .field("origin_x", &self.origin_x)
            .field("origin_z", &self.origin_z)
            .field("total_slots", &total)
            .field("alive", &alive)
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn negative_coordinates_map_to_distinct_cells() {
        let mut grid = Grid::new(10.0, 10.0, 0.0, 0.0);
        grid.insert(0, Footprint::new(-15.0, -15.0, -12.0, -12.0));
        grid.insert(1, Footprint::new(2.0, 2.0, 4.0, 4.0));
        let hits: Vec<_> = grid.query_point(-13.0, -13.0).collect();
        assert_eq!(hits, [0]);
        let hits: Vec<_> = grid.query_point(3.0, 3.0).collect();
        assert_eq!(hits, [1]);
    }

    #[test]
    fn remove_clears_every_covered_cell() {
        let mut grid = Grid::new(5.0, 5.0, 0.0, 0.0);
        grid.insert(3, Footprint::new(0.0, 0.0, 12.0, 12.0));
        assert!(grid.query_rect(Footprint::new(11.0, 11.0, 12.0, 12.0)).any(|s| s == 3));
        grid.remove(3);
        assert_eq!(grid.query_rect(Footprint::new(0.0, 0.0, 20.0, 20.0)).count(), 0);
        assert!(grid.cells.is_empty(), "empty cells are dropped");
    }

    #[test]
    fn non_positive_cell_size_falls_back() {
        let grid = Grid::new(0.0, -3.0, 0.0, 0.0);
        assert_eq!(grid.cell_w, 1.0);
        assert_eq!(grid.cell_d, 1.0);
    }
}
