// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-scan backend for districts with a handful of reservations.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Footprint;

/// Every footprint in one vector, scanned in full on each query.
#[derive(Default)]
pub struct FlatVec {
    entries: Vec<Option<Footprint>>,
}

impl Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let reserved = self.entries.iter().flatten().count();
        f.debug_struct("FlatVec")
            .field("slots", &self.entries.len())
            .field("reserved", &reserved)
            .finish_non_exhaustive()
    }
}

impl Backend for FlatVec {
    fn insert(&mut self, slot: usize, footprint: Footprint) {
        if self.entries.len() <= slot {
            self.entries.resize_with(slot + 1, || None);
        }
        self.entries[slot] = Some(footprint);
    }

    fn remove(&mut self, slot: usize) {
        if let Some(e) = self.entries.get_mut(slot) {
            *e = None;
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn query_point<'a>(&'a self, x: f64, z: f64) -> Box<dyn Iterator<Item = usize> + 'a> {
        Box::new(
            self.entries
                .iter()
                .enumerate()
                .filter_map(move |(i, slot)| match slot {
                    Some(f) if f.contains_point(x, z) => Some(i),
                    _ => None,
                }),
        )
    }

    fn query_rect<'a>(&'a self, area: Footprint) -> Box<dyn Iterator<Item = usize> + 'a> {
        Box::new(
            self.entries
                .iter()
                .enumerate()
                .filter_map(move |(i, slot)| match slot {
                    Some(f) if f.overlaps(&area) => Some(i),
                    _ => None,
                }),
        )
    }
}
