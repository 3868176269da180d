// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for footprint indexing strategies.

use alloc::boxed::Box;

use crate::types::Footprint;

/// Spatial backend abstraction used by [`FootprintIndex`](crate::FootprintIndex).
///
/// Backends return *candidate* slots. They may over-report; the index applies
/// the exact overlap test before handing results to callers.
pub trait Backend {
    /// Insert a new slot into the spatial structure.
    fn insert(&mut self, slot: usize, footprint: Footprint);

    /// Remove a slot from the spatial structure.
    fn remove(&mut self, slot: usize);

    /// Clear all spatial structures.
    fn clear(&mut self);

    /// Candidate slots whose footprint may contain the point.
    fn query_point<'a>(&'a self, x: f64, z: f64) -> Box<dyn Iterator<Item = usize> + 'a>;

    /// Candidate slots whose footprint may overlap `area`.
    fn query_rect<'a>(&'a self, area: Footprint) -> Box<dyn Iterator<Item = usize> + 'a>;
}
