// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The narrow interface to whatever draws the city.

use bitflags::bitflags;
use codecity_arcs::Arc;
use codecity_layout::{BuildingPlacement, GroundPlacement};

bitflags! {
    /// Which parts of the scene are shown.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SceneLayers: u8 {
        /// District ground plates.
        const GROUNDS   = 0b0000_0001;
        /// Building boxes.
        const BUILDINGS = 0b0000_0010;
        /// Connection arcs.
        const ARCS      = 0b0000_0100;
    }
}

impl Default for SceneLayers {
    fn default() -> Self {
        Self::all()
    }
}

/// Receives the placements of a finished city.
///
/// Implemented by a rendering backend. [`City::emit`](crate::City::emit)
/// calls `ground` for every plate, then `building` for every building, then
/// `arc` for every arc, and finally `set_arcs_visible` once.
pub trait SceneSink {
    /// A district plate.
    fn ground(&mut self, ground: &GroundPlacement);
    /// A building box.
    fn building(&mut self, building: &BuildingPlacement);
    /// A connection arc.
    fn arc(&mut self, arc: &Arc);
    /// Show or hide every arc at once.
    fn set_arcs_visible(&mut self, visible: bool);
}

impl<S: SceneSink + ?Sized> SceneSink for &mut S {
    fn ground(&mut self, ground: &GroundPlacement) {
        (**self).ground(ground);
    }

    fn building(&mut self, building: &BuildingPlacement) {
        (**self).building(building);
    }

    fn arc(&mut self, arc: &Arc) {
        (**self).arc(arc);
    }

    fn set_arcs_visible(&mut self, visible: bool) {
        (**self).set_arcs_visible(visible);
    }
}
