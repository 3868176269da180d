// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc records and the arc visibility group.

use codecity_layout::Color;
use glam::DVec3;

use crate::config::ArcConfig;
use crate::curve::ArcCurve;

/// A curved link from one building to another.
#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
    /// Centre of the source building.
    pub from: DVec3,
    /// Centre of the target building.
    pub to: DVec3,
    /// Apex the curve passes through, above the midpoint of `from` and `to`.
    pub control: DVec3,
    /// Height of `control` above the higher end point.
    pub apex_height: f64,
    /// Hover text; empty when the connection had no annotation.
    pub label: String,
    /// Colour of the source building.
    pub color: Color,
    /// Source building label.
    pub source: String,
    /// Target building label.
    pub target: String,
}

impl Arc {
    /// The smooth curve through `from`, `control` and `to`.
    pub fn curve(&self) -> ArcCurve {
        ArcCurve::new([self.from, self.control, self.to])
    }

    /// The curve sampled into `segments + 1` points.
    pub fn polyline(&self, segments: usize) -> Vec<DVec3> {
        self.curve().sample(segments)
    }
}

/// All arcs of a city, shown or hidden together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArcGroup {
    arcs: Vec<Arc>,
    hidden: bool,
}

impl ArcGroup {
    /// A visible group holding `arcs`.
    pub fn new(arcs: Vec<Arc>) -> Self {
        Self {
            arcs,
            hidden: false,
        }
    }

    /// Hide or show every arc.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Whether the group is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The arcs to draw: all of them, or none while hidden.
    pub fn visible(&self) -> &[Arc] {
        if self.hidden { &[] } else { &self.arcs }
    }

    /// Line strips for the visible arcs, each sampled with
    /// [`ArcConfig::curve_segments`] segments.
    pub fn polylines<'a>(
        &'a self,
        config: &ArcConfig,
    ) -> impl Iterator<Item = Vec<DVec3>> + 'a {
        let segments = config.curve_segments;
        self.visible().iter().map(move |arc| arc.polyline(segments))
    }

    /// Every arc, regardless of visibility.
    pub fn iter(&self) -> core::slice::Iter<'_, Arc> {
        self.arcs.iter()
    }

    /// Every arc as a slice, regardless of visibility.
    pub fn as_slice(&self) -> &[Arc] {
        &self.arcs
    }

    /// Number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// True if there are no arcs.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArcGroup {
    type Item = &'a Arc;
    type IntoIter = core::slice::Iter<'a, Arc>;

    fn into_iter(self) -> Self::IntoIter {
        self.arcs.iter()
    }
}
