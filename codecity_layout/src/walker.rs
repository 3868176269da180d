// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement walk: one ground per district, one position per building.
//!
//! ## Overview
//!
//! The walk visits the centred tree depth-first and emits a
//! [`GroundPlacement`] per node, stacked `layer_height` apart by level.
//!
//! - A leaf district runs a second, unrounded treemap over its own buildings
//!   and puts each building at the centre of its slot. Slots are computed in
//!   the district's local frame and shifted by the district origin.
//! - A district with children visits them first, reserves their rectangles in
//!   a [`FootprintIndex`], and then row-packs its own buildings around them,
//!   starting at its reserve slot.
//!
//! ## Row packing
//!
//! Buildings advance along x and wrap to a new row when the next one would
//! cross the right edge. A candidate that overlaps a reserved footprint moves
//! right past the blocker, or wraps when that would cross the edge. After
//! `max_placement_attempts` candidates the building falls back to the first one.
//! Every shortcut is recorded as a [`Diagnostic::PlacementOverflow`].

use codecity_index::{Backend, Footprint, FootprintIndex};
use glam::DVec3;
use kurbo::{Point, Rect, Vec2};

use crate::color::Color;
use crate::config::LayoutConfig;
use crate::descriptor::{BuildingSpec, sanitize};
use crate::diagnostics::{Diagnostic, Diagnostics, OverflowReason};
use crate::hierarchy::{DistrictTree, NodeId};
use crate::placement::{BuildingPlacement, GroundPlacement, PlacementTable};
use crate::treemap::{padded_slots, shrink};

/// Above this many obstacles plus buildings, reservations go into a grid.
const GRID_THRESHOLD: usize = 48;

/// Slack for float comparisons against district edges.
const EPS: f64 = 1e-9;

/// What occupies a reserved footprint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Reserved {
    District(NodeId),
    Building(usize),
}

/// Emit grounds and building placements for a partitioned, centred tree.
///
/// Buildings whose district is not declared in `tree` are skipped with
/// [`Diagnostic::UnknownDistrict`].
pub fn walk(
    tree: &DistrictTree,
    buildings: &[BuildingSpec],
    config: &LayoutConfig,
    diagnostics: &mut Diagnostics,
) -> (Vec<GroundPlacement>, PlacementTable) {
    let mut owned = vec![Vec::new(); tree.len()];
    for (i, b) in buildings.iter().enumerate() {
        match tree.find_declared(&b.district) {
            Some(id) => owned[id.idx()].push(i),
            None => diagnostics.push(Diagnostic::UnknownDistrict {
                building: b.label.clone(),
                district: b.district.clone(),
            }),
        }
    }
    let mut walker = Walker {
        tree,
        buildings,
        config,
        owned,
        diagnostics,
        grounds: Vec::with_capacity(tree.len()),
        table: PlacementTable::default(),
    };
    walker.visit(tree.root());
    (walker.grounds, walker.table)
}

struct Walker<'a> {
    tree: &'a DistrictTree,
    buildings: &'a [BuildingSpec],
    config: &'a LayoutConfig,
    owned: Vec<Vec<usize>>,
    diagnostics: &'a mut Diagnostics,
    grounds: Vec<GroundPlacement>,
    table: PlacementTable,
}

impl Walker<'_> {
    fn visit(&mut self, id: NodeId) {
        let tree = self.tree;
        let node = tree.node(id);
        self.ground(id);
        if node.is_leaf() {
            self.place_leaf(id, node.rect().origin().to_vec2());
            return;
        }
        for &child in node.children() {
            self.visit(child);
        }
        if self.owned[id.idx()].is_empty() {
            return;
        }
        let load = node.children().len() + self.owned[id.idx()].len();
        if load > GRID_THRESHOLD {
            let r = node.rect();
            let cell = (r.width().max(r.height()) / 16.0).max(1.0);
            self.pack_rows(id, FootprintIndex::with_uniform_grid(cell, cell, r.x0, r.y0));
        } else {
            self.pack_rows(id, FootprintIndex::new());
        }
    }

    fn ground(&mut self, id: NodeId) {
        let node = self.tree.node(id);
        let level = node.level() as f64;
        let center = node.rect().center();
        let lightness = (100.0 - level * self.config.ground_lightness_step).max(0.0);
        let y = self.ground_y(id);
        self.grounds.push(GroundPlacement {
            label: node.segment().to_owned(),
            path: node.path().to_owned(),
            level: node.level(),
            rect: node.rect(),
            position: DVec3::new(center.x, y, center.y),
            thickness: self.config.ground_thickness,
            color: Color::gray(lightness),
        });
    }

    /// Secondary treemap over the buildings of a leaf district.
    fn place_leaf(&mut self, id: NodeId, origin: Vec2) {
        let owned = core::mem::take(&mut self.owned[id.idx()]);
        if owned.is_empty() {
            return;
        }
        let buildings = self.buildings;
        let local = Rect::from_origin_size(Point::ZERO, self.tree.node(id).rect().size());
        let pad = self.config.building_treemap_padding;
        // Each slot loses `pad` per axis, so weight by the padded footprint.
        let weights: Vec<f64> = owned
            .iter()
            .map(|&i| {
                let (w, d) = buildings[i].footprint();
                (w + pad) * (d + pad)
            })
            .collect();
        let slots = padded_slots(&weights, local, pad);
        for (i, slot) in owned.into_iter().zip(slots) {
            let slot = slot + origin;
            let (w, d) = buildings[i].footprint();
            if w > slot.width() + EPS || d > slot.height() + EPS {
                self.overflow(id, i, OverflowReason::SlotTooSmall);
            }
            self.emit(id, i, slot.center());
        }
    }

    /// Row-pack the buildings of a district around its children.
    fn pack_rows<B: Backend>(&mut self, id: NodeId, reserved: FootprintIndex<Reserved, B>) {
        let tree = self.tree;
        let buildings = self.buildings;
        let node = tree.node(id);
        let inner = shrink(node.rect(), self.config.district_padding);
        let start = node.reserve().map_or(inner.origin(), |r| r.origin());
        let mut packer = RowPacker::new(inner, start, self.config, reserved);
        for &child in node.children() {
            packer.reserve(tree.node(child).rect(), Reserved::District(child));
        }
        for i in core::mem::take(&mut self.owned[id.idx()]) {
            let (w, d) = buildings[i].footprint();
            let (rect, reason) = packer.place(w, d, Reserved::Building(i));
            if let Some(reason) = reason {
                self.overflow(id, i, reason);
            }
            self.emit(id, i, rect.center());
        }
    }

    fn emit(&mut self, id: NodeId, i: usize, center: Point) {
        let spec = &self.buildings[i];
        let height = sanitize(spec.height);
        let y = self.ground_y(id) + 0.5 * self.config.ground_thickness + 0.5 * height
            - self.config.building_sink;
        let (width, depth) = spec.footprint();
        tracing::trace!(building = %spec.label, x = center.x, z = center.y, "placed");
        self.table.push(BuildingPlacement {
            label: spec.label.clone(),
            district: spec.district.clone(),
            position: DVec3::new(center.x, y, center.y),
            width,
            height,
            depth,
            color: spec.color,
            connections: spec.connections.clone(),
            annotations: spec.annotations.clone(),
        });
    }

    fn overflow(&mut self, id: NodeId, i: usize, reason: OverflowReason) {
        self.diagnostics.push(Diagnostic::PlacementOverflow {
            building: self.buildings[i].label.clone(),
            district: self.tree.node(id).path().to_owned(),
            reason,
        });
    }

    fn ground_y(&self, id: NodeId) -> f64 {
        self.tree.node(id).level() as f64 * self.config.layer_height
    }
}

/// Row-packing cursor with collision avoidance.
struct RowPacker<B: Backend> {
    inner: Rect,
    padding: f64,
    max_attempts: usize,
    start_x: f64,
    x: f64,
    z: f64,
    bottom: f64,
    reserved: FootprintIndex<Reserved, B>,
}

impl<B: Backend> RowPacker<B> {
    fn new(
        inner: Rect,
        start: Point,
        config: &LayoutConfig,
        reserved: FootprintIndex<Reserved, B>,
    ) -> Self {
        Self {
            inner,
            padding: config.building_padding,
            max_attempts: config.max_placement_attempts,
            start_x: start.x,
            x: start.x,
            z: start.y,
            bottom: start.y,
            reserved,
        }
    }

    fn reserve(&mut self, rect: Rect, what: Reserved) {
        self.reserved.insert(to_footprint(rect), what);
    }

    fn wrap(&mut self, depth: f64) {
        self.z = self.bottom.max(self.z + depth) + self.padding;
        self.x = self.start_x;
        self.bottom = self.z;
    }

    fn candidate(&self, w: f64, d: f64) -> Rect {
        Rect::new(self.x, self.z, self.x + w, self.z + d)
    }

    /// Place a `w` by `d` building and reserve its footprint.
    fn place(&mut self, w: f64, d: f64, what: Reserved) -> (Rect, Option<OverflowReason>) {
        if self.x + w > self.inner.x1 + EPS && self.x > self.start_x {
            self.wrap(d);
        }
        let resume = (self.x, self.z, self.bottom);
        let first = self.candidate(w, d);
        let mut candidate = first;
        let mut found = None;
        for _ in 0..self.max_attempts {
            let Some((blocker, by)) = self.reserved.first_overlap(to_footprint(candidate)) else {
                found = Some(candidate);
                break;
            };
            match by {
                Reserved::District(node) => {
                    tracing::trace!(district = node.idx(), "candidate blocked by a district");
                }
                Reserved::Building(i) => {
                    tracing::trace!(building = i, "candidate blocked by a building");
                }
            }
            let next_x = blocker.max_x + self.padding;
            if next_x + w > self.inner.x1 + EPS {
                self.wrap(d);
            } else {
                self.x = next_x;
            }
            candidate = self.candidate(w, d);
        }

        let (rect, reason) = match found {
            Some(rect) => {
                let outside = rect.x1 > self.inner.x1 + EPS || rect.y1 > self.inner.y1 + EPS;
                (rect, outside.then_some(OverflowReason::OutsideDistrict))
            }
            None => {
                // Retries may have wrapped rows; the fallback stays in the original one.
                (self.x, self.z, self.bottom) = resume;
                (first, Some(OverflowReason::RetryLimit))
            }
        };
        self.reserve(rect, what);
        self.x = rect.x1 + self.padding;
        self.bottom = self.bottom.max(rect.y1);
        (rect, reason)
    }
}

fn to_footprint(r: Rect) -> Footprint {
    let r = r.abs();
    Footprint::new(r.x0, r.y0, r.x1, r.y1)
}
