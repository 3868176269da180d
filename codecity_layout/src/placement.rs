// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! World-space placement records handed to the renderer.

use glam::DVec3;
use kurbo::Rect;

use crate::color::Color;

/// A district ground plate.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundPlacement {
    /// Display label: the last segment of the district path.
    pub label: String,
    /// Full dotted path. Empty for the city root.
    pub path: String,
    /// Nesting level; the root is 0.
    pub level: usize,
    /// Plate outline on the ground plane (kurbo `y` is world `z`).
    pub rect: Rect,
    /// Centre of the plate.
    pub position: DVec3,
    /// Vertical extent of the plate.
    pub thickness: f64,
    /// Plate colour, darker with depth.
    pub color: Color,
}

impl GroundPlacement {
    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// Extent along z.
    pub fn depth(&self) -> f64 {
        self.rect.height()
    }
}

/// A placed building.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingPlacement {
    /// Building label.
    pub label: String,
    /// Owning district path.
    pub district: String,
    /// Centre of the box.
    pub position: DVec3,
    /// Extent along x.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
    /// Extent along z.
    pub depth: f64,
    /// Box colour.
    pub color: Color,
    /// Connection target labels.
    pub connections: Vec<String>,
    /// Arc labels, index-aligned with `connections`.
    pub annotations: Vec<String>,
}

impl BuildingPlacement {
    /// Ground-plane footprint (kurbo `y` is world `z`).
    pub fn footprint(&self) -> Rect {
        Rect::from_center_size(
            (self.position.x, self.position.z),
            (self.width, self.depth),
        )
    }

    /// The annotation for connection `i`, or `""`.
    pub fn annotation(&self, i: usize) -> &str {
        self.annotations.get(i).map(String::as_str).unwrap_or("")
    }
}

/// Append-only table of placed buildings, in placement order.
///
/// Written once by the placement walk, then only read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlacementTable {
    entries: Vec<BuildingPlacement>,
}

impl PlacementTable {
    pub(crate) fn push(&mut self, placement: BuildingPlacement) {
        self.entries.push(placement);
    }

    /// Number of placed buildings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at position `i`.
    pub fn get(&self, i: usize) -> Option<&BuildingPlacement> {
        self.entries.get(i)
    }

    /// Entries in placement order.
    pub fn iter(&self) -> core::slice::Iter<'_, BuildingPlacement> {
        self.entries.iter()
    }

    /// Entries as a slice.
    pub fn as_slice(&self) -> &[BuildingPlacement] {
        &self.entries
    }

    /// First building with this label.
    pub fn find(&self, label: &str) -> Option<&BuildingPlacement> {
        self.entries.iter().find(|b| b.label == label)
    }

    /// Buildings owned by `district`.
    pub fn in_district<'a>(
        &'a self,
        district: &'a str,
    ) -> impl Iterator<Item = &'a BuildingPlacement> + 'a {
        self.entries.iter().filter(move |b| b.district == district)
    }
}

impl FromIterator<BuildingPlacement> for PlacementTable {
    fn from_iter<I: IntoIterator<Item = BuildingPlacement>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PlacementTable {
    type Item = &'a BuildingPlacement;
    type IntoIter = core::slice::Iter<'a, BuildingPlacement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(label: &str, district: &str, x: f64) -> BuildingPlacement {
        BuildingPlacement {
            label: label.into(),
            district: district.into(),
            position: DVec3::new(x, 1.0, -2.0),
            width: 2.0,
            height: 2.0,
            depth: 4.0,
            color: Color::default(),
            connections: vec!["B".into()],
            annotations: Vec::new(),
        }
    }

    #[test]
    fn lookups_are_first_match() {
        let mut table = PlacementTable::default();
        table.push(building("A", "p", 0.0));
        table.push(building("A", "q", 5.0));
        table.push(building("B", "q", 9.0));
        assert_eq!(table.find("A").map(|b| b.district.as_str()), Some("p"));
        assert_eq!(table.in_district("q").count(), 2);
        assert!(table.find("Z").is_none());
        assert_eq!(table.get(2).map(|b| b.label.as_str()), Some("B"));
    }

    #[test]
    fn footprint_is_centred_on_position() {
        let b = building("A", "p", 3.0);
        assert_eq!(b.footprint(), Rect::new(2.0, -4.0, 4.0, 0.0));
        assert_eq!(b.annotation(0), "");
    }
}
