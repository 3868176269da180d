// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolving connection targets to placed buildings.

use codecity_layout::{BuildingPlacement, PlacementTable};

use crate::config::ConnectionScope;

/// Find the building a connection label refers to.
///
/// Implement this to route arcs against something other than a
/// [`PlacementTable`], for example a filtered view or a lookup keyed by a
/// fully qualified name.
pub trait TargetLookup {
    /// Returns the target for `label` within `scope`, if any.
    ///
    /// Must be deterministic: the same table, label and scope always give the
    /// same answer.
    fn resolve(&self, label: &str, scope: &ConnectionScope) -> Option<&BuildingPlacement>;
}

/// First match in placement order wins.
impl TargetLookup for PlacementTable {
    fn resolve(&self, label: &str, scope: &ConnectionScope) -> Option<&BuildingPlacement> {
        self.as_slice().resolve(label, scope)
    }
}

impl TargetLookup for [BuildingPlacement] {
    fn resolve(&self, label: &str, scope: &ConnectionScope) -> Option<&BuildingPlacement> {
        self.iter().find(|b| b.label == label && scope.admits(&b.district))
    }
}

impl<T: TargetLookup + ?Sized> TargetLookup for &T {
    #[inline]
    fn resolve(&self, label: &str, scope: &ConnectionScope) -> Option<&BuildingPlacement> {
        (**self).resolve(label, scope)
    }
}

#[cfg(test)]
mod tests {
    use codecity_layout::Color;
    use glam::DVec3;

    use super::*;

    fn placed(label: &str, district: &str, x: f64) -> BuildingPlacement {
        BuildingPlacement {
            label: label.into(),
            district: district.into(),
            position: DVec3::new(x, 0.5, 0.0),
            width: 1.0,
            height: 1.0,
            depth: 1.0,
            color: Color::default(),
            connections: Vec::new(),
            annotations: Vec::new(),
        }
    }

    #[test]
    fn duplicates_resolve_to_the_first_entry() {
        let table: PlacementTable = [placed("B", "p", 1.0), placed("B", "q", 2.0)]
            .into_iter()
            .collect();
        let hit = table.resolve("B", &ConnectionScope::Anywhere);
        assert_eq!(hit.map(|b| b.position.x), Some(1.0));
        // Repeated lookups agree.
        assert_eq!(hit, table.resolve("B", &ConnectionScope::Anywhere));
    }

    #[test]
    fn namespace_scope_skips_other_districts() {
        let table: PlacementTable = [placed("B", "p", 1.0), placed("B", "q", 2.0)]
            .into_iter()
            .collect();
        let hit = table.resolve("B", &ConnectionScope::namespace("q"));
        assert_eq!(hit.map(|b| b.position.x), Some(2.0));
        assert!(table.resolve("B", &ConnectionScope::namespace("r")).is_none());
        assert!(table.resolve("C", &ConnectionScope::Anywhere).is_none());
    }
}
