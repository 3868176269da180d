// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Area estimation: how much ground each district needs.
//!
//! A district's required area is the footprint area of the buildings it owns
//! plus the footprint area of each child district. Its footprint is the square
//! of that area, raised to the configured minimum and to any author-supplied
//! footprint. Children are estimated before their parent, so the footprint
//! area of every district is at least the sum it was computed from.

use crate::config::LayoutConfig;
use crate::descriptor::{BuildingSpec, DistrictSpec, sanitize};
use crate::hierarchy::{DistrictTree, NodeId};

/// Estimate footprints for every node of `tree`, bottom-up.
pub fn estimate(tree: &mut DistrictTree, buildings: &[BuildingSpec], config: &LayoutConfig) {
    let pad = config.building_padding;
    for b in buildings {
        let Some(id) = tree.find_declared(&b.district) else {
            continue;
        };
        let (w, d) = b.footprint();
        let node = tree.node_mut(id);
        node.own_area += w * d;
        node.reserve_weight += (w + pad) * (d + pad);
    }
    let root = tree.root();
    estimate_node(tree, root, config.min_district_size);
}

/// Footprint `(x, z)` for each of `districts`, from the buildings it owns directly.
///
/// This is the flat form of [`estimate`]: it ignores nesting, so a parent's
/// footprint does not include its children.
pub fn estimate_flat(
    districts: &[DistrictSpec],
    buildings: &[BuildingSpec],
    min_size: f64,
) -> Vec<(f64, f64)> {
    districts
        .iter()
        .map(|district| {
            let area: f64 = buildings
                .iter()
                .filter(|b| b.district == district.label)
                .map(BuildingSpec::footprint_area)
                .sum();
            footprint_for(area, min_size, district.footprint)
        })
        .collect()
}

/// Returns the footprint area of `id`.
fn estimate_node(tree: &mut DistrictTree, id: NodeId, min_size: f64) -> f64 {
    let mut children_area = 0.0;
    for i in 0..tree.node(id).children().len() {
        let child = tree.node(id).children()[i];
        children_area += estimate_node(tree, child, min_size);
    }
    let node = tree.node_mut(id);
    node.required_area = node.own_area + children_area;
    node.footprint = footprint_for(node.required_area, min_size, node.author_footprint());
    tracing::debug!(
        district = node.path(),
        required = node.required_area,
        x = node.footprint.0,
        z = node.footprint.1,
        "estimated footprint"
    );
    node.footprint.0 * node.footprint.1
}

fn footprint_for(area: f64, min_size: f64, author: Option<(f64, f64)>) -> (f64, f64) {
    let side = area.max(0.0).sqrt().max(min_size);
    match author {
        Some((x, z)) => (side.max(sanitize(x)), side.max(sanitize(z))),
        None => (side, side),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostics;

    fn tree_for(labels: &[&str]) -> DistrictTree {
        let specs: Vec<_> = labels.iter().map(|l| DistrictSpec::new(*l)).collect();
        DistrictTree::build(&specs, &mut Diagnostics::new())
    }

    #[test]
    fn empty_districts_get_the_minimum() {
        let mut tree = tree_for(&["a", "a.b"]);
        estimate(&mut tree, &[], &LayoutConfig::default());
        let b = tree.find("a.b").unwrap();
        assert_eq!(tree.node(b).footprint(), (2.0, 2.0));
        let a = tree.find("a").unwrap();
        // The parent holds its child's clamped footprint.
        assert_eq!(tree.node(a).required_area(), 4.0);
        assert_eq!(tree.node(a).footprint(), (2.0, 2.0));
    }

    #[test]
    fn own_buildings_sum_their_footprints() {
        let mut tree = tree_for(&["p"]);
        let buildings = [
            BuildingSpec::new("X", "p", 2.0, 5.0, 2.0),
            BuildingSpec::new("Y", "p", 2.0, 1.0, 2.0),
        ];
        estimate(&mut tree, &buildings, &LayoutConfig::default());
        let p = tree.node(tree.find("p").unwrap());
        assert_eq!(p.own_area(), 8.0);
        let (x, z) = p.footprint();
        assert!((x - 8.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(x, z);
    }

    #[test]
    fn parents_cover_children_and_own_buildings() {
        let mut tree = tree_for(&["org.jsoup", "org.jsoup.nodes"]);
        let buildings = [
            BuildingSpec::new("Jsoup", "org.jsoup", 4.0, 3.0, 4.0),
            BuildingSpec::new("Node", "org.jsoup.nodes", 6.0, 9.0, 6.0),
            BuildingSpec::new("Stray", "org", 50.0, 1.0, 50.0),
        ];
        estimate(&mut tree, &buildings, &LayoutConfig::default());
        let jsoup = tree.node(tree.find("org.jsoup").unwrap());
        let nodes = tree.node(tree.find("org.jsoup.nodes").unwrap());
        assert_eq!(nodes.required_area(), 36.0);
        assert_eq!(jsoup.required_area(), 16.0 + 36.0);
        // `org` is a grouping node and owns nothing.
        let org = tree.node(tree.find("org").unwrap());
        assert_eq!(org.own_area(), 0.0);
        let (x, z) = org.footprint();
        assert!(x * z >= jsoup.footprint().0 * jsoup.footprint().1 - 1e-9);
    }

    #[test]
    fn author_footprint_is_a_lower_bound() {
        let specs = [DistrictSpec::new("wide").with_footprint(10.0, 3.0)];
        let mut tree = DistrictTree::build(&specs, &mut Diagnostics::new());
        estimate(
            &mut tree,
            &[BuildingSpec::new("B", "wide", 4.0, 1.0, 4.0)],
            &LayoutConfig::default(),
        );
        assert_eq!(tree.node(tree.find("wide").unwrap()).footprint(), (10.0, 4.0));
    }

    #[test]
    fn flat_estimate_ignores_nesting() {
        let districts = [DistrictSpec::new("a"), DistrictSpec::new("a.b")];
        let buildings = [
            BuildingSpec::new("X", "a.b", 3.0, 1.0, 3.0),
            BuildingSpec::new("Y", "a.b", 4.0, 1.0, 4.0),
        ];
        let sizes = estimate_flat(&districts, &buildings, 2.0);
        assert_eq!(sizes, [(2.0, 2.0), (5.0, 5.0)]);
    }
}
