// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centre the partitioned layout on the world origin.

use kurbo::{Rect, Vec2};

use crate::hierarchy::DistrictTree;

/// Bounding box over every district rectangle in the tree.
///
/// Returns [`Rect::ZERO`] only for a tree whose rectangles were never assigned.
pub fn bounds(tree: &DistrictTree) -> Rect {
    tree.iter()
        .map(|(_, node)| node.rect())
        .reduce(|acc, r| acc.union(r))
        .unwrap_or(Rect::ZERO)
}

/// Translate every rectangle so that [`bounds`] is centred on `(0, 0)`.
///
/// Returns the applied offset. Applying it to an already centred tree is a
/// no-op.
pub fn center(tree: &mut DistrictTree) -> Vec2 {
    let offset = -bounds(tree).center().to_vec2();
    if offset == Vec2::ZERO {
        return offset;
    }
    let ids: Vec<_> = tree.iter().map(|(id, _)| id).collect();
    for id in ids {
        let node = tree.node_mut(id);
        node.rect = node.rect + offset;
        node.reserve = node.reserve.map(|r| r + offset);
    }
    tracing::debug!(dx = offset.x, dz = offset.y, "centred layout");
    offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::estimate;
    use crate::config::LayoutConfig;
    use crate::descriptor::DistrictSpec;
    use crate::diagnostics::Diagnostics;
    use crate::treemap::partition;

    fn laid_out(labels: &[&str]) -> DistrictTree {
        let specs: Vec<_> = labels.iter().map(|l| DistrictSpec::new(*l)).collect();
        let mut diags = Diagnostics::new();
        let mut tree = DistrictTree::build(&specs, &mut diags);
        let cfg = LayoutConfig::default();
        estimate(&mut tree, &[], &cfg);
        partition(&mut tree, &cfg, &mut diags);
        tree
    }

    #[test]
    fn centred_bounds_straddle_the_origin() {
        let mut tree = laid_out(&["a", "a.b", "c"]);
        let before = bounds(&tree);
        assert_eq!(before.origin(), kurbo::Point::ZERO);
        let offset = center(&mut tree);
        assert_eq!(offset, Vec2::new(-50.0, -50.0));
        let after = bounds(&tree);
        assert_eq!(after.center(), kurbo::Point::ZERO);
        assert_eq!(after.size(), before.size());
    }

    #[test]
    fn centring_twice_changes_nothing() {
        let mut tree = laid_out(&["x.y.z", "x.w", "v"]);
        center(&mut tree);
        let once: Vec<Rect> = tree.iter().map(|(_, n)| n.rect()).collect();
        assert_eq!(center(&mut tree), Vec2::ZERO);
        let twice: Vec<Rect> = tree.iter().map(|(_, n)| n.rect()).collect();
        assert_eq!(once, twice);
    }
}
