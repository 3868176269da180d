// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squarified treemap partitioning.
//!
//! ## Algorithm
//!
//! Items are sorted by descending weight (stable, so equal weights keep input
//! order) and laid out in rows along the shorter side of the remaining space.
//! A row keeps growing while adding the next item does not make its worst
//! aspect ratio worse (Bruls, Huizing and van Wijk).
//!
//! ## Padding
//!
//! [`padded_slots`] lays the items out in `bounds` shrunk by `padding`, then
//! shrinks every item by `padding / 2`. Siblings end up `padding` apart and
//! the outermost items `1.5 * padding` from the edge. Shrinking never inverts a
//! rectangle; an axis that is too short collapses to its centre line.
//!
//! ## Districts
//!
//! [`partition`] runs the padded layout top-down over a [`DistrictTree`]. A
//! district that owns buildings *and* has child districts gets an extra slot,
//! its reserve, weighted by its padded building area. District rectangles are
//! optionally rounded to whole units and then clamped back into the parent's
//! padded rectangle.

use kurbo::{Rect, Size};

use crate::config::LayoutConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::hierarchy::{DistrictTree, NodeId};

/// Squarified layout of `weights` over `bounds`, returned in input order.
///
/// Areas are proportional to the weights and tile `bounds` exactly. If every
/// weight is zero (or not finite) the items share the space equally; otherwise
/// such items get an empty rectangle at the corner of `bounds`.
pub fn squarify(weights: &[f64], bounds: Rect) -> Vec<Rect> {
    let bounds = bounds.abs();
    let empty = Rect::from_origin_size(bounds.origin(), Size::ZERO);
    let mut out = vec![empty; weights.len()];

    let mut clean: Vec<f64> = weights
        .iter()
        .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
        .collect();
    let mut total: f64 = clean.iter().sum();
    if total <= 0.0 {
        clean.iter_mut().for_each(|w| *w = 1.0);
        total = clean.len() as f64;
    }
    let area = bounds.area();
    if clean.is_empty() || area <= 0.0 {
        return out;
    }

    let scale = area / total;
    let mut order: Vec<usize> = (0..clean.len()).filter(|&i| clean[i] > 0.0).collect();
    order.sort_by(|&a, &b| clean[b].total_cmp(&clean[a]));
    let areas: Vec<f64> = order.iter().map(|&i| clean[i] * scale).collect();

    let mut free = bounds;
    let mut start = 0;
    while start < areas.len() {
        let side = free.width().min(free.height());
        if side <= 0.0 {
            let corner = Rect::from_origin_size(free.origin(), Size::ZERO);
            for &i in &order[start..] {
                out[i] = corner;
            }
            break;
        }
        let mut end = start + 1;
        let mut current = worst_aspect_ratio(&areas[start..end], side);
        while end < areas.len() {
            let next = worst_aspect_ratio(&areas[start..=end], side);
            if next > current {
                break;
            }
            current = next;
            end += 1;
        }
        let last = end == areas.len();
        free = layout_row(&order[start..end], &areas[start..end], free, last, &mut out);
        start = end;
    }
    out
}

/// Lay out one row at the top or left edge of `free` and return what is left.
fn layout_row(ids: &[usize], areas: &[f64], free: Rect, last: bool, out: &mut [Rect]) -> Rect {
    let row_sum: f64 = areas.iter().sum();
    // Rows run along the shorter side.
    let horizontal = free.width() <= free.height();
    let (short, long) = if horizontal {
        (free.width(), free.height())
    } else {
        (free.height(), free.width())
    };
    let thickness = if last {
        long
    } else {
        (row_sum / short).min(long)
    };

    let mut offset = 0.0;
    for (n, (&i, &a)) in ids.iter().zip(areas).enumerate() {
        let length = if n + 1 == ids.len() {
            (short - offset).max(0.0)
        } else if thickness > 0.0 {
            (a / thickness).min(short - offset)
        } else {
            0.0
        };
        out[i] = if horizontal {
            Rect::new(
                free.x0 + offset,
                free.y0,
                free.x0 + offset + length,
                free.y0 + thickness,
            )
        } else {
            Rect::new(
                free.x0,
                free.y0 + offset,
                free.x0 + thickness,
                free.y0 + offset + length,
            )
        };
        offset += length;
    }

    if horizontal {
        Rect::new(free.x0, free.y0 + thickness, free.x1, free.y1)
    } else {
        Rect::new(free.x0 + thickness, free.y0, free.x1, free.y1)
    }
}

fn worst_aspect_ratio(row: &[f64], side: f64) -> f64 {
    let sum: f64 = row.iter().sum();
    let max = row.iter().copied().fold(0.0, f64::max);
    let min = row.iter().copied().fold(f64::INFINITY, f64::min);
    if sum <= 0.0 || side <= 0.0 || min <= 0.0 {
        return f64::INFINITY;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    (side_sq * max / sum_sq).max(sum_sq / (side_sq * min))
}

/// Shrink `rect` by `amount` on every side without inverting it.
pub fn shrink(rect: Rect, amount: f64) -> Rect {
    let rect = rect.abs();
    let c = rect.center();
    let (x0, x1) = if rect.width() >= 2.0 * amount {
        (rect.x0 + amount, rect.x1 - amount)
    } else {
        (c.x, c.x)
    };
    let (y0, y1) = if rect.height() >= 2.0 * amount {
        (rect.y0 + amount, rect.y1 - amount)
    } else {
        (c.y, c.y)
    };
    Rect::new(x0, y0, x1, y1)
}

/// Clamp every edge of `rect` into `bounds`.
fn clamp_into(rect: Rect, bounds: Rect) -> Rect {
    Rect::new(
        rect.x0.clamp(bounds.x0, bounds.x1),
        rect.y0.clamp(bounds.y0, bounds.y1),
        rect.x1.clamp(bounds.x0, bounds.x1),
        rect.y1.clamp(bounds.y0, bounds.y1),
    )
}

/// Squarified layout with padding between siblings and around the edge.
pub fn padded_slots(weights: &[f64], bounds: Rect, padding: f64) -> Vec<Rect> {
    let half = 0.5 * padding;
    squarify(weights, shrink(bounds, padding))
        .into_iter()
        .map(|r| shrink(r, half))
        .collect()
}

/// Assign a rectangle to every district of `tree`.
///
/// The root gets the whole square layout space, whose side is derived from the
/// root's footprint area by [`LayoutConfig::layout_size`]. Returns that side.
pub fn partition(
    tree: &mut DistrictTree,
    config: &LayoutConfig,
    diagnostics: &mut Diagnostics,
) -> f64 {
    let root = tree.root();
    let building_area: f64 = tree.iter().map(|(_, n)| n.own_area()).sum();
    if building_area <= 0.0 && config.fixed_layout_size.is_none() {
        diagnostics.push(Diagnostic::DegenerateLayout);
    }
    let (fx, fz) = tree.node(root).footprint();
    let size = config.layout_size(fx * fz);
    tracing::debug!(size, "layout size");
    let mut space = Rect::new(0.0, 0.0, size, size);
    if config.round_districts {
        space = space.round();
    }
    partition_node(tree, root, space, config);
    size
}

fn partition_node(tree: &mut DistrictTree, id: NodeId, rect: Rect, config: &LayoutConfig) {
    let node = tree.node_mut(id);
    node.rect = rect;
    node.reserve = None;
    if node.is_leaf() {
        return;
    }

    let children = node.children().to_vec();
    let mut weights: Vec<f64> = children
        .iter()
        .map(|c| {
            let (x, z) = tree.node(*c).footprint();
            x * z
        })
        .collect();
    let node = tree.node(id);
    let reserve = node.is_declared() && node.own_area() > 0.0;
    if reserve {
        weights.push(node.reserve_weight);
    }

    let padding = config.district_padding;
    let inner = shrink(rect, padding);
    let mut slots = padded_slots(&weights, rect, padding);
    if config.round_districts {
        for slot in &mut slots {
            *slot = clamp_into(slot.round(), inner);
        }
    }
    if reserve {
        tree.node_mut(id).reserve = slots.pop();
    }
    for (child, slot) in children.into_iter().zip(slots) {
        partition_node(tree, child, slot, config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::estimate;
    use crate::descriptor::{BuildingSpec, DistrictSpec};

    fn contains(outer: Rect, inner: Rect) -> bool {
        const EPS: f64 = 1e-9;
        inner.x0 >= outer.x0 - EPS
            && inner.y0 >= outer.y0 - EPS
            && inner.x1 <= outer.x1 + EPS
            && inner.y1 <= outer.y1 + EPS
    }

    fn total_area(rects: &[Rect]) -> f64 {
        rects.iter().map(Rect::area).sum()
    }

    fn overlap(a: Rect, b: Rect) -> f64 {
        let i = a.intersect(b);
        i.width() * i.height()
    }

    #[test]
    fn single_item_fills_bounds() {
        let rects = squarify(&[5.0], Rect::new(0.0, 0.0, 40.0, 10.0));
        assert_eq!(rects, [Rect::new(0.0, 0.0, 40.0, 10.0)]);
    }

    #[test]
    fn areas_are_proportional_and_disjoint() {
        let bounds = Rect::new(0.0, 0.0, 60.0, 40.0);
        let weights = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];
        let rects = squarify(&weights, bounds);
        let total: f64 = weights.iter().sum();
        for (r, w) in rects.iter().zip(weights) {
            assert!((r.area() - w / total * bounds.area()).abs() < 1e-6);
            assert!(contains(bounds, *r));
        }
        assert!((total_area(&rects) - bounds.area()).abs() < 1e-6);
        for i in 0..rects.len() {
            for j in i + 1..rects.len() {
                assert!(overlap(rects[i], rects[j]) < 1e-9, "{i} overlaps {j}");
            }
        }
    }

    #[test]
    fn equal_weights_keep_input_order() {
        let rects = squarify(&[1.0, 1.0, 1.0, 1.0], Rect::new(0.0, 0.0, 4.0, 1.0));
        let xs: Vec<f64> = rects.iter().map(|r| r.x0).collect();
        assert_eq!(xs, [0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn zero_weights_share_or_vanish() {
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let shared = squarify(&[0.0, 0.0], bounds);
        assert!((shared[0].area() - 50.0).abs() < 1e-9);
        assert!((shared[1].area() - 50.0).abs() < 1e-9);

        let mixed = squarify(&[3.0, 0.0, f64::NAN], bounds);
        assert_eq!(mixed[0], bounds);
        assert_eq!(mixed[1].area(), 0.0);
        assert!(mixed[2].width() >= 0.0 && mixed[2].height() >= 0.0);
    }

    #[test]
    fn shrink_collapses_instead_of_inverting() {
        let r = shrink(Rect::new(0.0, 0.0, 10.0, 1.0), 1.0);
        assert_eq!(r, Rect::new(1.0, 0.5, 9.0, 0.5));
    }

    #[test]
    fn padded_slots_keep_siblings_apart() {
        let slots = padded_slots(&[1.0, 1.0], Rect::new(0.0, 0.0, 22.0, 12.0), 1.0);
        assert_eq!(slots[0], Rect::new(1.5, 1.5, 10.5, 10.5));
        assert_eq!(slots[1], Rect::new(11.5, 1.5, 20.5, 10.5));
    }

    #[test]
    fn nested_districts_are_contained() {
        let specs = [DistrictSpec::new("a"), DistrictSpec::new("a.b")];
        let mut diags = Diagnostics::new();
        let mut tree = DistrictTree::build(&specs, &mut diags);
        let cfg = LayoutConfig::default();
        estimate(&mut tree, &[], &cfg);
        let size = partition(&mut tree, &cfg, &mut diags);
        assert_eq!(size, 100.0);
        assert_eq!(diags.as_slice(), [Diagnostic::DegenerateLayout]);

        let a = tree.node(tree.find("a").unwrap()).rect();
        let b = tree.node(tree.find("a.b").unwrap()).rect();
        assert!(a.area() > 0.0 && b.area() > 0.0);
        assert!(contains(shrink(a, cfg.district_padding), b));
        assert!(contains(shrink(tree.node(tree.root()).rect(), 1.0), a));
    }

    #[test]
    fn declared_parents_reserve_space_for_their_buildings() {
        let specs = [DistrictSpec::new("p"), DistrictSpec::new("p.c")];
        let buildings = [
            BuildingSpec::new("Own", "p", 4.0, 1.0, 4.0),
            BuildingSpec::new("Inner", "p.c", 4.0, 1.0, 4.0),
        ];
        let mut diags = Diagnostics::new();
        let mut tree = DistrictTree::build(&specs, &mut diags);
        let cfg = LayoutConfig::default();
        estimate(&mut tree, &buildings, &cfg);
        partition(&mut tree, &cfg, &mut diags);
        let p = tree.node(tree.find("p").unwrap());
        let c = tree.node(tree.find("p.c").unwrap()).rect();
        let reserve = p.reserve().unwrap();
        assert!(reserve.area() > 0.0);
        assert_eq!(overlap(reserve, c), 0.0);
        assert!(contains(shrink(p.rect(), 1.0), reserve));
        assert!(tree.node(tree.find("p.c").unwrap()).reserve().is_none());
    }
}
