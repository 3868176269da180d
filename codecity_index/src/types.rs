// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ground-plane footprint type and comparison helpers.

use core::cmp::Ordering;

/// Axis-aligned footprint on the ground plane.
///
/// The ground plane is spanned by world `x` and world `z`; height is never
/// part of a footprint. Edges are inclusive, but two footprints that only
/// share an edge do not [overlap](Footprint::overlaps).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Footprint {
    /// Minimum x (left).
    pub min_x: f64,
    /// Minimum z (back).
    pub min_z: f64,
    /// Maximum x (right).
    pub max_x: f64,
    /// Maximum z (front).
    pub max_z: f64,
}

impl Footprint {
    /// The empty footprint at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a footprint from min/max corners.
    pub const fn new(min_x: f64, min_z: f64, max_x: f64, max_z: f64) -> Self {
        Self {
            min_x,
            min_z,
            max_x,
            max_z,
        }
    }

    /// Create a footprint from its min corner and extent.
    pub const fn from_origin_size(x: f64, z: f64, width: f64, depth: f64) -> Self {
        Self {
            min_x: x,
            min_z: z,
            max_x: x + width,
            max_z: z + depth,
        }
    }

    /// Create a footprint centered on `(cx, cz)`.
    pub fn from_center_size(cx: f64, cz: f64, width: f64, depth: f64) -> Self {
        let hw = 0.5 * width;
        let hd = 0.5 * depth;
        Self::new(cx - hw, cz - hd, cx + hw, cz + hd)
    }

    /// Extent along x, never negative.
    pub fn width(&self) -> f64 {
        max_f(self.max_x - self.min_x, 0.0)
    }

    /// Extent along z, never negative.
    pub fn depth(&self) -> f64 {
        max_f(self.max_z - self.min_z, 0.0)
    }

    /// Area covered on the ground plane.
    pub fn area(&self) -> f64 {
        self.width() * self.depth()
    }

    /// Center point as `(x, z)`.
    pub fn center(&self) -> (f64, f64) {
        (
            0.5 * (self.min_x + self.max_x),
            0.5 * (self.min_z + self.max_z),
        )
    }

    /// True if the footprint is inverted or has no area.
    pub fn is_empty(&self) -> bool {
        !lt(self.min_x, self.max_x) || !lt(self.min_z, self.max_z)
    }

    /// Whether the point lies inside or on the boundary.
    pub fn contains_point(&self, x: f64, z: f64) -> bool {
        le(self.min_x, x) && le(self.min_z, z) && le(x, self.max_x) && le(z, self.max_z)
    }

    /// Whether `other` lies entirely inside this footprint, within `tolerance`.
    pub fn contains(&self, other: &Self, tolerance: f64) -> bool {
        le(self.min_x - tolerance, other.min_x)
            && le(self.min_z - tolerance, other.min_z)
            && le(other.max_x, self.max_x + tolerance)
            && le(other.max_z, self.max_z + tolerance)
    }

    /// The intersection of two footprints. May be empty.
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            min_x: max_f(self.min_x, other.min_x),
            min_z: max_f(self.min_z, other.min_z),
            max_x: min_f(self.max_x, other.max_x),
            max_z: min_f(self.max_z, other.max_z),
        }
    }

    /// The smallest footprint covering both.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: min_f(self.min_x, other.min_x),
            min_z: min_f(self.min_z, other.min_z),
            max_x: max_f(self.max_x, other.max_x),
            max_z: max_f(self.max_z, other.max_z),
        }
    }

    /// True if the two footprints share a region of positive area.
    ///
    /// Touching edges or corners do not count.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Move the footprint by `(dx, dz)`.
    pub fn translate(&self, dx: f64, dz: f64) -> Self {
        Self::new(
            self.min_x + dx,
            self.min_z + dz,
            self.max_x + dx,
            self.max_z + dz,
        )
    }

    /// Shrink by `amount` on every side.
    ///
    /// An axis that would invert collapses to its center line instead.
    pub fn inset(&self, amount: f64) -> Self {
        let (cx, cz) = self.center();
        let (min_x, max_x) = if self.width() >= 2.0 * amount {
            (self.min_x + amount, self.max_x - amount)
        } else {
            (cx, cx)
        };
        let (min_z, max_z) = if self.depth() >= 2.0 * amount {
            (self.min_z + amount, self.max_z - amount)
        } else {
            (cz, cz)
        };
        Self::new(min_x, min_z, max_x, max_z)
    }
}

impl Default for Footprint {
    fn default() -> Self {
        Self::ZERO
    }
}

pub(crate) fn min_f(a: f64, b: f64) -> f64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_f(a: f64, b: f64) -> f64 {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le(a: f64, b: f64) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt(a: f64, b: f64) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Footprint::new(0.0, 0.0, 10.0, 10.0);
        let b = Footprint::new(10.0, 0.0, 20.0, 10.0);
        let c = Footprint::new(9.5, 9.5, 12.0, 12.0);
        assert!(!a.overlaps(&b), "shared edge is not an overlap");
        assert!(a.overlaps(&c), "corner region is shared");
        assert!(b.overlaps(&c), "corner region is shared");
    }

    #[test]
    fn inset_collapses_instead_of_inverting() {
        let f = Footprint::new(0.0, 0.0, 10.0, 1.0);
        let shrunk = f.inset(1.0);
        assert_eq!(shrunk.min_x, 1.0);
        assert_eq!(shrunk.max_x, 9.0);
        assert_eq!(shrunk.min_z, 0.5);
        assert_eq!(shrunk.max_z, 0.5);
        assert!(shrunk.depth() >= 0.0);
    }

    #[test]
    fn center_size_round_trip() {
        let f = Footprint::from_center_size(3.0, -2.0, 4.0, 2.0);
        assert_eq!(f, Footprint::new(1.0, -3.0, 5.0, -1.0));
        assert_eq!(f.center(), (3.0, -2.0));
        assert_eq!(f.area(), 8.0);
    }

    #[test]
    fn contains_respects_tolerance() {
        let outer = Footprint::new(0.0, 0.0, 10.0, 10.0);
        let inner = Footprint::new(-1e-9, 0.0, 10.0, 10.0);
        assert!(!outer.contains(&inner, 0.0));
        assert!(outer.contains(&inner, 1e-6));
    }
}
