// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Centripetal Catmull-Rom curves through a short list of control points.
//!
//! The curve is open. Missing neighbours at the two ends are synthesised by
//! reflecting the second point through the first (and the second-to-last
//! through the last), so the curve passes through every point, including both
//! ends. Knot spacing is centripetal (`|Δ|^0.5`).

use glam::DVec3;

/// Spacing below which a knot interval is treated as degenerate.
const MIN_KNOT: f64 = 1e-4;

/// An open centripetal Catmull-Rom spline.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcCurve {
    points: Vec<DVec3>,
}

impl ArcCurve {
    /// A curve through `points`, in order.
    pub fn new(points: impl Into<Vec<DVec3>>) -> Self {
        Self {
            points: points.into(),
        }
    }

    /// The points the curve passes through.
    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Point at parameter `t`, clamped to `[0, 1]`.
    ///
    /// `t` is split evenly between segments: with three points, `t = 0.5` is
    /// exactly the middle point. An empty curve yields the origin and a single
    /// point yields that point.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "The segment index is a floored value in 0..=len."
    )]
    pub fn point_at(&self, t: f64) -> DVec3 {
        let pts = &self.points;
        match pts.len() {
            0 => return DVec3::ZERO,
            1 => return pts[0],
            _ => {}
        }
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let last = pts.len() - 1;
        let p = last as f64 * t;
        let mut seg = p.floor() as usize;
        let mut w = p - seg as f64;
        if seg >= last {
            seg = last - 1;
            w = 1.0;
        }

        let p1 = pts[seg];
        let p2 = pts[seg + 1];
        let p0 = if seg > 0 { pts[seg - 1] } else { 2.0 * p1 - p2 };
        let p3 = if seg + 2 <= last {
            pts[seg + 2]
        } else {
            2.0 * p2 - p1
        };

        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);
        if dt1 < MIN_KNOT {
            dt1 = 1.0;
        }
        if dt0 < MIN_KNOT {
            dt0 = dt1;
        }
        if dt2 < MIN_KNOT {
            dt2 = dt1;
        }

        // Tangents at p1 and p2 for the non-uniform knot vector, rescaled to
        // the unit parameter interval.
        let m1 = ((p1 - p0) / dt0 - (p2 - p0) / (dt0 + dt1) + (p2 - p1) / dt1) * dt1;
        let m2 = ((p2 - p1) / dt1 - (p3 - p1) / (dt1 + dt2) + (p3 - p2) / dt2) * dt1;
        hermite(p1, p2, m1, m2, w)
    }

    /// `segments + 1` evenly parameterised points from start to end.
    pub fn sample(&self, segments: usize) -> Vec<DVec3> {
        let n = segments.max(1);
        (0..=n).map(|i| self.point_at(i as f64 / n as f64)).collect()
    }
}

/// Cubic Hermite interpolation between `a` and `b` with tangents `ta`, `tb`.
fn hermite(a: DVec3, b: DVec3, ta: DVec3, tb: DVec3, t: f64) -> DVec3 {
    let c2 = -3.0 * a + 3.0 * b - 2.0 * ta - tb;
    let c3 = 2.0 * a - 2.0 * b + ta + tb;
    a + ta * t + c2 * (t * t) + c3 * (t * t * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: DVec3, b: DVec3) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn passes_through_every_point() {
        let from = DVec3::new(-10.0, 1.0, 4.0);
        let apex = DVec3::new(0.0, 30.0, 2.0);
        let to = DVec3::new(10.0, 3.0, 0.0);
        let curve = ArcCurve::new([from, apex, to]);
        assert!(close(curve.point_at(0.0), from));
        assert!(close(curve.point_at(0.5), apex));
        assert!(close(curve.point_at(1.0), to));
    }

    #[test]
    fn collinear_points_stay_on_the_line() {
        let curve = ArcCurve::new([
            DVec3::ZERO,
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
        ]);
        for p in curve.sample(16) {
            assert!(p.y.abs() < 1e-12 && p.z.abs() < 1e-12, "{p:?}");
            assert!((-1e-12..=2.0 + 1e-12).contains(&p.x), "{p:?}");
        }
    }

    #[test]
    fn symmetric_arc_peaks_in_the_middle() {
        let curve = ArcCurve::new([
            DVec3::new(-5.0, 0.0, 0.0),
            DVec3::new(0.0, 20.0, 0.0),
            DVec3::new(5.0, 0.0, 0.0),
        ]);
        let samples = curve.sample(20);
        assert_eq!(samples.len(), 21);
        let top = samples
            .iter()
            .copied()
            .fold(DVec3::splat(f64::NEG_INFINITY), |a, b| if b.y > a.y { b } else { a });
        assert!(close(top, DVec3::new(0.0, 20.0, 0.0)));
        // Mirror symmetry.
        for i in 0..=20 {
            let (a, b) = (samples[i], samples[20 - i]);
            assert!((a.x + b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9);
        }
    }

    #[test]
    fn coincident_points_do_not_produce_nan() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        let curve = ArcCurve::new([p, p, p]);
        for q in curve.sample(8) {
            assert!(close(q, p));
        }
        assert_eq!(ArcCurve::new(Vec::<DVec3>::new()).point_at(0.3), DVec3::ZERO);
        assert_eq!(ArcCurve::new([p]).point_at(0.7), p);
    }
}
