// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

use crate::Point;

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Evaluate the curve at parameter `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        Point::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x + d * self.p3.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y + d * self.p3.y,
        )
    }

    /// The point on the curve at `t = 0.5`.
    ///
    /// This is the third-order midpoint of de Casteljau's construction, and
    /// is bit-for-bit the shared end point of the halves returned by
    /// [`CubicBez::subdivide`].
    #[inline]
    pub fn midpoint(&self) -> Point {
        let p12 = self.p1.midpoint(self.p2);
        let p012 = self.p0.midpoint(self.p1).midpoint(p12);
        let p123 = p12.midpoint(self.p2.midpoint(self.p3));
        p012.midpoint(p123)
    }

    /// Subdivide into halves, using de Casteljau.
    ///
    /// Both halves are built entirely from midpoints of the control polygon,
    /// so no curve evaluation is needed.
    #[inline]
    pub fn subdivide(&self) -> (CubicBez, CubicBez) {
        let p01 = self.p0.midpoint(self.p1);
        let p12 = self.p1.midpoint(self.p2);
        let p23 = self.p2.midpoint(self.p3);
        let p012 = p01.midpoint(p12);
        let p123 = p12.midpoint(p23);
        let pm = p012.midpoint(p123);
        (
            CubicBez {
                p0: self.p0,
                p1: p01,
                p2: p012,
                p3: pm,
            },
            CubicBez {
                p0: pm,
                p1: p123,
                p2: p23,
                p3: self.p3,
            },
        )
    }

    /// Whether the control points are close enough to the chord `p0`–`p3`
    /// for the chord to stand in for the curve.
    ///
    /// The two control point deviations are measured as cross products with
    /// the chord (distance scaled by chord length), and the segment is flat
    /// when `(d1 + d2)² < tolerance * |chord|²`. Larger tolerances accept
    /// coarser approximations.
    ///
    /// A segment whose end points coincide has no chord to measure against
    /// and is always considered flat.
    #[inline]
    pub fn is_flat(&self, tolerance: f64) -> bool {
        let Some((dev, chord2)) = self.chord_deviation() else {
            return true;
        };
        dev * dev < tolerance * chord2
    }

    /// Whether both control points lie exactly on the line through `p0` and
    /// `p3`, so that the segment traces a straight line.
    ///
    /// Control points may lie beyond the end points. A segment whose end
    /// points coincide is never straight.
    #[inline]
    pub fn is_straight(&self) -> bool {
        matches!(self.chord_deviation(), Some((dev, _)) if dev == 0.0)
    }

    /// Summed control point deviation from the chord, and the squared chord
    /// length. `None` when the end points coincide.
    fn chord_deviation(&self) -> Option<(f64, f64)> {
        let dx = self.p3.x - self.p0.x;
        let dy = self.p3.y - self.p0.y;
        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        let d1 = ((self.p1.x - self.p3.x) * dy - (self.p1.y - self.p3.y) * dx).abs();
        let d2 = ((self.p2.x - self.p3.x) * dy - (self.p2.y - self.p3.y) * dx).abs();
        Some((d1 + d2, dx * dx + dy * dy))
    }

    /// Whether the end points of the segment coincide.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.p0 == self.p3
    }

    /// Is this cubic Bézier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}
