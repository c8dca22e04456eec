// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening of cubic Bézier chains into polylines.
//!
//! Each segment is bisected recursively with de Casteljau's construction
//! until the control points lie close enough to the chord, and the point on
//! the curve at the centre of each sufficiently flat piece becomes a vertex
//! of the result. The tolerance is compared against the squared deviation
//! of the control points, so halving the error needs roughly a quarter of
//! the tolerance.
//!
//! ```
//! use silhouette::{flatten, Point};
//!
//! let arch = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 100.0),
//!     Point::new(100.0, 100.0),
//!     Point::new(100.0, 0.0),
//! ];
//! let coarse = flatten(&arch, 50.0).unwrap();
//! let fine = flatten(&arch, 0.5).unwrap();
//! assert!(fine.len() > coarse.len());
//! assert_eq!(coarse.first(), arch.first());
//! assert_eq!(coarse.last(), arch.last());
//! ```

use alloc::vec::Vec;

use crate::bezpath::{segments_unchecked, validate};
use crate::{BezPath, CubicBez, Error, Point};

/// The tolerance used when the caller has no better value.
pub const DEFAULT_TOLERANCE: f64 = 1.0;

/// Deepest level of bisection. A piece that is still not flat at this depth
/// is approximated by its midpoint anyway, which bounds a single segment to
/// `2^MAX_DEPTH` vertices.
pub const MAX_DEPTH: u32 = 16;

/// Flatten a chain of cubic Bézier segments into a polyline.
///
/// `path` holds `1 + 3k` control points laid out as in [`BezPath`]. The
/// result starts with the first point of the path and ends with its last
/// point, both copied exactly. In between come the vertices produced for
/// each segment, in order along the curve:
///
/// - a straight segment (see [`CubicBez::is_straight`]) is represented by
///   its chord. It contributes its start point when that is not already the
///   previous vertex, and its end point unless it is the final segment,
///   whose end point closes the contour;
/// - any other segment is bisected until each piece is flat, and every flat
///   piece contributes the curve point at its centre. A curved segment that
///   is flat from the start contributes just its midpoint.
///
/// Points where consecutive segments meet may produce near-duplicate
/// vertices; they are not removed.
///
/// # Errors
///
/// Returns [`Error::InvalidTolerance`] if `tolerance` is not a positive
/// finite number, and [`Error::InvalidInput`] if the control point count is
/// not `1 + 3k` with at least one segment. Both are checked before any
/// subdivision.
///
/// # Examples
///
/// ```
/// use silhouette::{flatten, Point};
///
/// let line = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 0.0),
/// ];
/// assert_eq!(
///     flatten(&line, 1.0).unwrap(),
///     vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]
/// );
/// ```
pub fn flatten(path: &[Point], tolerance: f64) -> Result<Vec<Point>, Error> {
    check_tolerance(tolerance)?;
    validate(path)?;
    Ok(flatten_validated(path, tolerance))
}

impl BezPath {
    /// Flatten this path into a polyline.
    ///
    /// See [`flatten`] for the exact shape of the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if `tolerance` is not a positive
    /// finite number.
    pub fn flatten(&self, tolerance: f64) -> Result<Vec<Point>, Error> {
        check_tolerance(tolerance)?;
        Ok(flatten_validated(self.points(), tolerance))
    }
}

fn check_tolerance(tolerance: f64) -> Result<(), Error> {
    // Written so that NaN fails the comparison.
    if tolerance > 0.0 && tolerance.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidTolerance(tolerance))
    }
}

fn flatten_validated(path: &[Point], tolerance: f64) -> Vec<Point> {
    let last = path[path.len() - 1];
    let num_segments = path.len() / 3;
    let mut result = alloc::vec![path[0]];
    for (i, seg) in segments_unchecked(path).enumerate() {
        if seg.is_straight() {
            if result.last() != Some(&seg.p0) {
                result.push(seg.p0);
            }
            if i + 1 < num_segments {
                result.push(seg.p3);
            }
        } else {
            subdivide_into(&seg, tolerance, 0, &mut result);
        }
    }
    result.push(last);
    result
}

fn subdivide_into(c: &CubicBez, tolerance: f64, depth: u32, out: &mut Vec<Point>) {
    if c.is_flat(tolerance) {
        out.push(c.midpoint());
        return;
    }
    if depth >= MAX_DEPTH {
        log::trace!("flatten: depth limit reached near {:?}", c.p0);
        out.push(c.midpoint());
        return;
    }
    let (left, right) = c.subdivide();
    subdivide_into(&left, tolerance, depth + 1, out);
    subdivide_into(&right, tolerance, depth + 1, out);
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{flatten, DEFAULT_TOLERANCE, MAX_DEPTH};
    use crate::{BezPath, CubicBez, Error, Point};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().copied().map(Point::from).collect()
    }

    fn random_path(rng: &mut StdRng, segments: usize) -> Vec<Point> {
        (0..1 + 3 * segments)
            .map(|_| Point::new(rng.random_range(-200.0..200.0), rng.random_range(-200.0..200.0)))
            .collect()
    }

    #[test]
    fn straight_segment_yields_end_points() {
        let path = pts(&[(0., 0.), (0., 0.), (10., 0.), (10., 0.)]);
        assert_eq!(flatten(&path, 1.0).unwrap(), pts(&[(0., 0.), (10., 0.)]));
    }

    #[test]
    fn collinear_controls_never_subdivide() {
        let path = pts(&[(-3., 1.), (1., 3.), (5., 5.), (9., 7.)]);
        for tolerance in [1e-9, 0.01, 1.0, 1000.0] {
            assert_eq!(
                flatten(&path, tolerance).unwrap(),
                pts(&[(-3., 1.), (9., 7.)]),
                "tolerance {tolerance}"
            );
        }
    }

    #[test]
    fn straight_chain_keeps_corners() {
        let path = pts(&[
            (0., 0.),
            (0., 0.),
            (10., 0.),
            (10., 0.),
            (10., 0.),
            (10., 10.),
            (10., 10.),
        ]);
        assert_eq!(
            flatten(&path, DEFAULT_TOLERANCE).unwrap(),
            pts(&[(0., 0.), (10., 0.), (10., 10.)])
        );
    }

    #[test]
    fn flat_curve_keeps_midpoint() {
        let corner = CubicBez::new((0., 5.), (0., 2.25), (2.25, 0.), (5., 0.));
        assert!(corner.is_flat(50.0));
        let out = BezPath::from(corner).flatten(50.0).unwrap();
        assert_eq!(out, vec![corner.p0, Point::new(1.46875, 1.46875), corner.p3]);

        // The joint to a following straight run is kept as well.
        let path = pts(&[
            (0., 5.),
            (0., 2.25),
            (2.25, 0.),
            (5., 0.),
            (5., 0.),
            (10., 0.),
            (10., 0.),
        ]);
        assert_eq!(
            flatten(&path, 50.0).unwrap(),
            pts(&[(0., 5.), (1.46875, 1.46875), (5., 0.), (10., 0.)])
        );

        // Straight input is unaffected by the coarse tolerance.
        let line = pts(&[(0., 0.), (0., 0.), (10., 0.), (10., 0.)]);
        assert_eq!(flatten(&line, 50.0).unwrap(), pts(&[(0., 0.), (10., 0.)]));
    }

    #[test]
    fn curve_vertices_lie_on_curve() {
        let c = CubicBez::new((0., 0.), (0., 100.), (100., 100.), (100., 0.));
        let path = BezPath::from(c);
        let out = path.flatten(1.0).unwrap();
        assert!(out.len() > 2);
        assert_eq!(out[0], c.p0);
        assert_eq!(out[out.len() - 1], c.p3);
        // Interior vertices are subdivision midpoints, so they advance along x.
        for w in out.windows(2) {
            assert!(w[0].x <= w[1].x, "{:?} then {:?}", w[0], w[1]);
        }
        // Interior vertices are curve points strictly between the ends.
        for p in &out[1..out.len() - 1] {
            assert!(p.y > 0.0 && p.y <= 75.0, "{p:?} is off the curve");
        }
    }

    #[test]
    fn end_points_are_exact() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let segments = rng.random_range(1..5);
            let path = random_path(&mut rng, segments);
            let tolerance = rng.random_range(0.01..100.0);
            let out = flatten(&path, tolerance).unwrap();
            assert_eq!(out.first(), path.first());
            assert_eq!(out.last(), path.last());
        }
    }

    #[test]
    fn finer_tolerance_never_loses_vertices() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let segments = rng.random_range(1..4);
            let path = random_path(&mut rng, segments);
            let mut prev = 0;
            for tolerance in [1000.0, 100.0, 10.0, 1.0, 0.1, 0.01] {
                let n = flatten(&path, tolerance).unwrap().len();
                assert!(n >= prev, "tolerance {tolerance}: {n} < {prev}");
                prev = n;
            }
        }
    }

    #[test]
    fn deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let path = random_path(&mut rng, 3);
        assert_eq!(flatten(&path, 0.5).unwrap(), flatten(&path, 0.5).unwrap());
    }

    #[test]
    fn coincident_end_points_terminate() {
        let path = pts(&[(5., 5.), (5., 5.), (5., 5.), (5., 5.)]);
        assert_eq!(flatten(&path, 1.0).unwrap(), pts(&[(5., 5.), (5., 5.), (5., 5.)]));

        // A loop whose ends meet is treated as flat and represented by its midpoint.
        let c = CubicBez::new((0., 0.), (-10., 20.), (10., 20.), (0., 0.));
        let out = BezPath::from(c).flatten(1e-6).unwrap();
        assert_eq!(out, vec![c.p0, c.midpoint(), c.p3]);
    }

    #[test]
    fn depth_limit_bounds_output() {
        let path = pts(&[(-1e6, -1e6), (-1e6, 1e6), (1e6, 1e6), (1e6, -1e6)]);
        let out = flatten(&path, f64::MIN_POSITIVE).unwrap();
        assert!(out.len() <= 2 + (1 << MAX_DEPTH));
        assert!(out.len() > 2);
        assert!(out.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn rejects_malformed_paths() {
        for len in [0, 1, 2, 3, 5, 6] {
            let path = vec![Point::ZERO; len];
            assert_eq!(flatten(&path, 1.0), Err(Error::InvalidInput { len }));
        }
    }

    #[test]
    fn rejects_bad_tolerance() {
        let path = pts(&[(0., 0.), (0., 1.), (1., 1.), (1., 0.)]);
        for tolerance in [0.0, -1.0, f64::INFINITY] {
            assert_eq!(flatten(&path, tolerance), Err(Error::InvalidTolerance(tolerance)));
        }
        assert!(matches!(
            flatten(&path, f64::NAN),
            Err(Error::InvalidTolerance(t)) if t.is_nan()
        ));
        // Tolerance is checked before the path shape.
        assert_eq!(flatten(&[], 0.0), Err(Error::InvalidTolerance(0.0)));
    }
}
