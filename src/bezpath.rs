// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chains of cubic Bézier segments.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{CubicBez, Error, Point};

/// A chain of cubic Bézier segments, stored as a flat list of control points.
///
/// The first point is the start of the path. Every following group of three
/// points holds the two control points and the end point of one segment, and
/// that end point is the start of the next segment. The number of points is
/// therefore always `1 + 3k`, with at least one segment.
///
/// The invariant is checked on construction, so every `BezPath` can be
/// flattened without further validation of its shape.
///
/// # Examples
///
/// ```
/// use silhouette::{BezPath, Point};
///
/// let path = BezPath::new(vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 10.0),
///     Point::new(10.0, 10.0),
///     Point::new(10.0, 0.0),
/// ])
/// .unwrap();
/// assert_eq!(path.num_segments(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BezPath(Vec<Point>);

impl BezPath {
    /// Create a path from its control points.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] unless `points.len()` is `1 + 3k` for
    /// some `k >= 1`.
    pub fn new(points: Vec<Point>) -> Result<BezPath, Error> {
        validate(&points)?;
        Ok(BezPath(points))
    }

    /// Create a path by copying a slice of control points.
    ///
    /// # Errors
    ///
    /// Same as [`BezPath::new`].
    pub fn from_slice(points: &[Point]) -> Result<BezPath, Error> {
        validate(points)?;
        Ok(BezPath(points.to_vec()))
    }

    /// Wrap points that are known to satisfy the `1 + 3k` layout.
    pub(crate) fn from_validated(points: Vec<Point>) -> BezPath {
        debug_assert!(validate(&points).is_ok(), "malformed control points");
        BezPath(points)
    }

    /// Create a path from a single segment.
    pub fn from_cubic(c: CubicBez) -> BezPath {
        BezPath(alloc::vec![c.p0, c.p1, c.p2, c.p3])
    }

    /// The control points of the path.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Consume the path, returning its control points.
    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.0
    }

    /// The first point of the path.
    #[inline]
    pub fn start(&self) -> Point {
        self.0[0]
    }

    /// The last point of the path.
    #[inline]
    pub fn end(&self) -> Point {
        self.0[self.0.len() - 1]
    }

    /// The number of cubic segments in the path.
    #[inline]
    pub fn num_segments(&self) -> usize {
        self.0.len() / 3
    }

    /// Iterate over the segments of the path, in order.
    pub fn segments(&self) -> Segments<'_> {
        segments_unchecked(&self.0)
    }

    /// Is this path finite?
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|p| p.is_finite())
    }
}

impl TryFrom<Vec<Point>> for BezPath {
    type Error = Error;

    fn try_from(points: Vec<Point>) -> Result<BezPath, Error> {
        BezPath::new(points)
    }
}

impl From<CubicBez> for BezPath {
    fn from(c: CubicBez) -> BezPath {
        BezPath::from_cubic(c)
    }
}

impl AsRef<[Point]> for BezPath {
    fn as_ref(&self) -> &[Point] {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BezPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = <Vec<Point> as serde::Deserialize>::deserialize(deserializer)?;
        BezPath::new(points).map_err(serde::de::Error::custom)
    }
}

/// Check that `points` describes a chain of at least one cubic segment.
pub(crate) fn validate(points: &[Point]) -> Result<(), Error> {
    let len = points.len();
    if len < 4 || (len - 1) % 3 != 0 {
        return Err(Error::InvalidInput { len });
    }
    Ok(())
}

/// Iterate over segments of a slice that has already passed [`validate`].
pub(crate) fn segments_unchecked(points: &[Point]) -> Segments<'_> {
    Segments { points, ix: 0 }
}

/// An iterator over the cubic segments of a [`BezPath`].
///
/// Returned by [`BezPath::segments`].
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    points: &'a [Point],
    ix: usize,
}

impl Iterator for Segments<'_> {
    type Item = CubicBez;

    fn next(&mut self) -> Option<CubicBez> {
        let pts = self.points.get(self.ix..self.ix + 4)?;
        self.ix += 3;
        Some(CubicBez {
            p0: pts[0],
            p1: pts[1],
            p2: pts[2],
            p3: pts[3],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points.len().saturating_sub(self.ix + 1) / 3;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}
