// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing against an outline built from a Bézier path.

use alloc::vec::Vec;

use crate::{BezPath, Error, Point, Polygon, Rect, Shape};

/// Number of decimal places kept in polygon vertices by
/// [`Silhouette::from_path`].
pub const DEFAULT_PRECISION: u32 = 3;

/// An irregular region tested with a rectangle pre-filter and a polygon.
///
/// Queries first check the bounding rectangle, which is cheap, and only
/// points that pass are tested against the polygon.
///
/// The geometry is expected to be in the same coordinate space as the query
/// points; mapping device coordinates into that space is up to the caller.
///
/// # Examples
///
/// ```
/// use silhouette::{BezPath, Point, Silhouette};
///
/// // A rough "phone" outline: a rectangle with rounded top corners.
/// let path = BezPath::from_svg(
///     "M0 20 C0 5 5 0 20 0 L80 0 C95 0 100 5 100 20 L100 200 L0 200 Z",
/// )
/// .unwrap();
/// // Keep the flattened contour as is; any simplifier can go here.
/// let phone = Silhouette::from_path(&path, 1.0, |contour| contour).unwrap();
///
/// assert!(phone.hit_test(Point::new(50.0, 100.0)));
/// assert!(!phone.hit_test(Point::new(150.0, 100.0)));
/// assert!(!phone.hit_test(Point::new(1.0, 1.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Silhouette {
    bounds: Rect,
    polygon: Polygon,
}

impl Silhouette {
    /// Create a silhouette from already known geometry.
    ///
    /// `bounds` is used only as a pre-filter; points outside it are never
    /// inside the silhouette, even if the polygon extends further.
    #[inline]
    pub fn new(bounds: Rect, polygon: Polygon) -> Silhouette {
        Silhouette { bounds, polygon }
    }

    /// Build a silhouette by flattening `path`.
    ///
    /// The path is flattened with `tolerance`, the bounding rectangle is
    /// taken from the full flattened contour, and the contour is then passed
    /// through `simplify` before becoming the polygon. Coordinates of both
    /// the polygon and the rectangle are rounded to [`DEFAULT_PRECISION`]
    /// decimal places.
    ///
    /// `simplify` stands in for any vertex-reduction routine. Pass the
    /// identity (`|contour| contour`) to keep every flattened vertex.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if `tolerance` is not a positive
    /// finite number.
    pub fn from_path<F>(path: &BezPath, tolerance: f64, simplify: F) -> Result<Silhouette, Error>
    where
        F: FnOnce(Vec<Point>) -> Vec<Point>,
    {
        Silhouette::from_path_with_precision(path, tolerance, DEFAULT_PRECISION, simplify)
    }

    /// Like [`Silhouette::from_path`], with control over the rounding of
    /// coordinates.
    ///
    /// The bounding rectangle is computed from the rounded contour, so every
    /// rounded contour vertex stays within it even at coarse precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTolerance`] if `tolerance` is not a positive
    /// finite number.
    pub fn from_path_with_precision<F>(
        path: &BezPath,
        tolerance: f64,
        precision: u32,
        simplify: F,
    ) -> Result<Silhouette, Error>
    where
        F: FnOnce(Vec<Point>) -> Vec<Point>,
    {
        let contour = path.flatten(tolerance)?;
        let bounds = Rect::from_points(contour.iter().map(|pt| pt.round_to(precision)));
        let flattened = contour.len();
        let polygon: Polygon = simplify(contour)
            .into_iter()
            .map(|pt| pt.round_to(precision))
            .collect();
        log::debug!(
            "silhouette: {} segments flattened to {} points, {} after simplification, bounds {:?}",
            path.num_segments(),
            flattened,
            polygon.len(),
            bounds
        );
        Ok(Silhouette { bounds, polygon })
    }

    /// The bounding rectangle used as a pre-filter.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The polygon used for the precise test.
    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// `true` if `pt` lands inside the silhouette.
    ///
    /// Both the rectangle and the polygon have to contain the point, so the
    /// half-open edges of [`Rect::contains`] apply in addition to the
    /// boundary behavior of [`Polygon::contains`].
    #[inline]
    pub fn hit_test(&self, pt: Point) -> bool {
        self.bounds.contains(pt) && self.polygon.contains(pt)
    }
}

impl Shape for Silhouette {
    #[inline]
    fn contains(&self, pt: Point) -> bool {
        self.hit_test(pt)
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        self.bounds
    }
}
