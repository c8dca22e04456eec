// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simple polygons and point-in-polygon testing.

use alloc::vec::Vec;

use crate::{Point, Rect, Shape};

/// A closed polygon, stored as an ordered list of vertices.
///
/// The last vertex is implicitly joined back to the first. No orientation is
/// required, and self-intersecting outlines are accepted (containment then
/// follows the even-odd rule).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from its vertices.
    #[inline]
    pub fn new(vertices: Vec<Point>) -> Polygon {
        Polygon { vertices }
    }

    /// Create a polygon from a flat `[x0, y0, x1, y1, ...]` buffer.
    ///
    /// A trailing unpaired value is ignored.
    pub fn from_coords(coords: &[f64]) -> Polygon {
        let vertices = coords
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();
        Polygon { vertices }
    }

    /// The vertices of the polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// The number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertices as a flat `[x0, y0, x1, y1, ...]` buffer.
    pub fn to_coords(&self) -> Vec<f64> {
        self.vertices.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// `true` if `pt` is inside the polygon.
    ///
    /// This is the ray casting parity test: a horizontal ray is cast from
    /// `pt` towards positive x, and each edge it crosses flips the result.
    /// Polygons with fewer than three vertices contain nothing.
    ///
    /// An edge counts as crossed when its end points lie on opposite sides
    /// of the line through `pt` (an end point with `y == pt.y` counts as
    /// being on the lesser side) and the crossing is strictly to the right of
    /// `pt`. Points on the boundary therefore resolve asymmetrically: for an
    /// axis-aligned square the left and minimum-y edges are inside, the
    /// right and maximum-y edges are outside.
    ///
    /// # Examples
    ///
    /// ```
    /// use silhouette::{Point, Polygon};
    ///
    /// let square = Polygon::from_coords(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0]);
    /// assert!(square.contains(Point::new(5.0, 5.0)));
    /// assert!(!square.contains(Point::new(15.0, 5.0)));
    /// ```
    pub fn contains(&self, pt: Point) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > pt.y) != (vj.y > pt.y)
                && pt.x < (vj.x - vi.x) * ((pt.y - vi.y) / (vj.y - vi.y)) + vi.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    /// The smallest rectangle enclosing every vertex.
    ///
    /// Note that with the half-open convention of [`Rect::contains`], points
    /// on the right and bottom extremes of the polygon fall outside this
    /// rectangle.
    pub fn bounding_box(&self) -> Rect {
        Rect::from_points(self.vertices.iter().copied())
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Polygon {
        Polygon::new(vertices)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Polygon {
        Polygon::new(iter.into_iter().collect())
    }
}

impl Shape for Polygon {
    #[inline]
    fn contains(&self, pt: Point) -> bool {
        Polygon::contains(self, pt)
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        Polygon::bounding_box(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Polygon, Rect};

    fn square() -> Polygon {
        Polygon::from_coords(&[0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0])
    }

    #[test]
    fn square_contains() {
        let sq = square();
        assert!(sq.contains(Point::new(5.0, 5.0)));
        assert!(!sq.contains(Point::new(15.0, 5.0)));
        assert!(!sq.contains(Point::new(-5.0, 5.0)));
        assert!(!sq.contains(Point::new(5.0, 15.0)));
        assert!(!sq.contains(Point::new(5.0, -5.0)));
    }

    // The ray cast resolves boundary points asymmetrically. These results
    // are relied upon by callers and must stay stable.
    #[test]
    fn square_boundary() {
        let sq = square();
        assert!(!sq.contains(Point::new(10.0, 5.0)), "right edge");
        assert!(sq.contains(Point::new(0.0, 5.0)), "left edge");
        assert!(sq.contains(Point::new(5.0, 0.0)), "top edge");
        assert!(!sq.contains(Point::new(5.0, 10.0)), "bottom edge");
        assert!(sq.contains(Point::new(0.0, 0.0)), "top left corner");
        assert!(!sq.contains(Point::new(10.0, 10.0)), "bottom right corner");
    }

    #[test]
    fn orientation_does_not_matter() {
        let reversed: Polygon = square().vertices().iter().rev().copied().collect();
        for (x, y) in [(5.0, 5.0), (15.0, 5.0), (0.5, 9.5), (-1.0, -1.0)] {
            let pt = Point::new(x, y);
            assert_eq!(square().contains(pt), reversed.contains(pt));
        }
    }

    #[test]
    fn concave() {
        // A "U" shape open at the top.
        let u = Polygon::from_coords(&[
            0.0, 0.0, 3.0, 0.0, 3.0, 7.0, 7.0, 7.0, 7.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0,
        ]);
        assert!(u.contains(Point::new(1.5, 5.0)));
        assert!(u.contains(Point::new(8.5, 5.0)));
        assert!(u.contains(Point::new(5.0, 8.5)));
        assert!(!u.contains(Point::new(5.0, 3.0)));
    }

    #[test]
    fn degenerate_contains_nothing() {
        let polys = [
            Polygon::default(),
            Polygon::from_coords(&[1.0, 1.0]),
            Polygon::from_coords(&[0.0, 0.0, 10.0, 10.0]),
        ];
        for poly in polys {
            for x in [-1.0, 0.0, 0.5, 5.0, 10.0] {
                for y in [-1.0, 0.0, 0.5, 5.0, 10.0] {
                    assert!(!poly.contains(Point::new(x, y)));
                }
            }
        }
    }

    #[test]
    fn coords_and_points_agree() {
        let from_points = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]);
        assert_eq!(from_points, square());
        assert_eq!(square().len(), 4);
        assert_eq!(
            square().to_coords(),
            vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0]
        );
        // Trailing odd value is dropped.
        assert_eq!(Polygon::from_coords(&[0.0, 0.0, 1.0, 1.0, 2.0]).len(), 2);
    }

    #[test]
    fn bounding_box() {
        let tri = Polygon::from_coords(&[2.0, 1.0, 8.0, 3.0, 4.0, 9.0]);
        assert_eq!(tri.bounding_box(), Rect::new(2.0, 1.0, 6.0, 8.0));
        assert_eq!(Polygon::default().bounding_box(), Rect::ZERO);
    }
}
