// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use crate::{Point, Shape};

/// An axis-aligned rectangle, described by its origin and size.
///
/// A rectangle with a non-positive width or height is legal and represents
/// an empty region.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y: f64,
    /// The extent along the x axis.
    pub width: f64,
    /// The extent along the y axis.
    pub height: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect::new(0., 0., 0., 0.);

    /// A new rectangle from origin and size.
    ///
    /// Nothing forbids a negative width or height; such a rectangle is empty.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// The smallest rectangle enclosing every point in `points`.
    ///
    /// Returns [`Rect::ZERO`] when the iterator is empty. Note that a single
    /// point (or collinear axis-aligned points) produces a zero-area, and
    /// therefore empty, rectangle.
    pub fn from_points<I>(points: I) -> Rect
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let mut iter = points.into_iter().map(Into::into);
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };
        let (x0, y0, x1, y1) = iter.fold(
            (first.x, first.y, first.x, first.y),
            |(x0, y0, x1, y1), pt: Point| (x0.min(pt.x), y0.min(pt.y), x1.max(pt.x), y1.max(pt.y)),
        );
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// The minimum x coordinate.
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// The maximum x coordinate.
    ///
    /// This edge is excluded from [`Rect::contains`].
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// The minimum y coordinate.
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// The maximum y coordinate.
    ///
    /// This edge is excluded from [`Rect::contains`].
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// The origin of the rectangle.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The area of the rectangle, or zero if it is empty.
    #[inline]
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.width * self.height
        }
    }

    /// Whether this rectangle covers no points.
    ///
    /// This is the case when either the width or the height is not strictly
    /// positive, including when either is NaN.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// `true` if `pt` lies within `self`.
    ///
    /// Containment is half-open: the left and top edges are included, the
    /// right and bottom edges are not. Empty rectangles contain nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use silhouette::{Point, Rect};
    ///
    /// let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    /// assert!(rect.contains(Point::new(0.0, 0.0)));
    /// assert!(rect.contains(Point::new(9.999, 9.999)));
    /// assert!(!rect.contains(Point::new(10.0, 10.0)));
    /// ```
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        !self.is_empty()
            && pt.x >= self.x
            && pt.x < self.x + self.width
            && pt.y >= self.y
            && pt.y < self.y + self.height
    }
}

impl From<(f64, f64, f64, f64)> for Rect {
    fn from(v: (f64, f64, f64, f64)) -> Rect {
        Rect::new(v.0, v.1, v.2, v.3)
    }
}

impl Shape for Rect {
    #[inline]
    fn contains(&self, pt: Point) -> bool {
        Rect::contains(self, pt)
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        *self
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Rect};

    #[test]
    fn contains_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(5.0, 5.0)));
        assert!(r.contains(Point::new(9.999, 9.999)));
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(!r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
        assert!(!r.contains(Point::new(5.0, 10.0)));
        assert!(!r.contains(Point::new(-0.001, 5.0)));
    }

    #[test]
    fn contains_offset_origin() {
        let r = Rect::new(-5.0, 20.0, 3.0, 4.0);
        assert!(r.contains(Point::new(-4.0, 22.0)));
        assert!(!r.contains(Point::new(-2.0, 22.0)));
        assert!(!r.contains(Point::new(-4.0, 19.9)));
        assert_eq!(r.origin(), Point::new(-5.0, 20.0));
        assert_eq!(r.min_x(), -5.0);
        assert_eq!(r.max_y(), 24.0);
    }

    #[test]
    fn degenerate_contains_nothing() {
        let rects = [
            Rect::new(0.0, 0.0, 0.0, 10.0),
            Rect::new(0.0, 0.0, 10.0, 0.0),
            Rect::new(0.0, 0.0, -10.0, 10.0),
            Rect::new(10.0, 10.0, -10.0, -10.0),
            Rect::new(0.0, 0.0, f64::NAN, 10.0),
        ];
        for r in rects {
            assert!(r.is_empty());
            assert_eq!(r.area(), 0.0);
            for x in [-10.0, -5.0, 0.0, 5.0, 10.0] {
                for y in [-10.0, -5.0, 0.0, 5.0, 10.0] {
                    assert!(!r.contains(Point::new(x, y)), "{r:?} contains ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn from_points() {
        let r = Rect::from_points([(3.0, -1.0), (-2.0, 4.0), (0.0, 0.0)]);
        assert_eq!(r, Rect::new(-2.0, -1.0, 5.0, 5.0));
        assert_eq!(r.max_x(), 3.0);
        assert_eq!(r.max_y(), 4.0);

        let none: [Point; 0] = [];
        assert_eq!(Rect::from_points(none), Rect::ZERO);
        assert!(Rect::from_points([(1.0, 1.0)]).is_empty());
    }
}
