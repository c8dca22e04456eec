// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for hit-testable regions.

use crate::{Point, Rect};

/// A region of the plane that can answer point containment queries.
///
/// Every implementation is a pure function of its own geometry, so shapes
/// can be shared freely between threads.
pub trait Shape {
    /// Returns `true` if the [`Point`] is inside this shape.
    ///
    /// Points exactly on the boundary follow the conventions of the
    /// implementing type and are not guaranteed to be symmetric.
    fn contains(&self, pt: Point) -> bool;

    /// The smallest rectangle that encloses the shape.
    fn bounding_box(&self) -> Rect;
}

/// Blanket implementation so `impl Shape` will accept references.
impl<T: Shape> Shape for &T {
    fn contains(&self, pt: Point) -> bool {
        (*self).contains(pt)
    }

    fn bounding_box(&self) -> Rect {
        (*self).bounding_box()
    }
}
