// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised while building geometry.

use core::fmt;

/// An error which can be returned when flattening or building a path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Error {
    /// The control point chain does not have the form `1 + 3k` with at least
    /// one segment.
    InvalidInput {
        /// Number of control points that were supplied.
        len: usize,
    },
    /// The flattening tolerance is zero, negative, or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput { len } => write!(
                f,
                "Invalid Bézier path: expected 1 + 3k control points with k >= 1, got {len}"
            ),
            Error::InvalidTolerance(tolerance) => {
                write!(f, "Tolerance must be positive and finite, got {tolerance}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
