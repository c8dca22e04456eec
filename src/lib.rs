// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening of cubic Bézier outlines and point-in-shape hit testing.
//!
//! The silhouette library turns an outline described by chained cubic Bézier
//! segments into a polygon, and answers whether a point lands inside that
//! (generally irregular) shape. Everything here is a pure function of plain
//! numeric data: no rendering, no event handling, no I/O.
//!
//! The pipeline has three pieces:
//!
//! - [`flatten`] (or [`BezPath::flatten`]) approximates the curve by a
//!   polyline, bisecting each segment until it is flat within a tolerance.
//! - [`Polygon::contains`] tests a point with the even-odd ray casting rule.
//! - [`Rect::contains`] is a constant time pre-filter on the bounding box.
//!
//! [`Silhouette`] ties them together.
//!
//! # Examples
//!
//! ```
//! use silhouette::{flatten, Point, Polygon, Rect};
//!
//! // A quarter-circle-ish arc from (100, 0) to (0, 100), closed through the origin.
//! let outline = [
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 0.0),
//!     Point::new(100.0, 0.0),
//!     Point::new(100.0, 0.0),
//!     Point::new(100.0, 55.0),
//!     Point::new(55.0, 100.0),
//!     Point::new(0.0, 100.0),
//! ];
//! let contour = flatten(&outline, 1.0).unwrap();
//! let bounds = Rect::from_points(contour.iter().copied());
//! let polygon = Polygon::new(contour);
//!
//! let pt = Point::new(60.0, 60.0);
//! assert!(bounds.contains(pt) && polygon.contains(pt));
//! let pt = Point::new(95.0, 95.0);
//! assert!(bounds.contains(pt) && !polygon.contains(pt));
//! ```
//!
//! # Feature Flags
//!
//! - `std` (enabled by default): Get floating point functions from the standard library.
//! - `libm`: Use floating point implementations from [libm][] instead.
//!   This is useful for `no_std` environments.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the geometry types.
//! - `schemars`: Add best-effort support for using the geometry types in JSON schemas.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! An allocator is always required.
//!
//! # Logging
//!
//! Diagnostics are emitted through the [`log`] facade: hitting the
//! subdivision depth limit is logged at `trace` level, and building a
//! [`Silhouette`] at `debug` level. No logger is installed by this crate.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::many_single_char_names, clippy::unreadable_literal)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("silhouette requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// Only used by the benchmarks.
#[cfg(test)]
use criterion as _;

extern crate alloc;

mod bezpath;
pub mod common;
mod cubicbez;
mod error;
mod flatten;
mod point;
mod polygon;
mod rect;
mod shape;
mod silhouette;
mod svg;

pub use crate::bezpath::*;
pub use crate::cubicbez::*;
pub use crate::error::*;
pub use crate::flatten::*;
pub use crate::point::*;
pub use crate::polygon::*;
pub use crate::rect::*;
pub use crate::shape::*;
pub use crate::silhouette::*;
pub use crate::svg::*;
