// Copyright 2026 the Silhouette Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("silhouette requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn powi(self, n: i32) -> Self => pow;
    fn round(self) -> Self => round;
}

/// Round `value` to `places` decimal places.
///
/// Halfway cases round away from zero. Non-finite values are returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use silhouette::common::round_to;
///
/// assert_eq!(round_to(1.23456, 3), 1.235);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10.0_f64.powi(places.min(i32::MAX as u32) as i32);
    let scaled = value * scale;
    // Past this magnitude every f64 is already an integer.
    if !scaled.is_finite() || scaled.abs() >= 4503599627370496.0 {
        return value;
    }
    scaled.round() / scale
}
