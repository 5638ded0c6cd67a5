// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry.
//!
//! Thin wrappers over the radian intrinsics of `f64`: angles go in (and come
//! out of the inverse functions) as [`Degrees`].

use qtty::{Degree, Degrees, Radian, Radians};

/// Sine of an angle given in degrees.
#[inline]
pub fn sin(angle: Degrees) -> f64 {
    angle.to::<Radian>().value().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cos(angle: Degrees) -> f64 {
    angle.to::<Radian>().value().cos()
}

/// Arcsine, in degrees, of a dimensionless ratio.
#[inline]
pub fn asin(ratio: f64) -> Degrees {
    Radians::new(ratio.asin()).to::<Degree>()
}

/// Arccosine, in degrees, of a dimensionless ratio.
///
/// Ratios outside `[-1, 1]` yield `NaN`; callers own the domain policy.
#[inline]
pub fn acos(ratio: f64) -> Degrees {
    Radians::new(ratio.acos()).to::<Degree>()
}
