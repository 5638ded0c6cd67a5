// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day selector for the solar formulas.

use qtty::Days;

use super::instant::Time;
use super::scales::{J2K, JD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The Julian day a solar computation refers to.
///
/// Normally obtained by rounding an instant with
/// [`JulianDate::astro_day`](crate::JulianDate::astro_day), in which case the
/// value is integral. [`AstroDay::new`] accepts any finite scalar so that
/// half-day offsets can be fed to the formulas directly.
///
/// Kept distinct from [`Time<JD>`] so a continuous instant cannot be passed
/// where a day is expected without an explicit conversion.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AstroDay(Days);

impl AstroDay {
    /// Create from a raw Julian day number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(Days::new(value))
    }

    /// The day number as a [`Days`] quantity.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.0
    }

    /// The day number as a scalar.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0.value()
    }

    /// The instant at the start of this day number, on the JD axis.
    #[inline]
    pub const fn to_julian_date(&self) -> Time<JD> {
        Time::<JD>::from_days(self.0)
    }

    /// This day on the J2000 counter (`day − 2 451 545.0 + 0.0008`).
    #[inline]
    pub fn to_j2000(&self) -> Time<J2K> {
        self.to_julian_date().to_j2000()
    }

    /// The following day.
    #[inline]
    pub fn succ(&self) -> Self {
        Self(self.0 + Days::new(1.0))
    }
}

impl std::fmt::Display for AstroDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "day {}", self.value())
    }
}
