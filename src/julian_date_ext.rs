// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use super::civil::CivilTime;
use super::day::AstroDay;
use super::instant::Time;
use super::scales::{J2K, JD};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 TT  (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Shift onto the J2000 day counter used by the solar formulas.
    ///
    /// `n = JD − 2 451 545.0 + 0.0008`. A pure additive shift.
    #[inline]
    pub fn to_j2000(&self) -> Time<J2K> {
        self.to::<J2K>()
    }

    /// Round to the nearest whole Julian day.
    ///
    /// Returns `None` for the unset sentinel, which has no defined day.
    #[inline]
    pub fn astro_day(&self) -> Option<AstroDay> {
        if self.is_unset() {
            return None;
        }
        Some(AstroDay::new(self.value().round()))
    }

    /// Wall-clock civil time (UTC) for this instant.
    ///
    /// Kept as a convenience wrapper for [`CivilTime::from_julian_date`].
    #[inline]
    pub fn to_civil(&self) -> CivilTime {
        CivilTime::from_julian_date(*self)
    }
}
