// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day counter and encodes how values on
//! that counter relate to the canonical **Julian Date**.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`J2K`] | Days since J2000.0, solar-noon convention | 2 451 544.9992 |
//! | [`UnixTime`] | Days since 1970-01-01T00:00:00 | 2 440 587.5 |

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date — the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Days elapsed since the J2000.0 epoch, as used by the sunrise equation.
///
/// The counter is shifted by a further `0.0008` days (≈ 69 s), the
/// cumulative leap-second / ΔT allowance of the low-precision solar model:
///
/// ```text
/// n = JD − 2 451 545.0 + 0.0008
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct J2K;

/// JD of the J2000.0 epoch (2000-01-01T12:00:00 TT).
pub(crate) const J2000_EPOCH_JD: Days = Days::new(2_451_545.0);

/// Leap-second allowance folded into the [`J2K`] counter.
pub(crate) const J2K_CORRECTION: Days = Days::new(0.0008);

impl TimeScale for J2K {
    const LABEL: &'static str = "J2000+";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + J2000_EPOCH_JD - J2K_CORRECTION
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - J2000_EPOCH_JD + J2K_CORRECTION
    }
}

/// Unix Time — days since 1970-01-01T00:00:00, the reference epoch for
/// civil-time reconstruction.
///
/// Note: this scale ignores leap seconds (as POSIX does).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
pub(crate) const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH_JD
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, J2K, UnixTime);
