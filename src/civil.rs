// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (Gregorian, wall-clock) time and its conversion to Julian Dates.
//!
//! The conversion uses the closed-form calendar expression
//!
//! ```text
//! JD = 367·Y − ⌊7·(Y + ⌊(M + 9)/12⌋)/4⌋ + ⌊275·M/9⌋ + 1 721 013.5 + D + f + c
//! ```
//!
//! where the calendar fields are read in UTC, `f` is the fraction of the UTC
//! day elapsed and `c` is `1` before March 1900 (`100·Y + M − 190 002.5 < 0`), `0` afterwards. The
//! expression is exact for **1801–2099** only; outside that range the result
//! is unspecified.
//!
//! The inverse measures days from 1970-01-01T00:00:00 and rebuilds a UTC
//! timestamp on top of chrono, so it inherits chrono's calendar and the
//! round trip is exact to the millisecond inside the valid range.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, TimeZone, Timelike};
use log::debug;
use qtty::Second;

use super::error::CivilTimeError;
use super::instant::Time;
use super::scales::{UnixTime, JD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First year for which the calendar expression is valid.
pub const MIN_YEAR: i32 = 1801;
/// Last year for which the calendar expression is valid.
pub const MAX_YEAR: i32 = 2099;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Wall-clock timestamp with a fixed UTC offset, or the empty value.
///
/// The empty value stands for "no time available", e.g. the civil image of
/// an unset [`JulianDate`](crate::JulianDate). It is never a calendar date.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilTime(Option<DateTime<FixedOffset>>);

impl CivilTime {
    /// The empty civil time.
    pub const EMPTY: Self = Self(None);

    /// Build a civil time from wall-clock fields and a UTC offset in seconds
    /// (east positive).
    ///
    /// Years outside [`MIN_YEAR`]..=[`MAX_YEAR`] are rejected.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        utc_offset_seconds: i32,
    ) -> Result<Self, CivilTimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CivilTimeError::YearOutOfRange(year));
        }
        let offset = FixedOffset::east_opt(utc_offset_seconds)
            .ok_or(CivilTimeError::InvalidOffset(utc_offset_seconds))?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CivilTimeError::InvalidDate { year, month, day })?;
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or(
            CivilTimeError::InvalidTime {
                hour,
                minute,
                second,
            },
        )?;
        offset
            .from_local_datetime(&date.and_time(time))
            .single()
            .map(|datetime| Self(Some(datetime)))
            .ok_or(CivilTimeError::InvalidDate { year, month, day })
    }

    /// Civil time corresponding to a Julian Date, in UTC.
    ///
    /// Returns [`CivilTime::EMPTY`] when `jd` is unset (`NaN`), exactly zero,
    /// infinite, or beyond chrono's representable range.
    pub fn from_julian_date(jd: Time<JD>) -> Self {
        let value = jd.value();
        if !value.is_finite() || value == 0.0 {
            debug!("no civil time for {jd}");
            return Self::EMPTY;
        }
        let seconds = jd.to::<UnixTime>().quantity().to::<Second>().value();
        let millis = (seconds * 1_000.0).round() as i64;
        match DateTime::from_timestamp_millis(millis) {
            Some(utc) => Self(Some(utc.fixed_offset())),
            None => {
                debug!("{jd} is outside the representable civil range");
                Self::EMPTY
            }
        }
    }

    /// Julian Date of this civil time.
    ///
    /// The UTC offset is applied first, so two civil times naming the same
    /// instant in different offsets share one Julian Date. The empty civil
    /// time maps to [`Time::UNSET`].
    pub fn to_julian_date(&self) -> Time<JD> {
        match self.0 {
            Some(datetime) => {
                let utc = datetime.naive_utc();
                Time::<JD>::new(julian_day_number(
                    utc.year(),
                    utc.month(),
                    utc.day(),
                    fraction_of_day(&utc),
                ))
            }
            None => Time::<JD>::UNSET,
        }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The underlying chrono timestamp.
    #[inline]
    pub const fn datetime(&self) -> Option<DateTime<FixedOffset>> {
        self.0
    }

    pub fn year(&self) -> Option<i32> {
        self.0.map(|datetime| datetime.year())
    }

    pub fn month(&self) -> Option<u32> {
        self.0.map(|datetime| datetime.month())
    }

    pub fn day(&self) -> Option<u32> {
        self.0.map(|datetime| datetime.day())
    }

    pub fn hour(&self) -> Option<u32> {
        self.0.map(|datetime| datetime.hour())
    }

    pub fn minute(&self) -> Option<u32> {
        self.0.map(|datetime| datetime.minute())
    }

    pub fn second(&self) -> Option<u32> {
        self.0.map(|datetime| datetime.second())
    }

    /// Offset from UTC in seconds, east positive.
    pub fn utc_offset_seconds(&self) -> Option<i32> {
        self.0.map(|datetime| datetime.offset().local_minus_utc())
    }

    /// Fraction of the civil day elapsed on the wall clock, in `[0, 1)`.
    pub fn fractional_day(&self) -> Option<f64> {
        self.0.as_ref().map(fraction_of_day)
    }
}

/// Calendar expression for the Julian Date of a Gregorian wall-clock time.
fn julian_day_number(year: i32, month: u32, day: u32, fraction: f64) -> f64 {
    let y = f64::from(year);
    let m = f64::from(month);
    let jd = 367.0 * y - (7.0 * (y + ((m + 9.0) / 12.0).floor()) / 4.0).floor()
        + (275.0 * m / 9.0).floor()
        + 1_721_013.5
        + f64::from(day)
        + fraction;
    // Before March 1900 the expression runs one day short.
    if 100.0 * y + m - 190_002.5 < 0.0 {
        jd + 1.0
    } else {
        jd
    }
}

fn fraction_of_day<T: Timelike>(datetime: &T) -> f64 {
    let seconds = f64::from(datetime.hour()) * 3_600.0
        + f64::from(datetime.minute()) * 60.0
        + f64::from(datetime.second())
        + f64::from(datetime.nanosecond()) / 1e9;
    seconds / SECONDS_PER_DAY
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CivilTime {
    /// Unchecked: years outside the valid range are accepted as-is.
    fn from(datetime: DateTime<Tz>) -> Self {
        Self(Some(datetime.fixed_offset()))
    }
}

impl From<CivilTime> for Time<JD> {
    fn from(civil: CivilTime) -> Self {
        civil.to_julian_date()
    }
}

impl From<Time<JD>> for CivilTime {
    fn from(jd: Time<JD>) -> Self {
        Self::from_julian_date(jd)
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(datetime) => write!(f, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%:z")),
            None => f.write_str("N/A"),
        }
    }
}
