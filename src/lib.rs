// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar ephemeris over typed astronomical time.
//!
//! This crate computes mean solar noon, solar declination, hour angle, solar
//! transit, sunrise and sunset for any point on Earth, together with the
//! conversion between Julian Dates and civil (Gregorian) wall-clock time.
//! The solar model is the low-precision NOAA "sunrise equation"; expect
//! agreement with published almanacs to within a couple of minutes.
//!
//! # Core types
//!
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`] — type alias for `Time<JD>`, the continuous time axis.
//!   `NaN` ([`Time::UNSET`]) marks a value that was never computed.
//! - [`AstroDay`] — the day selector fed to every solar formula.
//! - [`CivilTime`] — wall-clock timestamp with UTC offset (1801–2099), or empty.
//! - [`Location`] — latitude, longitude and altitude of the observer.
//! - [`SunEvents`] — sunrise/transit/sunset, or a polar day/night.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`J2K`] | Days since J2000.0 (+0.0008 d), the solar-noon counter |
//! | [`UnixTime`] | Days since 1970-01-01 |
//!
//! # Example
//!
//! ```rust
//! use solarday::{CivilTime, Location};
//!
//! let date = CivilTime::new(2024, 6, 20, 12, 0, 0, 0).unwrap();
//! let day = date.to_julian_date().astro_day().unwrap();
//! let greenwich = Location::from_degrees(51.48, 0.0, 0.0);
//!
//! let sunrise = greenwich.sunrise_time(day).unwrap();
//! println!("sunrise: {}", sunrise.to_civil());
//! ```
//!
//! # Polar days and nights
//!
//! When the Sun does not cross the horizon the hour angle is undefined.
//! [`Location::hour_angle`], [`Location::sunrise_time`] and
//! [`Location::sunset_time`] then return [`SolarError::PolarDay`] or
//! [`SolarError::PolarNight`] instead of a number; the ratio is never
//! clamped.

mod civil;
mod day;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod location;
pub(crate) mod scales;
mod solar;
mod sunrise;
pub mod trig;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use civil::{CivilTime, MAX_YEAR, MIN_YEAR};
pub use day::AstroDay;
pub use error::{CivilTimeError, LocationError, SolarError};
pub use instant::{Time, TimeScale};
pub use location::{altitude_correction, Location};
pub use scales::{UnixTime, J2K, JD};
pub use solar::AXIAL_TILT;
pub use sunrise::SunEvents;

/// Julian Date — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;
