// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types.

use thiserror::Error;

/// Outcome of an hour-angle evaluation with no sunrise or sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolarError {
    /// The Sun stays above the horizon for the whole day.
    #[error("polar day: the sun does not set")]
    PolarDay,
    /// The Sun stays below the horizon for the whole day.
    #[error("polar night: the sun does not rise")]
    PolarNight,
    /// The hour-angle ratio is not a number (non-finite inputs).
    #[error("hour angle is undefined for the given location and day")]
    Undefined,
}

/// Rejected civil-time construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CivilTimeError {
    /// The Julian-date formula is only valid for 1801–2099.
    #[error("year {0} is outside the supported range 1801..=2099")]
    YearOutOfRange(i32),
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },
    #[error("invalid UTC offset of {0} seconds")]
    InvalidOffset(i32),
}

/// Field-level coordinate validation failure.
///
/// Renders as `<Field>: <reason>`, e.g. `Longitude: greater than max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{field}: {reason}")]
pub struct LocationError {
    pub field: &'static str,
    pub reason: &'static str,
}
