// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer position on the Earth's surface.

use qtty::{Degrees, Meter, Quantity};

use super::error::LocationError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic position of an observer.
///
/// * `latitude` — degrees, north positive, `[-90, 90]`.
/// * `longitude` — degrees, east positive, `[-180, 180]`.
/// * `altitude` — metres above sea level, `>= 0`.
///
/// Bounds are **not** enforced on construction. The solar formulas accept
/// any value and report impossible geometry through
/// [`SolarError`](crate::SolarError); [`Location::validate`] is available to
/// callers that want field-level rejection up front.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    pub latitude: Degrees,
    pub longitude: Degrees,
    pub altitude: Quantity<Meter>,
}

impl Location {
    pub const fn new(latitude: Degrees, longitude: Degrees, altitude: Quantity<Meter>) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Build from raw degrees / metres.
    pub const fn from_degrees(latitude: f64, longitude: f64, altitude_m: f64) -> Self {
        Self::new(
            Degrees::new(latitude),
            Degrees::new(longitude),
            Quantity::<Meter>::new(altitude_m),
        )
    }

    /// Horizon dip for this observer's altitude.
    #[inline]
    pub fn altitude_correction(&self) -> Degrees {
        altitude_correction(self.altitude)
    }

    /// Check coordinate bounds, reporting the first offending field.
    pub fn validate(&self) -> Result<(), LocationError> {
        check_range("Latitude", self.latitude.value(), -90.0, 90.0)?;
        check_range("Longitude", self.longitude.value(), -180.0, 180.0)?;
        check_range("Altitude", self.altitude.value(), 0.0, f64::INFINITY)
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), LocationError> {
    if value.is_nan() {
        return Err(LocationError {
            field,
            reason: "not a number",
        });
    }
    if value < min {
        return Err(LocationError {
            field,
            reason: "less than min",
        });
    }
    if value > max {
        return Err(LocationError {
            field,
            reason: "greater than max",
        });
    }
    Ok(())
}

/// Apparent lowering of the horizon seen from `altitude` metres.
///
/// `−2.076·√(h/60)` degrees above sea level. At or below sea level the fixed
/// `−0.1625°` is returned; below-sea-level geometry is not modelled.
pub fn altitude_correction(altitude: Quantity<Meter>) -> Degrees {
    let metres = altitude.value();
    if metres > 0.0 {
        Degrees::new(-2.076 * (metres / 60.0).sqrt())
    } else {
        Degrees::new(-0.1625)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn altitude_correction_at_sea_level() {
        let corr = altitude_correction(Quantity::<Meter>::new(0.0));
        assert_eq!(corr.value(), -0.1625);
    }

    #[test]
    fn altitude_correction_below_sea_level_is_fixed() {
        let corr = altitude_correction(Quantity::<Meter>::new(-400.0));
        assert_eq!(corr.value(), -0.1625);
    }

    #[test]
    fn altitude_correction_at_1000m() {
        let corr = Location::from_degrees(45.0, 10.0, 1000.0).altitude_correction();
        assert!((corr.value() - -8.475235).abs() < 1e-6, "got {}", corr.value());
    }

    #[test]
    fn validate_reports_field_errors() {
        let err = Location::from_degrees(-56.3762, 181.26, 0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Longitude: greater than max");

        let err = Location::from_degrees(106.327, -48.5672, 0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Latitude: greater than max");

        let err = Location::from_degrees(10.0, 10.0, -1.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Altitude: less than min");
    }

    #[test]
    fn validate_accepts_in_range() {
        assert!(Location::from_degrees(36.3737, 25.373181, 0.0).validate().is_ok());
        assert!(Location::from_degrees(-90.0, 180.0, 8848.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_nan() {
        let err = Location::from_degrees(f64::NAN, 0.0, 0.0)
            .validate()
            .unwrap_err();
        assert_eq!(err.field, "Latitude");
    }
}
