// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Solar position — the sunrise equation
//!
//! Low-precision solar ephemeris evaluated per observer and per day, after
//! the NOAA / Wikipedia "sunrise equation":
//!
//! ```text
//! n  = day − 2 451 545.0 + 0.0008 + lon/360      mean solar noon
//! M  = (357.5291 + 0.98560028·n) mod 360           mean anomaly
//! C  = 1.9148·sin(lon) + 0.0200·sin(2M) + 0.0003·sin(3M)
//! λ  = (M + C + 180 + 102.9732) mod 360           ecliptic longitude
//! δ  = asin(sin λ · sin ε)                         declination
//! Jt = 2 451 545.0 + n + 0.0053·sin(M − 0.0069·sin 2λ)
//! ```
//!
//! ## Radian terms
//!
//! Two terms are evaluated on the raw numbers with a radian sine, not on
//! degrees:
//!
//! * the leading term of `C` takes the sine of the observer's longitude
//!   value, and the `2M`/`3M` terms take the sine of `2M` and `3M` as plain
//!   numbers;
//! * the transit correction takes the sine of `M − 0.0069·sin(2λ)` as a
//!   single argument.
//!
//! Both perturb the result by at most a few minutes of time, which is within
//! the accuracy of the model.
//!
//! Because these sines are not 360-periodic, the `[0, 360)` reduction of `M`
//! is part of the result. `M` is only positive before reduction from early
//! January 1999 onwards; for earlier days the wrapped value moves the transit
//! by up to about eleven minutes compared with a truncated remainder that keeps
//! the sign.
//!
//! The axial tilt ε is fixed at 23.439281°; no precession is applied.

use log::trace;
use qtty::{Days, Degrees};

use super::day::AstroDay;
use super::error::SolarError;
use super::instant::Time;
use super::location::Location;
use super::scales::{J2K, J2000_EPOCH_JD, JD};
use super::trig::{acos, asin, cos, sin};

/// Obliquity of the ecliptic.
pub const AXIAL_TILT: Degrees = Degrees::new(23.439281);

/// Argument of perihelion of the Earth's orbit.
const PERIHELION: f64 = 102.9732;

/// Solar altitude at sunrise/sunset: refraction plus the solar semidiameter.
const HORIZON_ALTITUDE: Degrees = Degrees::new(-0.83);

impl Location {
    /// Mean solar noon on the J2000 day counter.
    ///
    /// The longitude enters as a fraction of a day east or west of Greenwich.
    pub fn mean_solar_noon(&self, day: AstroDay) -> Time<J2K> {
        day.to_j2000() + Days::new(self.longitude.value() / 360.0)
    }

    /// Solar mean anomaly, in `[0, 360)`.
    pub fn solar_mean_anomaly(&self, day: AstroDay) -> Degrees {
        let n = self.mean_solar_noon(day).value();
        Degrees::new((357.5291 + 0.98560028 * n).rem_euclid(360.0))
    }

    /// Equation of the centre.
    pub fn equation_of_the_centre(&self, day: AstroDay) -> Degrees {
        let m = self.solar_mean_anomaly(day).value();
        Degrees::new(
            1.9148 * self.longitude.value().sin()
                + 0.0200 * (2.0 * m).sin()
                + 0.0003 * (3.0 * m).sin(),
        )
    }

    /// Ecliptic longitude of the Sun, in `[0, 360)`.
    pub fn ecliptic_longitude(&self, day: AstroDay) -> Degrees {
        let m = self.solar_mean_anomaly(day).value();
        let c = self.equation_of_the_centre(day).value();
        Degrees::new((m + c + 180.0 + PERIHELION).rem_euclid(360.0))
    }

    /// Declination of the Sun.
    pub fn solar_declination(&self, day: AstroDay) -> Degrees {
        asin(sin(self.ecliptic_longitude(day)) * sin(AXIAL_TILT))
    }

    /// Local true solar noon.
    pub fn solar_transit(&self, day: AstroDay) -> Time<JD> {
        let n = self.mean_solar_noon(day).quantity();
        let m = self.solar_mean_anomaly(day).value();
        let lambda = self.ecliptic_longitude(day);
        let correction = 0.0053 * (m - 0.0069 * sin(Degrees::new(2.0 * lambda.value()))).sin();
        Time::<JD>::from_days(J2000_EPOCH_JD + n + Days::new(correction))
    }

    /// Cosine of the sunrise hour angle, before any domain check.
    ///
    /// Values below `-1` mean the Sun never sets on `day`, values above `1`
    /// that it never rises.
    pub fn cos_hour_angle(&self, day: AstroDay) -> f64 {
        let declination = self.solar_declination(day);
        let horizon = HORIZON_ALTITUDE + self.altitude_correction();
        (sin(horizon) - sin(self.latitude) * sin(declination))
            / (cos(self.latitude) * cos(declination))
    }

    /// Half the diurnal arc: angle between solar transit and sunrise/sunset.
    ///
    /// No clamping is applied; polar days and nights come back as errors.
    pub fn hour_angle(&self, day: AstroDay) -> Result<Degrees, SolarError> {
        let ratio = self.cos_hour_angle(day);
        if ratio.is_nan() {
            trace!("hour angle undefined at {self:?} on {day}");
            return Err(SolarError::Undefined);
        }
        if ratio < -1.0 {
            trace!("polar day at {self:?} on {day} (cos H = {ratio})");
            return Err(SolarError::PolarDay);
        }
        if ratio > 1.0 {
            trace!("polar night at {self:?} on {day} (cos H = {ratio})");
            return Err(SolarError::PolarNight);
        }
        Ok(acos(ratio))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn assert_close(got: f64, expected: f64) {
        assert!(
            (got - expected).abs() <= TOLERANCE,
            "expected `{expected}`; got `{got}`"
        );
    }

    #[test]
    fn mean_solar_noon_reference_values() {
        let noon =
            Location::from_degrees(0.0, 0.0, 0.0).mean_solar_noon(AstroDay::new(2_453_954.0));
        assert_close(noon.value(), 2_409.000800);

        let noon = Location::from_degrees(51.5, -0.12462, 0.0)
            .mean_solar_noon(AstroDay::new(2_464_546.0));
        assert_close(noon.value(), 13_001.000454);
    }

    #[test]
    fn solar_mean_anomaly_reference_values() {
        let day = AstroDay::new(23_437_892.0);
        let m = Location::from_degrees(0.0, 0.0, 0.0).solar_mean_anomaly(day);
        assert_close(m.value(), 347.009266);
        let m = Location::from_degrees(32.0, -120.0, 0.0).solar_mean_anomaly(day);
        assert_close(m.value(), 346.680732);
    }

    #[test]
    fn solar_mean_anomaly_is_wrapped_before_epoch() {
        let m = Location::from_degrees(0.0, 0.0, 0.0).solar_mean_anomaly(AstroDay::new(0.0));
        assert!((0.0..360.0).contains(&m.value()));
        assert_close(m.value(), 74.091456);
    }

    #[test]
    fn equation_of_the_centre_reference_values() {
        let c = Location::from_degrees(0.0, 0.0, 0.0)
            .equation_of_the_centre(AstroDay::new(23_437_892.0));
        assert_close(c.value(), 0.005126);
        let c = Location::from_degrees(-43.1415, 112.23626, 0.0)
            .equation_of_the_centre(AstroDay::new(2_454_192.0));
        assert_close(c.value(), -1.464470);
    }

    #[test]
    fn ecliptic_longitude_reference_values() {
        let l = Location::from_degrees(34.2, 11.2, 0.0)
            .ecliptic_longitude(AstroDay::new(22_131_859.0));
        assert_close(l.value(), 41.662002);

        let l = Location::from_degrees(0.0, 0.0, 0.0).ecliptic_longitude(AstroDay::new(0.0));
        assert!((0.0..360.0).contains(&l.value()));
    }

    #[test]
    fn solar_transit_before_1999_uses_wrapped_anomaly() {
        let here = Location::from_degrees(45.0, 10.0, 0.0);
        let day = AstroDay::new(2_433_283.0);
        assert!(357.5291 + 0.98560028 * here.mean_solar_noon(day).value() < 0.0);
        assert_close(here.solar_transit(day).value(), 2_433_283.030572);
    }

    #[test]
    fn solar_transit_reference_values() {
        let t = Location::from_degrees(0.0, 0.0, 0.0).solar_transit(AstroDay::new(12_345_678.0));
        assert_close(t.value(), 12_345_677.995510);
        let t = Location::from_degrees(34.219, 11.462, 0.0)
            .solar_transit(AstroDay::new(2_454_449.0));
        assert_close(t.value(), 2_454_449.034946);
    }

    #[test]
    fn solar_declination_reference_values() {
        let d = Location::from_degrees(0.0, 0.0, 0.0)
            .solar_declination(AstroDay::new(12_345_678.0));
        assert_close(d.value(), -23.117070);
        let d = Location::from_degrees(-134.219, 11.462, 0.0)
            .solar_declination(AstroDay::new(2_454_449.0));
        assert_close(d.value(), -23.135386);
    }

    #[test]
    fn declination_never_exceeds_tilt() {
        let here = Location::from_degrees(48.0, 2.0, 0.0);
        let mut day = AstroDay::new(2_460_310.0);
        for _ in 0..366 {
            assert!(here.solar_declination(day).value().abs() <= AXIAL_TILT.value() + 1e-9);
            day = day.succ();
        }
    }

    #[test]
    fn hour_angle_regular_day() {
        let h = Location::from_degrees(51.5, -0.12, 0.0)
            .hour_angle(AstroDay::new(2_460_482.0))
            .expect("London has a sunset in June");
        assert!(h.value() > 90.0 && h.value() < 180.0, "got {}", h.value());
    }

    #[test]
    fn hour_angle_grows_with_altitude() {
        let day = AstroDay::new(2_500_000.5);
        let low = Location::from_degrees(45.0, 10.0, 0.0).hour_angle(day).unwrap();
        let high = Location::from_degrees(45.0, 10.0, 1000.0).hour_angle(day).unwrap();
        assert!(high > low);
    }

    #[test]
    fn hour_angle_polar_extremes() {
        let june_solstice = AstroDay::new(2_460_482.0);
        let december_solstice = AstroDay::new(2_460_666.0);
        let north_pole = Location::from_degrees(90.0, 0.0, 0.0);
        let south_pole = Location::from_degrees(-90.0, 0.0, 0.0);

        assert_eq!(north_pole.hour_angle(june_solstice), Err(SolarError::PolarDay));
        assert_eq!(south_pole.hour_angle(june_solstice), Err(SolarError::PolarNight));
        assert_eq!(north_pole.hour_angle(december_solstice), Err(SolarError::PolarNight));
        assert_eq!(south_pole.hour_angle(december_solstice), Err(SolarError::PolarDay));
    }

    #[test]
    fn hour_angle_arctic_circle() {
        let tromso_ish = Location::from_degrees(70.0, 19.0, 0.0);
        assert_eq!(
            tromso_ish.hour_angle(AstroDay::new(2_460_482.0)),
            Err(SolarError::PolarDay)
        );
        assert_eq!(
            tromso_ish.hour_angle(AstroDay::new(2_460_666.0)),
            Err(SolarError::PolarNight)
        );
    }

    #[test]
    fn hour_angle_of_nan_input_is_undefined() {
        let nowhere = Location::from_degrees(f64::NAN, 0.0, 0.0);
        assert_eq!(
            nowhere.hour_angle(AstroDay::new(2_460_482.0)),
            Err(SolarError::Undefined)
        );
    }

    #[test]
    fn out_of_range_coordinates_still_compute() {
        let here = Location::from_degrees(134.0, 400.0, 0.0);
        assert!(here.validate().is_err());
        let h = here
            .hour_angle(AstroDay::new(2_460_482.0))
            .expect("ratio inside [-1, 1]");
        assert!((h.value() - 61.582).abs() < 1e-3, "got {}", h.value());
    }
}
