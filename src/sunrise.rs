// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sunrise and sunset instants.
//!
//! Sunrise and sunset sit symmetrically around the solar transit, offset by
//! the hour angle expressed as a fraction of a day (`H / 360`).

use qtty::{Days, Degrees};

use super::day::AstroDay;
use super::error::SolarError;
use super::instant::Time;
use super::location::Location;
use super::scales::JD;

/// The Sun's behaviour on one day at one location.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SunEvents {
    /// The Sun rises and sets.
    RegularDay {
        sunrise: Time<JD>,
        transit: Time<JD>,
        sunset: Time<JD>,
    },
    /// The Sun stays above the horizon all day.
    AllDay { transit: Time<JD> },
    /// The Sun stays below the horizon all day.
    AllNight { transit: Time<JD> },
}

impl SunEvents {
    /// Solar transit; defined on every kind of day.
    pub fn transit(&self) -> Time<JD> {
        match *self {
            Self::RegularDay { transit, .. }
            | Self::AllDay { transit }
            | Self::AllNight { transit } => transit,
        }
    }

    /// Sunrise, or `None` when the Sun neither rises nor sets.
    pub fn sunrise(&self) -> Option<Time<JD>> {
        match *self {
            Self::RegularDay { sunrise, .. } => Some(sunrise),
            _ => None,
        }
    }

    /// Sunset, or `None` when the Sun neither rises nor sets.
    pub fn sunset(&self) -> Option<Time<JD>> {
        match *self {
            Self::RegularDay { sunset, .. } => Some(sunset),
            _ => None,
        }
    }

    /// Time the Sun spends above the horizon.
    pub fn day_length(&self) -> Days {
        match *self {
            Self::RegularDay {
                sunrise, sunset, ..
            } => sunset - sunrise,
            Self::AllDay { .. } => Days::new(1.0),
            Self::AllNight { .. } => Days::new(0.0),
        }
    }
}

/// Hour angle as a fraction of a day.
#[inline]
fn arc_in_days(hour_angle: Degrees) -> Days {
    Days::new(hour_angle.value() / 360.0)
}

impl Location {
    /// Instant of sunrise on `day`.
    pub fn sunrise_time(&self, day: AstroDay) -> Result<Time<JD>, SolarError> {
        let hour_angle = self.hour_angle(day)?;
        Ok(self.solar_transit(day) - arc_in_days(hour_angle))
    }

    /// Instant of sunset on `day`.
    pub fn sunset_time(&self, day: AstroDay) -> Result<Time<JD>, SolarError> {
        let hour_angle = self.hour_angle(day)?;
        Ok(self.solar_transit(day) + arc_in_days(hour_angle))
    }

    /// Sunrise, transit and sunset together, with polar days and nights
    /// folded into the result.
    ///
    /// Only [`SolarError::Undefined`] is returned as an error.
    pub fn sun_events(&self, day: AstroDay) -> Result<SunEvents, SolarError> {
        let transit = self.solar_transit(day);
        match self.hour_angle(day) {
            Ok(hour_angle) => {
                let arc = arc_in_days(hour_angle);
                Ok(SunEvents::RegularDay {
                    sunrise: transit - arc,
                    transit,
                    sunset: transit + arc,
                })
            }
            Err(SolarError::PolarDay) => Ok(SunEvents::AllDay { transit }),
            Err(SolarError::PolarNight) => Ok(SunEvents::AllNight { transit }),
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn sunrise_sunset_reference_values() {
        let here = Location::from_degrees(45.0, 10.0, 0.0);
        let day = AstroDay::new(2_500_000.5);

        let sunrise = here.sunrise_time(day).expect("regular day");
        let sunset = here.sunset_time(day).expect("regular day");
        assert!((sunrise.value() - 2_500_000.251258).abs() < TOLERANCE, "{sunrise}");
        assert!((sunset.value() - 2_500_000.809059).abs() < TOLERANCE, "{sunset}");
    }

    #[test]
    fn transit_is_between_sunrise_and_sunset() {
        let london = Location::from_degrees(51.5, -0.12, 0.0);
        let mut day = AstroDay::new(2_460_310.0);
        for _ in 0..366 {
            let sunrise = london.sunrise_time(day).unwrap();
            let transit = london.solar_transit(day);
            let sunset = london.sunset_time(day).unwrap();
            assert!(sunrise < transit && transit < sunset, "{day}");
            day = day.succ();
        }
    }

    #[test]
    fn sunrise_and_sunset_are_symmetric_about_transit() {
        let here = Location::from_degrees(-33.9, 18.4, 10.0);
        let day = AstroDay::new(2_460_482.0);
        let transit = here.solar_transit(day);
        let before = transit - here.sunrise_time(day).unwrap();
        let after = here.sunset_time(day).unwrap() - transit;
        assert!((before - after).abs() < Days::new(1e-8));
    }

    #[test]
    fn polar_errors_propagate() {
        let north_pole = Location::from_degrees(90.0, 0.0, 0.0);
        let june_solstice = AstroDay::new(2_460_482.0);
        assert_eq!(north_pole.sunrise_time(june_solstice), Err(SolarError::PolarDay));
        assert_eq!(north_pole.sunset_time(june_solstice), Err(SolarError::PolarDay));
    }

    #[test]
    fn sun_events_regular_day() {
        let here = Location::from_degrees(45.0, 10.0, 0.0);
        let day = AstroDay::new(2_500_000.5);
        let events = here.sun_events(day).unwrap();
        assert_eq!(events.sunrise(), here.sunrise_time(day).ok());
        assert_eq!(events.sunset(), here.sunset_time(day).ok());
        assert_eq!(events.transit(), here.solar_transit(day));
        let length = events.day_length().value();
        assert!((length - (0.809059 - 0.251258)).abs() < 1e-5, "{length}");
    }

    #[test]
    fn sun_events_polar() {
        let june_solstice = AstroDay::new(2_460_482.0);
        let north = Location::from_degrees(90.0, 0.0, 0.0)
            .sun_events(june_solstice)
            .unwrap();
        let south = Location::from_degrees(-90.0, 0.0, 0.0)
            .sun_events(june_solstice)
            .unwrap();

        assert!(matches!(north, SunEvents::AllDay { .. }));
        assert!(matches!(south, SunEvents::AllNight { .. }));
        assert_eq!(north.sunrise(), None);
        assert_eq!(south.sunset(), None);
        assert_eq!(north.day_length(), Days::new(1.0));
        assert_eq!(south.day_length(), Days::new(0.0));
    }

    #[test]
    fn sun_events_undefined_is_an_error() {
        let nowhere = Location::from_degrees(f64::NAN, 0.0, 0.0);
        assert_eq!(
            nowhere.sun_events(AstroDay::new(2_460_482.0)),
            Err(SolarError::Undefined)
        );
    }
}
