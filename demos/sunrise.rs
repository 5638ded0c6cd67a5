use chrono::Utc;
use solarday::{CivilTime, JulianDate, Location, SunEvents};

fn main() {
    let today = CivilTime::from(Utc::now());
    let Some(day) = today.to_julian_date().astro_day() else {
        return;
    };

    let observers = [
        ("Greenwich", Location::from_degrees(51.4769, 0.0, 46.0)),
        ("Quito", Location::from_degrees(-0.1807, -78.4678, 2850.0)),
        ("Longyearbyen", Location::from_degrees(78.2232, 15.6267, 0.0)),
    ];

    println!("{day} ({today})");
    for (name, here) in observers {
        match here.sun_events(day) {
            Ok(SunEvents::RegularDay {
                sunrise,
                transit,
                sunset,
            }) => println!(
                "{name}: sunrise {} | noon {} | sunset {}",
                sunrise.to_civil(),
                transit.to_civil(),
                sunset.to_civil()
            ),
            Ok(SunEvents::AllDay { transit }) => {
                println!("{name}: midnight sun, noon {}", transit.to_civil())
            }
            Ok(SunEvents::AllNight { transit }) => {
                println!("{name}: polar night, noon {}", transit.to_civil())
            }
            Err(err) => println!("{name}: {err}"),
        }
    }
    println!("J2000: {}", JulianDate::J2000.to_civil());
}
