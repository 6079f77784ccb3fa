use chrono::{Days, NaiveDate, NaiveDateTime};
use rand::Rng;

use super::SensorDataPoint;

const TEMPERATURE_BASE: f64 = 25.0;
const TEMPERATURE_SPREAD: f64 = 5.0;
const MOISTURE_BASE: f64 = 60.0;
const MOISTURE_SPREAD: f64 = 20.0;
const PH_BASE: f64 = 6.5;
const PH_SPREAD: f64 = 1.0;

fn random_values<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64, f64) {
    (
        TEMPERATURE_BASE + rng.gen::<f64>() * TEMPERATURE_SPREAD,
        MOISTURE_BASE + rng.gen::<f64>() * MOISTURE_SPREAD,
        PH_BASE + rng.gen::<f64>() * PH_SPREAD,
    )
}

/// Live point labelled with the time of day.
pub fn generate_point<R: Rng + ?Sized>(now: NaiveDateTime, rng: &mut R) -> SensorDataPoint {
    let (temperature, moisture, ph) = random_values(rng);
    SensorDataPoint {
        date: now.format("%H:%M:%S").to_string(),
        temperature,
        moisture,
        ph,
    }
}

/// One point per day for the `days` days ending at `today`, oldest first.
pub fn generate_history<R: Rng + ?Sized>(
    days: usize,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<SensorDataPoint> {
    (0..days)
        .rev()
        .map(|offset| {
            let date = today
                .checked_sub_days(Days::new(offset as u64))
                .unwrap_or(NaiveDate::MIN);
            let (temperature, moisture, ph) = random_values(rng);
            SensorDataPoint {
                date: date.format("%d %b %Y").to_string(),
                temperature,
                moisture,
                ph,
            }
        })
        .collect()
}
