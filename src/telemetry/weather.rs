use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// °C, one decimal.
    pub temperature: f64,
    /// %, whole number.
    pub humidity: u32,
    pub condition: WeatherCondition,
    /// km/h, whole number.
    pub wind_speed: u32,
}

impl WeatherCondition {
    fn from_humidity(humidity: f64, roll: f64) -> Self {
        if humidity > 80.0 && roll > 0.3 {
            WeatherCondition::Rainy
        } else if humidity > 70.0 && roll > 0.6 {
            WeatherCondition::Cloudy
        } else {
            WeatherCondition::Sunny
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Cerah",
            WeatherCondition::Cloudy => "Berawan",
            WeatherCondition::Rainy => "Hujan",
        }
    }
}

pub fn generate_weather<R: Rng + ?Sized>(rng: &mut R) -> WeatherSnapshot {
    let temperature = 25.0 + rng.gen::<f64>() * 5.0;
    let humidity = 60.0 + rng.gen::<f64>() * 20.0;
    let wind_speed = 10.0 + rng.gen::<f64>() * 10.0;
    let condition = WeatherCondition::from_humidity(humidity, rng.gen::<f64>());

    WeatherSnapshot {
        temperature: (temperature * 10.0).round() / 10.0,
        humidity: humidity.round() as u32,
        condition,
        wind_speed: wind_speed.round() as u32,
    }
}
