use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Full response of the 5 day / 3 hour forecast endpoint
///
/// The sample list is ordered by increasing timestamp, which is part of
/// the API contract and not re-checked locally
#[derive(Deserialize)]
pub struct ForecastResponse {
    pub city: City,
    pub list: Vec<ForecastSample>,
}

#[derive(Deserialize)]
pub struct City {
    pub name: String,
    pub sunrise: i64,
    pub sunset: i64,
}

/// One 3 hour resolution forecast point
#[derive(Deserialize)]
pub struct ForecastSample {
    #[serde(rename = "dt_txt", deserialize_with = "sample_time")]
    pub local_time: NaiveDateTime,
    pub main: MainReadings,
    pub wind: Wind,
    pub clouds: Clouds,
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub pop: f64,
}

#[derive(Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub pressure: i64,
}

#[derive(Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Deserialize)]
pub struct Clouds {
    pub all: i64,
}

#[derive(Deserialize)]
pub struct Condition {
    pub icon: String,
    pub description: String,
}

/// Decodes the "YYYY-MM-DD HH:MM:SS" sample timestamp text
fn sample_time<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let txt = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&txt, "%Y-%m-%d %H:%M:%S").map_err(serde::de::Error::custom)
}
