use std::fmt;
use std::time::Duration;
use ureq::{Agent, Error};
use crate::config::Config;
use crate::models::openweather::ForecastResponse;

#[derive(Debug)]
pub enum OpenWeatherError {
    Http(String),
    Document(String),
}

impl fmt::Display for OpenWeatherError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OpenWeatherError::Http(e) => write!(f, "OpenWeatherError::Http: {}", e),
            OpenWeatherError::Document(e) => write!(f, "OpenWeatherError::Document: {}", e),
        }
    }
}
impl From<Error> for OpenWeatherError {
    fn from(e: Error) -> Self {
        OpenWeatherError::Http(e.to_string())
    }
}
impl From<serde_json::Error> for OpenWeatherError {
    fn from(e: serde_json::Error) -> Self {
        OpenWeatherError::Document(e.to_string())
    }
}

/// Struct for fetching weather forecasts from OpenWeatherMap
pub struct OpenWeather {
    agent: Agent,
    endpoint: String,
    api_key: String,
    lat: f64,
    long: f64,
    units: &'static str,
    lang: &'static str,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching forecasts
    ///
    /// The request timeout is bounded to 10 seconds, a timed out request
    /// surfaces as any other transport error
    ///
    /// # Arguments
    ///
    /// * 'config' - the widget configuration
    pub fn new(config: &Config) -> OpenWeather {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(10)))
            .build();

        let agent = agent_config.into();

        Self {
            agent,
            endpoint: config.endpoint.to_string(),
            api_key: config.api_key.to_string(),
            lat: config.lat,
            long: config.long,
            units: config.units.as_query(),
            lang: config.lang.as_query(),
        }
    }

    /// Retrieves the 5 day / 3 hour forecast for the configured point
    ///
    /// Besides decoding the body this validates what the rest of the
    /// pipeline relies on: at least one sample present and every sample
    /// carrying at least one weather condition. A violation is reported
    /// as a document error, so the caller sees a single failure category.
    pub fn get_forecast(&self) -> Result<ForecastResponse, OpenWeatherError> {
        let url = format!(
            "{}?lat={}&lon={}&appid={}&units={}&lang={}",
            self.endpoint, self.lat, self.long, self.api_key, self.units, self.lang
        );

        let json = self.agent
            .get(url)
            .call()?
            .body_mut()
            .read_to_string()?;

        let forecast: ForecastResponse = serde_json::from_str(&json)?;

        if forecast.list.is_empty() {
            return Err(OpenWeatherError::Document(
                "forecast contains no samples".to_string(),
            ));
        }
        if forecast.list.iter().any(|s| s.weather.is_empty()) {
            return Err(OpenWeatherError::Document(
                "forecast sample without weather condition".to_string(),
            ));
        }

        Ok(forecast)
    }
}
