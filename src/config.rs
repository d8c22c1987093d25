use crate::localization::Locale;

/// Unit system sent to the forecast API, also selects the displayed
/// temperature suffix
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Units {
    Metric,
    Imperial,
    Standard,
}

impl Units {
    /// Returns the unit system identifier as the forecast API expects it
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Standard => "standard",
        }
    }

    /// Returns the temperature suffix matching the unit system
    pub fn temp_suffix(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
            Units::Standard => "K",
        }
    }
}

/// Configuration items for one widget run
pub struct Config {
    pub endpoint: String,
    pub api_key: String,
    pub lat: f64,
    pub long: f64,
    pub units: Units,
    pub lang: Locale,
}

impl Config {
    /// Returns the built-in configuration
    ///
    /// The widget has no runtime configuration surface, all items are
    /// fixed here in source
    pub fn builtin() -> Config {
        Config {
            endpoint: "https://api.openweathermap.org/data/2.5/forecast".to_string(),
            api_key: "you_key".to_string(),
            lat: 47.2364,
            long: 39.7139,
            units: Units::Metric,
            lang: Locale::Ru,
        }
    }
}
