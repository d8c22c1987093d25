use serde::Serialize;
use crate::icons::ERROR_ICON;

/// Style class picked up by the host bar stylesheet
#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TempClass {
    Hot,
    Warm,
    Normal,
    Cool,
    Cold,
    Error,
}

impl TempClass {
    /// Classifies a rounded temperature into its style class
    ///
    /// The buckets partition the whole axis: above 30 is hot, above 20
    /// warm, below 0 cold, below 10 cool, everything else normal.
    ///
    /// # Arguments
    ///
    /// * 'temp' - the rounded current temperature
    pub fn from_temp(temp: i64) -> TempClass {
        if temp > 30 {
            TempClass::Hot
        } else if temp > 20 {
            TempClass::Warm
        } else if temp < 0 {
            TempClass::Cold
        } else if temp < 10 {
            TempClass::Cool
        } else {
            TempClass::Normal
        }
    }
}

/// The one record printed to stdout for the host bar
///
/// The error record carries no percentage, hence the skipped Option
#[derive(Serialize)]
pub struct OutputRecord {
    pub text: String,
    pub tooltip: String,
    pub class: TempClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u8>,
}

impl OutputRecord {
    /// Returns the fallback record emitted when the forecast fetch failed
    ///
    /// # Arguments
    ///
    /// * 'tooltip' - failure description shown on hover
    pub fn fetch_error(tooltip: String) -> OutputRecord {
        OutputRecord {
            text: ERROR_ICON.to_string(),
            tooltip,
            class: TempClass::Error,
            percentage: None,
        }
    }
}

/// Returns the auxiliary progress value for the bar, clamped to 0-100
///
/// # Arguments
///
/// * 'temp' - the rounded current temperature
pub fn display_percentage(temp: i64) -> u8 {
    (temp + 30).clamp(0, 100) as u8
}
