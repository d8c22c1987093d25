use chrono::NaiveDate;
use crate::formatting::{format_date, format_temp};
use crate::config::Units;
use crate::icons::icon_for;
use crate::localization::Labels;
use crate::models::openweather::ForecastSample;

/// Per day forecast summary derived from one day bucket
pub struct DaySummary {
    pub label: String,
    pub min_temp: f64,
    pub max_temp: f64,
    pub icon: String,
    pub description: String,
}

impl DaySummary {
    /// Renders the summary as one tooltip line body
    ///
    /// # Arguments
    ///
    /// * 'units' - unit system for the temperature range
    pub fn to_line(&self, units: Units) -> String {
        format!(
            "{}: {}/{} {} {}",
            self.label,
            format_temp(self.min_temp, units),
            format_temp(self.max_temp, units),
            icon_for(&self.icon),
            self.description
        )
    }
}

/// Groups forecast samples into calendar day buckets
///
/// The grouping key is the date part of the sample timestamp text and the
/// buckets keep the first occurrence order of the source sequence.
///
/// # Arguments
///
/// * 'samples' - the time ordered forecast samples
pub fn group_by_day(samples: &[ForecastSample]) -> Vec<(NaiveDate, Vec<&ForecastSample>)> {
    let mut buckets: Vec<(NaiveDate, Vec<&ForecastSample>)> = Vec::new();

    for sample in samples {
        let date = sample.local_time.date();
        match buckets.iter_mut().find(|(d, _)| *d == date) {
            Some((_, bucket)) => bucket.push(sample),
            None => buckets.push((date, vec![sample])),
        }
    }

    buckets
}

/// Summarizes one day bucket into min/max temperatures, the dominant
/// condition glyph code and the dominant description
///
/// # Arguments
///
/// * 'bucket' - the samples of one calendar day, never empty
/// * 'today' - the host local date of the run
/// * 'labels' - label table of the selected locale
pub fn summarize(bucket: &[&ForecastSample], today: NaiveDate, labels: &Labels) -> DaySummary {
    let mut min_temp = f64::INFINITY;
    let mut max_temp = f64::NEG_INFINITY;
    for sample in bucket {
        min_temp = min_temp.min(sample.main.temp);
        max_temp = max_temp.max(sample.main.temp);
    }

    let icon = dominant(bucket.iter().map(|s| s.weather[0].icon.as_str()));
    let description = dominant(bucket.iter().map(|s| s.weather[0].description.as_str()));

    DaySummary {
        label: format_date(bucket[0].local_time.date(), today, labels),
        min_temp,
        max_temp,
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

/// Returns the most frequent value of a sequence
///
/// The tally keeps insertion order and the best value is updated during
/// the scan on a strictly greater count only, so ties resolve to the
/// first value that reached the maximum, independent of any hash order.
fn dominant<'a>(values: impl Iterator<Item = &'a str>) -> &'a str {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    let mut best = "";
    let mut best_count = 0;

    for value in values {
        let count = match tally.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => {
                *count += 1;
                *count
            }
            None => {
                tally.push((value, 1));
                1
            }
        };
        if count > best_count {
            best = value;
            best_count = count;
        }
    }

    best
}
