use chrono::NaiveDate;
use crate::config::Units;
use crate::daily::{group_by_day, summarize};
use crate::formatting::{format_temp, format_time};
use crate::icons::icon_for;
use crate::localization::Labels;
use crate::models::openweather::ForecastResponse;

/// Number of samples shown in the hourly strip, 8 periods of 3 hours
const HOURLY_SAMPLES: usize = 8;

/// Number of day summaries shown in the daily strip
const DAILY_SUMMARIES: usize = 5;

/// Precipitation probability in percent above which the hourly line gets
/// an umbrella suffix
const PRECIP_THRESHOLD: f64 = 20.0;

/// Builds the hover tooltip for the host bar
///
/// The tooltip composes, in fixed order, a city header, the current
/// conditions, sunrise/sunset, the next 24 hours and up to five day
/// summaries. Markup spans are the small Pango vocabulary the host
/// renderer understands and are treated as opaque text.
///
/// # Arguments
///
/// * 'forecast' - the full forecast response, at least one sample
/// * 'labels' - label table of the selected locale
/// * 'units' - unit system for temperature suffixes
/// * 'today' - the host local date of the run
pub fn build_tooltip(
    forecast: &ForecastResponse,
    labels: &Labels,
    units: Units,
    today: NaiveDate,
) -> String {
    let current = &forecast.list[0];
    let condition = &current.weather[0];
    let mut tooltip = String::new();

    tooltip.push_str(&format!(
        "<span size=\"x-large\" weight=\"bold\">{}</span>\n",
        forecast.city.name
    ));
    tooltip.push_str(&format!(
        "<span size=\"large\">{} {}</span>\n\n",
        capitalize(&condition.description),
        icon_for(&condition.icon)
    ));

    tooltip.push_str(&format!("<span weight=\"bold\">{}:</span>\n", labels.now_header));
    tooltip.push_str(&format!(
        "  • {}: <span weight=\"bold\">{}</span>\n",
        labels.temp_now,
        format_temp(current.main.temp, units)
    ));
    tooltip.push_str(&format!(
        "  • {}: {}\n",
        labels.feels_like,
        format_temp(current.main.feels_like, units)
    ));
    tooltip.push_str(&format!(
        "  • {}: {:.1} {}\n",
        labels.wind, current.wind.speed, labels.m_s
    ));
    tooltip.push_str(&format!(
        "  • {}: {}{}\n",
        labels.humidity, current.main.humidity, labels.percent
    ));
    tooltip.push_str(&format!(
        "  • {}: {} {}\n",
        labels.pressure, current.main.pressure, labels.hpa
    ));
    tooltip.push_str(&format!(
        "  • {}: {}{}\n\n",
        labels.clouds, current.clouds.all, labels.percent
    ));

    tooltip.push_str(&format!("<span weight=\"bold\">{}:</span>\n", labels.sun_header));
    tooltip.push_str(&format!(
        "  • {}: {}\n",
        labels.sunrise,
        format_time(forecast.city.sunrise)
    ));
    tooltip.push_str(&format!(
        "  • {}: {}\n\n",
        labels.sunset,
        format_time(forecast.city.sunset)
    ));

    tooltip.push_str(&format!("<span weight=\"bold\">{}:</span>\n", labels.hourly_header));
    for sample in forecast.list.iter().take(HOURLY_SAMPLES) {
        let pop = sample.pop * 100.0;
        let precip = if pop > PRECIP_THRESHOLD {
            format!(" ☔{:.0}{}", pop, labels.percent)
        } else {
            String::new()
        };
        tooltip.push_str(&format!(
            "  • {}: {} {}{}\n",
            sample.local_time.format("%H:%M"),
            format_temp(sample.main.temp, units),
            icon_for(&sample.weather[0].icon),
            precip
        ));
    }

    tooltip.push_str(&format!("\n<span weight=\"bold\">{}:</span>\n", labels.daily_header));
    for (_, bucket) in group_by_day(&forecast.list).iter().take(DAILY_SUMMARIES) {
        let summary = summarize(bucket, today, labels);
        tooltip.push_str(&format!("  • {}\n", summary.to_line(units)));
    }

    tooltip.trim().to_string()
}

/// Uppercases the first character of a description
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
