use std::process;
use chrono::{Local, NaiveDate};
use log::{error, info};
use crate::config::{Config, Units};
use crate::formatting::format_temp;
use crate::icons::icon_for;
use crate::localization::Labels;
use crate::manager_openweather::OpenWeather;
use crate::models::openweather::ForecastResponse;
use crate::models::output::{display_percentage, OutputRecord, TempClass};
use crate::tooltip::build_tooltip;

mod config;
mod daily;
mod formatting;
mod icons;
mod localization;
mod logging;
mod manager_openweather;
mod models;
mod tooltip;

fn main() {
    logging::init();

    let config = Config::builtin();
    let labels = config.lang.labels();

    let forecast = match OpenWeather::new(&config).get_forecast() {
        Ok(forecast) => forecast,
        Err(e) => {
            error!("forecast fetch failed: {}", e);
            emit(&OutputRecord::fetch_error(format!("{}: {}", labels.fetch_error, e)));
            process::exit(1);
        }
    };
    info!("forecast fetched, {} samples for {}", forecast.list.len(), forecast.city.name);

    let record = build_record(&forecast, labels, config.units, Local::now().date_naive());
    emit(&record);
}

/// Derives the bar record from a fetched forecast
///
/// The current temperature is rounded once and that value drives both
/// the style class and the progress percentage
///
/// # Arguments
///
/// * 'forecast' - the fetched forecast, at least one sample
/// * 'labels' - label table of the selected locale
/// * 'units' - unit system for temperature display
/// * 'today' - the host local date of the run
fn build_record(
    forecast: &ForecastResponse,
    labels: &Labels,
    units: Units,
    today: NaiveDate,
) -> OutputRecord {
    let current = &forecast.list[0];
    let rounded = current.main.temp.round() as i64;

    OutputRecord {
        text: format!(
            "{} {}",
            icon_for(&current.weather[0].icon),
            format_temp(current.main.temp, units)
        ),
        tooltip: build_tooltip(forecast, labels, units, today),
        class: TempClass::from_temp(rounded),
        percentage: Some(display_percentage(rounded)),
    }
}

/// Prints a record as the one stdout line the host bar reads
fn emit(record: &OutputRecord) {
    match serde_json::to_string(record) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            error!("output encoding failed: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Locale;
    use crate::models::openweather::{City, Clouds, Condition, ForecastSample, MainReadings, Wind};
    use chrono::NaiveDateTime;

    fn sample(dt_txt: &str, temp: f64, icon: &str, description: &str) -> ForecastSample {
        ForecastSample {
            local_time: NaiveDateTime::parse_from_str(dt_txt, "%Y-%m-%d %H:%M:%S").unwrap(),
            main: MainReadings { temp, feels_like: temp - 1.2, humidity: 45, pressure: 1013 },
            wind: Wind { speed: 4.2 },
            clouds: Clouds { all: 15 },
            weather: vec![Condition {
                icon: icon.to_string(),
                description: description.to_string(),
            }],
            pop: 0.0,
        }
    }

    /// 40 samples at 3 hour resolution spanning five calendar days, the
    /// first one carrying the current conditions
    fn rostov_forecast() -> ForecastResponse {
        let mut list = Vec::new();
        for day in 1..=5 {
            let (icon, description) = if day == 4 { ("10d", "дождь") } else { ("01d", "ясно") };
            for hour in (0..24).step_by(3) {
                let dt_txt = format!("2024-07-{:02} {:02}:00:00", day, hour);
                list.push(sample(&dt_txt, 18.0 + day as f64, icon, description));
            }
        }
        list[0].main.temp = 23.4;
        ForecastResponse {
            city: City {
                name: "Rostov-on-Don".to_string(),
                sunrise: 1719800000,
                sunset: 1719860000,
            },
            list,
        }
    }

    #[test]
    fn full_run_over_a_five_day_forecast() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();

        let record = build_record(&rostov_forecast(), Locale::Ru.labels(), Units::Metric, today);

        assert_eq!(record.text, "󰖙 +23°C");
        assert_eq!(record.class, TempClass::Warm);
        assert_eq!(record.percentage, Some(53));

        let hourly = &record.tooltip[record.tooltip.find("Прогноз на 24 часа:").unwrap()
            ..record.tooltip.find("По дням:").unwrap()];
        let hourly_lines: Vec<&str> = hourly.lines().filter(|l| l.starts_with("  • ")).collect();
        assert_eq!(hourly_lines.len(), 8);

        let daily = &record.tooltip[record.tooltip.find("По дням:").unwrap()..];
        let daily_lines: Vec<&str> = daily.lines().filter(|l| l.starts_with("  • ")).collect();
        assert_eq!(daily_lines.len(), 5);

        assert!(daily_lines[0].starts_with("  • Сегодня:"));
        assert!(daily_lines[1].starts_with("  • Завтра:"));
        assert!(daily_lines[3].contains("дождь"));
    }

    #[test]
    fn record_serializes_to_one_line() {
        let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let record = build_record(&rostov_forecast(), Locale::Ru.labels(), Units::Metric, today);

        let json = serde_json::to_string(&record).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("\"class\":\"warm\""));
        assert!(json.contains("\"percentage\":53"));
    }
}
