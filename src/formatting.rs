use chrono::{DateTime, Datelike, Local, NaiveDate};
use crate::config::Units;
use crate::localization::Labels;

/// Formats an epoch timestamp as host local zero padded hour and minute
///
/// # Arguments
///
/// * 'timestamp' - epoch seconds, e.g. a sunrise or sunset time
pub fn format_time(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.with_timezone(&Local).format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Formats a calendar date as a relative day name
///
/// Dates matching today or tomorrow use their localized labels, any other
/// date renders as "DD.MM" plus the weekday abbreviation. Tomorrow is the
/// proper calendar successor, so month and year rollovers are handled.
///
/// # Arguments
///
/// * 'date' - the date to format
/// * 'today' - the host local date of the run
/// * 'labels' - label table of the selected locale
pub fn format_date(date: NaiveDate, today: NaiveDate, labels: &Labels) -> String {
    if date == today {
        labels.today.to_string()
    } else if Some(date) == today.succ_opt() {
        labels.tomorrow.to_string()
    } else {
        let weekday = labels.weekdays[date.weekday().num_days_from_monday() as usize];
        format!("{:02}.{:02} {}", date.day(), date.month(), weekday)
    }
}

/// Formats a temperature as a signed rounded integer with a unit suffix
///
/// Rounding is half away from zero. Zero always renders with a plus sign
/// so the output carries an explicit sign for every input.
///
/// # Arguments
///
/// * 'temp' - the temperature to format
/// * 'units' - unit system that selects the suffix
pub fn format_temp(temp: f64, units: Units) -> String {
    format!("{:+}{}", temp.round() as i64, units.temp_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::Locale;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn temp_always_carries_a_sign() {
        assert_eq!(format_temp(3.4, Units::Metric), "+3°C");
        assert_eq!(format_temp(23.4, Units::Metric), "+23°C");
        assert_eq!(format_temp(-12.3, Units::Metric), "-12°C");
        assert_eq!(format_temp(0.0, Units::Metric), "+0°C");
        assert_eq!(format_temp(-0.2, Units::Metric), "+0°C");
    }

    #[test]
    fn temp_rounds_half_away_from_zero() {
        assert_eq!(format_temp(2.5, Units::Metric), "+3°C");
        assert_eq!(format_temp(-2.5, Units::Metric), "-3°C");
    }

    #[test]
    fn temp_suffix_follows_units() {
        assert_eq!(format_temp(70.6, Units::Imperial), "+71°F");
        assert_eq!(format_temp(287.2, Units::Standard), "+287K");
    }

    #[test]
    fn today_and_tomorrow_use_labels() {
        let labels = Locale::Ru.labels();
        let today = date(2024, 7, 1);

        assert_eq!(format_date(today, today, labels), "Сегодня");
        assert_eq!(format_date(date(2024, 7, 2), today, labels), "Завтра");
    }

    #[test]
    fn tomorrow_rolls_over_month_ends() {
        let labels = Locale::Ru.labels();

        assert_eq!(format_date(date(2024, 5, 1), date(2024, 4, 30), labels), "Завтра");
        assert_eq!(format_date(date(2025, 1, 1), date(2024, 12, 31), labels), "Завтра");
    }

    #[test]
    fn other_dates_use_day_month_weekday() {
        let labels = Locale::Ru.labels();
        let today = date(2024, 7, 1);

        // 2024-07-05 is a Friday
        assert_eq!(format_date(date(2024, 7, 5), today, labels), "05.07 Пт");
        // 2024-07-07 is a Sunday
        assert_eq!(format_date(date(2024, 7, 7), today, labels), "07.07 Вс");
    }

    #[test]
    fn time_is_zero_padded_hour_minute() {
        let formatted = format_time(1719800000);
        assert_eq!(formatted.len(), 5);
        assert_eq!(&formatted[2..3], ":");
    }
}
