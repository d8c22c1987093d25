/// Display language of the widget
///
/// Only Russian is populated. Adding a language means adding a variant
/// and its label table, the compiler then enforces a complete mapping.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Locale {
    Ru,
}

/// Localized label strings used in the tooltip and the fallback output
pub struct Labels {
    pub temp_now: &'static str,
    pub feels_like: &'static str,
    pub wind: &'static str,
    pub humidity: &'static str,
    pub pressure: &'static str,
    pub clouds: &'static str,
    pub today: &'static str,
    pub tomorrow: &'static str,
    pub sunrise: &'static str,
    pub sunset: &'static str,
    pub m_s: &'static str,
    pub hpa: &'static str,
    pub percent: &'static str,
    pub now_header: &'static str,
    pub sun_header: &'static str,
    pub hourly_header: &'static str,
    pub daily_header: &'static str,
    pub fetch_error: &'static str,
    /// Weekday abbreviations, Monday first
    pub weekdays: [&'static str; 7],
}

static RU: Labels = Labels {
    temp_now: "Сейчас",
    feels_like: "Ощущается",
    wind: "Ветер",
    humidity: "Влажность",
    pressure: "Давление",
    clouds: "Облачность",
    today: "Сегодня",
    tomorrow: "Завтра",
    sunrise: "Восход",
    sunset: "Закат",
    m_s: "м/с",
    hpa: "гПа",
    percent: "%",
    now_header: "Сейчас",
    sun_header: "Солнце",
    hourly_header: "Прогноз на 24 часа",
    daily_header: "По дням",
    fetch_error: "Ошибка получения данных",
    weekdays: ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"],
};

impl Locale {
    /// Returns the language tag as the forecast API expects it
    pub fn as_query(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
        }
    }

    /// Returns the label table for the locale
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::Ru => &RU,
        }
    }
}
