/// Glyph shown in the bar when the forecast could not be fetched
pub const ERROR_ICON: &str = "󰤮";

/// Translates a weather condition code to its Nerd Font glyph
///
/// Condition codes follow the forecast API convention, a two digit
/// category plus a day/night suffix. Unknown codes map to "?".
///
/// # Arguments
///
/// * 'code' - the condition code, e.g. "01d"
pub fn icon_for(code: &str) -> &'static str {
    match code {
        "01d" => "󰖙",
        "01n" => "󰖔",
        "02d" => "󰖕",
        "02n" => "󰼱",
        "03d" | "03n" => "󰖐",
        "04d" | "04n" => "󰖑",
        "09d" | "09n" => "󰼳",
        "10d" | "10n" => "󰖗",
        "11d" | "11n" => "󰖓",
        "13d" | "13n" => "󰖘",
        "50d" | "50n" => "󰖑",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_glyphs() {
        assert_eq!(icon_for("01d"), "󰖙");
        assert_eq!(icon_for("10n"), "󰖗");
        assert_ne!(icon_for("13d"), "?");
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(icon_for("99x"), "?");
        assert_eq!(icon_for(""), "?");
    }
}
