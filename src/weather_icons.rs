use std::fmt;

/// WMO weather interpretation codes as used by Open-Meteo
/// https://open-meteo.com/en/docs#weathervariables
///
/// Every integer maps to a variant, codes outside the table become `Unknown`. A day the
/// API sent no code for is `Unknown(None)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WeatherCode {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    RimeFog,
    LightDrizzle,
    ModerateDrizzle,
    DenseDrizzle,
    SlightRain,
    ModerateRain,
    HeavyRain,
    SlightSnow,
    ModerateSnow,
    HeavySnow,
    SnowGrains,
    RainShowers,
    ModerateRainShowers,
    ViolentRainShowers,
    Thunderstorm,
    ThunderstormWithHail,
    SevereThunderstormWithHail,
    Unknown(Option<i32>),
}

impl From<i32> for WeatherCode {
    fn from(code: i32) -> Self {
        match code {
            0 => WeatherCode::ClearSky,
            1 => WeatherCode::MainlyClear,
            2 => WeatherCode::PartlyCloudy,
            3 => WeatherCode::Overcast,
            45 => WeatherCode::Fog,
            48 => WeatherCode::RimeFog,
            51 => WeatherCode::LightDrizzle,
            53 => WeatherCode::ModerateDrizzle,
            55 => WeatherCode::DenseDrizzle,
            61 => WeatherCode::SlightRain,
            63 => WeatherCode::ModerateRain,
            65 => WeatherCode::HeavyRain,
            71 => WeatherCode::SlightSnow,
            73 => WeatherCode::ModerateSnow,
            75 => WeatherCode::HeavySnow,
            77 => WeatherCode::SnowGrains,
            80 => WeatherCode::RainShowers,
            81 => WeatherCode::ModerateRainShowers,
            82 => WeatherCode::ViolentRainShowers,
            95 => WeatherCode::Thunderstorm,
            96 => WeatherCode::ThunderstormWithHail,
            99 => WeatherCode::SevereThunderstormWithHail,
            other => WeatherCode::Unknown(Some(other)),
        }
    }
}

impl From<Option<i32>> for WeatherCode {
    fn from(code: Option<i32>) -> Self {
        code.map_or(WeatherCode::Unknown(None), WeatherCode::from)
    }
}

impl WeatherCode {
    /// Display label, an icon followed by a description
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCode::ClearSky => "☀️ Clear sky",
            WeatherCode::MainlyClear => "🌤️ Mainly clear",
            WeatherCode::PartlyCloudy => "⛅ Partly cloudy",
            WeatherCode::Overcast => "☁️ Overcast",
            WeatherCode::Fog => "🌫️ Fog",
            WeatherCode::RimeFog => "🌫️ Depositing rime fog",
            WeatherCode::LightDrizzle => "🌦️ Light drizzle",
            WeatherCode::ModerateDrizzle => "🌦️ Moderate drizzle",
            WeatherCode::DenseDrizzle => "🌧️ Dense drizzle",
            WeatherCode::SlightRain => "🌦️ Slight rain",
            WeatherCode::ModerateRain => "🌧️ Moderate rain",
            WeatherCode::HeavyRain => "🌧️ Heavy rain",
            WeatherCode::SlightSnow => "🌨️ Slight snow",
            WeatherCode::ModerateSnow => "🌨️ Moderate snow",
            WeatherCode::HeavySnow => "❄️ Heavy snow",
            WeatherCode::SnowGrains => "🌨️ Snow grains",
            WeatherCode::RainShowers => "🌦️ Rain showers",
            WeatherCode::ModerateRainShowers => "🌧️ Rain showers",
            WeatherCode::ViolentRainShowers => "⛈️ Violent rain showers",
            WeatherCode::Thunderstorm => "⛈️ Thunderstorm",
            WeatherCode::ThunderstormWithHail => "⛈️ Thunderstorm with hail",
            WeatherCode::SevereThunderstormWithHail => "⛈️ Severe thunderstorm with hail",
            WeatherCode::Unknown(_) => "❓ Unknown",
        }
    }

    /// Text symbol for the chart
    ///
    /// The emoji in `label` are mostly missing from regular text fonts such as DejaVu Sans,
    /// so the chart uses symbols from the Miscellaneous Symbols block instead.
    pub fn glyph(&self) -> &'static str {
        match self {
            WeatherCode::ClearSky | WeatherCode::MainlyClear => "☀",
            WeatherCode::PartlyCloudy => "☼",
            WeatherCode::Overcast => "☁",
            WeatherCode::Fog | WeatherCode::RimeFog => "≡",
            WeatherCode::LightDrizzle
            | WeatherCode::ModerateDrizzle
            | WeatherCode::DenseDrizzle
            | WeatherCode::SlightRain
            | WeatherCode::ModerateRain
            | WeatherCode::HeavyRain
            | WeatherCode::RainShowers
            | WeatherCode::ModerateRainShowers
            | WeatherCode::ViolentRainShowers => "☂",
            WeatherCode::SlightSnow
            | WeatherCode::ModerateSnow
            | WeatherCode::HeavySnow
            | WeatherCode::SnowGrains => "❄",
            WeatherCode::Thunderstorm
            | WeatherCode::ThunderstormWithHail
            | WeatherCode::SevereThunderstormWithHail => "⚡",
            WeatherCode::Unknown(_) => "?",
        }
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_have_labels() {
        assert_eq!(WeatherCode::from(0).label(), "☀️ Clear sky");
        assert_eq!(WeatherCode::from(61).label(), "🌦️ Slight rain");
        assert_eq!(WeatherCode::from(99).label(), "⛈️ Severe thunderstorm with hail");
    }

    #[test]
    fn unknown_codes_fall_back() {
        for code in [-1, 4, 56, 100, i32::MAX] {
            let wc = WeatherCode::from(code);
            assert_eq!(wc, WeatherCode::Unknown(Some(code)));
            assert_eq!(wc.label(), "❓ Unknown");
            assert_eq!(wc.glyph(), "?");
        }
    }

    #[test]
    fn missing_code_is_unknown() {
        assert_eq!(WeatherCode::from(None), WeatherCode::Unknown(None));
        assert_eq!(WeatherCode::from(None).label(), "❓ Unknown");
        assert_eq!(WeatherCode::from(Some(61)), WeatherCode::SlightRain);
    }

    #[test]
    fn chart_glyphs_avoid_emoji() {
        assert_eq!(WeatherCode::ClearSky.glyph(), "☀");
        assert_eq!(WeatherCode::Overcast.glyph(), "☁");
        assert_eq!(WeatherCode::Fog.glyph(), "≡");
        assert_eq!(WeatherCode::SlightRain.glyph(), "☂");
        assert_eq!(WeatherCode::SnowGrains.glyph(), "❄");
        assert_eq!(WeatherCode::Thunderstorm.glyph(), "⚡");

        // one symbol each, outside the emoji ranges starting at U+1F300
        for code in (0..=99).map(WeatherCode::from) {
            let glyph = code.glyph();
            assert_eq!(glyph.chars().count(), 1, "{:?}", code);
            assert!(glyph.chars().all(|c| (c as u32) < 0x1F300 && c != '\u{fe0f}'), "{:?}", code);
        }
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(WeatherCode::Fog.to_string(), "🌫️ Fog");
    }
}
