use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i32,
}

/// Parallel per day sequences, aligned by index
///
/// Open-Meteo sends `null` for days it has no value for, those stay `None` here.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DailySeries {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_min")]
    pub min_temps: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_max")]
    pub max_temps: Vec<Option<f64>>,
    #[serde(rename = "weathercode")]
    pub codes: Vec<Option<i32>>,
    #[serde(default)]
    pub sunrise: Vec<String>,
    #[serde(default)]
    pub sunset: Vec<String>,
}

/// Parallel per hour sequences, aligned by index
#[derive(Deserialize, Debug, Clone, Default)]
pub struct HourlySeries {
    pub time: Vec<String>,
    #[serde(rename = "relativehumidity_2m")]
    pub humidity: Vec<Option<u8>>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FullForecast {
    pub current_weather: CurrentWeather,
    pub daily: DailySeries,
    pub hourly: HourlySeries,
}

#[derive(Deserialize, Debug, Clone)]
pub struct DailyForecast {
    pub daily: DailySeries,
}
