pub mod errors;
pub mod models;

use std::time::Duration;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use crate::manager_nominatim::models::Coordinates;
use crate::manager_openmeteo::errors::OpenMeteoError;
use crate::manager_openmeteo::models::{DailyForecast, FullForecast};

const FULL_DAILY_PARAMS: &str = "temperature_2m_max,temperature_2m_min,weathercode,sunrise,sunset";
const CHART_DAILY_PARAMS: &str = "temperature_2m_max,temperature_2m_min,weathercode";
const HOURLY_PARAMS: &str = "relativehumidity_2m";

/// Struct for fetching current weather and forecasts from Open-Meteo
pub struct OpenMeteo {
    client: Client,
    url: String,
}

impl OpenMeteo {
    /// Returns an OpenMeteo struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'url' - url to the forecast endpoint
    /// * 'timeout_secs' - timeout for each request
    pub fn new(url: &str, timeout_secs: u64) -> Result<OpenMeteo, OpenMeteoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Retrieves current weather together with a daily forecast and hourly humidity.
    /// Times are reported in the local timezone of the location.
    ///
    /// # Arguments
    ///
    /// * 'coordinates' - location to get a forecast for
    pub async fn full_forecast(&self, coordinates: &Coordinates) -> Result<FullForecast, OpenMeteoError> {
        self.fetch(&[
            ("latitude", coordinates.lat.to_string()),
            ("longitude", coordinates.lon.to_string()),
            ("current_weather", "true".to_string()),
            ("daily", FULL_DAILY_PARAMS.to_string()),
            ("hourly", HOURLY_PARAMS.to_string()),
            ("timezone", "auto".to_string()),
        ]).await
    }

    /// Retrieves the daily temperature range and weather code only, which is all the chart needs
    ///
    /// # Arguments
    ///
    /// * 'coordinates' - location to get a forecast for
    pub async fn daily_forecast(&self, coordinates: &Coordinates) -> Result<DailyForecast, OpenMeteoError> {
        self.fetch(&[
            ("latitude", coordinates.lat.to_string()),
            ("longitude", coordinates.lon.to_string()),
            ("daily", CHART_DAILY_PARAMS.to_string()),
            ("timezone", "auto".to_string()),
        ]).await
    }

    async fn fetch<T: DeserializeOwned>(&self, params: &[(&str, String)]) -> Result<T, OpenMeteoError> {
        debug!("requesting forecast from {} with {:?}", self.url, params);

        let req = self.client
            .get(&self.url)
            .query(params)
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(OpenMeteoError::Transport(format!("Error while fetching forecast from Open-Meteo: {}", status)));
        }

        let json = req.text().await?;

        Ok(serde_json::from_str(&json)?)
    }
}
