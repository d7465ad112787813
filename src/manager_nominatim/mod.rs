pub mod errors;
pub mod models;

use std::time::Duration;
use log::debug;
use reqwest::Client;
use crate::manager_nominatim::errors::NominatimError;
use crate::manager_nominatim::models::{Coordinates, Place};

/// Struct for resolving city names to coordinates using the Nominatim search API
pub struct Nominatim {
    client: Client,
    url: String,
}

impl Nominatim {
    /// Returns a Nominatim struct ready for geocoding
    ///
    /// Nominatim's usage policy requires an identifying user agent on every request.
    ///
    /// # Arguments
    ///
    /// * 'url' - url to the search endpoint
    /// * 'user_agent' - user agent identifying this application
    /// * 'timeout_secs' - timeout for each request
    pub fn new(url: &str, user_agent: &str, timeout_secs: u64) -> Result<Nominatim, NominatimError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Resolves a free text query to the coordinates of the first matching place
    ///
    /// # Arguments
    ///
    /// * 'city' - the city to search for
    pub async fn coordinates(&self, city: &str) -> Result<Coordinates, NominatimError> {
        debug!("geocoding '{}' using {}", city, self.url);

        let req = self.client
            .get(&self.url)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .send().await?;

        let status = req.status();
        if !status.is_success() {
            return Err(NominatimError::Transport(format!("Error while searching Nominatim: {}", status)));
        }

        let json = req.text().await?;
        let places: Vec<Place> = serde_json::from_str(&json)?;

        match places.first() {
            Some(place) => Ok(Coordinates {
                lat: place.lat.trim().parse::<f64>()?,
                lon: place.lon.trim().parse::<f64>()?,
            }),
            None => Err(NominatimError::NotFound(city.to_string())),
        }
    }
}
