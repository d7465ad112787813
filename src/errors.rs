use std::fmt;
use std::fmt::Formatter;
use log4rs::config::runtime::ConfigErrors;
use log::SetLoggerError;
use crate::manager_chart::errors::ChartError;
use crate::manager_nominatim::errors::NominatimError;
use crate::manager_openmeteo::errors::OpenMeteoError;

/// Error representing an unrecoverable error that will halt the application
///
#[derive(Debug)]
pub struct UnrecoverableError(pub String);
impl fmt::Display for UnrecoverableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "UnrecoverableError: {}", self.0)
    }
}
impl From<std::io::Error> for UnrecoverableError {
    fn from(e: std::io::Error) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<ConfigError> for UnrecoverableError {
    fn from(e: ConfigError) -> Self {
        UnrecoverableError(e.to_string())
    }
}
impl From<NominatimError> for UnrecoverableError {
    fn from(e: NominatimError) -> Self { UnrecoverableError(e.to_string()) }
}
impl From<OpenMeteoError> for UnrecoverableError {
    fn from(e: OpenMeteoError) -> Self { UnrecoverableError(e.to_string()) }
}

/// Errors while managing configuration
///
#[derive(Debug)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigError: {}", self.0)
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self { ConfigError(e.to_string()) }
}
impl From<SetLoggerError> for ConfigError {
    fn from(e: SetLoggerError) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<ConfigErrors> for ConfigError {
    fn from(e: ConfigErrors) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self { ConfigError(e.to_string()) }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(e.to_string())
    }
}

/// Errors while assembling forecast data, i.e. misaligned or malformed series
///
#[derive(Debug)]
pub struct ForecastError(pub String);
impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result { write!(f, "ForecastError: {}", self.0) }
}

/// Failure of one of the steps behind a request, one variant per step
///
#[derive(Debug)]
pub enum RequestError {
    Geocoding(NominatimError),
    Weather(OpenMeteoError),
    Forecast(ForecastError),
    Chart(ChartError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Geocoding(e) => write!(f, "RequestError::Geocoding: {}", e),
            RequestError::Weather(e) => write!(f, "RequestError::Weather: {}", e),
            RequestError::Forecast(e) => write!(f, "RequestError::Forecast: {}", e),
            RequestError::Chart(e) => write!(f, "RequestError::Chart: {}", e),
        }
    }
}
impl From<NominatimError> for RequestError {
    fn from(e: NominatimError) -> Self { RequestError::Geocoding(e) }
}
impl From<OpenMeteoError> for RequestError {
    fn from(e: OpenMeteoError) -> Self { RequestError::Weather(e) }
}
impl From<ForecastError> for RequestError {
    fn from(e: ForecastError) -> Self { RequestError::Forecast(e) }
}
impl From<ChartError> for RequestError {
    fn from(e: ChartError) -> Self { RequestError::Chart(e) }
}
