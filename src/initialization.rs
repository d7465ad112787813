use std::env;
use std::fs;
use clap::Parser;
use log::info;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::logging::setup_logger;

const DEFAULT_PORT: u16 = 5000;

/// City weather web application
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Path to a TOML configuration file, built-in defaults are used without it
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

impl Default for WebServer {
    fn default() -> Self {
        WebServer { bind_address: "0.0.0.0".to_string(), bind_port: DEFAULT_PORT }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Nominatim {
    pub url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Nominatim {
    fn default() -> Self {
        Nominatim {
            url: "https://nominatim.openstreetmap.org/search".to_string(),
            user_agent: "WeatherApp/1.0".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct OpenMeteo {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for OpenMeteo {
    fn default() -> Self {
        OpenMeteo { url: "https://api.open-meteo.com/v1/forecast".to_string(), timeout_secs: 10 }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct RecentCities {
    pub capacity: usize,
}

impl Default for RecentCities {
    fn default() -> Self {
        RecentCities { capacity: 5 }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Chart {
    pub width: u32,
    pub height: u32,
    pub font_path: String,
}

impl Default for Chart {
    fn default() -> Self {
        Chart {
            width: 900,
            height: 500,
            font_path: "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Log {
    pub level: String,
    pub log_path: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Log { level: "info".to_string(), log_path: None }
    }
}

/// Application configuration, every section falls back to its defaults when missing
///
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub web_server: WebServer,
    pub nominatim: Nominatim,
    pub open_meteo: OpenMeteo,
    pub recent_cities: RecentCities,
    pub chart: Chart,
    pub log: Log,
}

/// Returns the application configuration and sets up logging
///
/// The configuration file is given on the command line as `--config=<path>`, without it
/// the built-in defaults are used. The `PORT` environment variable overrides the
/// configured bind port.
pub fn config() -> Result<Config, ConfigError> {
    let args = Args::parse();
    let mut config = match args.config {
        Some(path) => load_config(&path)?,
        None => Config::default(),
    };

    apply_port(&mut config, env::var("PORT").ok().as_deref())?;
    validate(&config)?;

    setup_logger(&config.log)?;
    info!("configuration loaded, listening on {}:{}",
        config.web_server.bind_address, config.web_server.bind_port);

    Ok(config)
}

/// Loads configuration from the given TOML file
///
/// # Arguments
///
/// * 'path' - path to the configuration file
pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("unable to read {}: {}", path, e)))?;

    parse_config(&content)
}

/// Parses configuration from a TOML document
///
/// # Arguments
///
/// * 'content' - the TOML document
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Overrides the bind port with the value of the `PORT` environment variable
///
/// # Arguments
///
/// * 'config' - configuration to update
/// * 'port' - value of the environment variable, if set
fn apply_port(config: &mut Config, port: Option<&str>) -> Result<(), ConfigError> {
    if let Some(port) = port {
        config.web_server.bind_port = port.trim().parse::<u16>()
            .map_err(|e| ConfigError(format!("invalid PORT '{}': {}", port, e)))?;
    }

    Ok(())
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.recent_cities.capacity == 0 {
        return Err(ConfigError::from("recent_cities.capacity must be at least 1"));
    }
    if config.chart.width == 0 || config.chart.height == 0 {
        return Err(ConfigError::from("chart dimensions must be non zero"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_deployment() {
        let config = Config::default();
        assert_eq!(config.web_server.bind_address, "0.0.0.0");
        assert_eq!(config.web_server.bind_port, 5000);
        assert_eq!(config.nominatim.timeout_secs, 10);
        assert_eq!(config.open_meteo.timeout_secs, 10);
        assert_eq!(config.recent_cities.capacity, 5);
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let config = parse_config(r#"
            [web_server]
            bind_port = 8080

            [recent_cities]
            capacity = 3
        "#).unwrap();

        assert_eq!(config.web_server.bind_port, 8080);
        assert_eq!(config.web_server.bind_address, "0.0.0.0");
        assert_eq!(config.recent_cities.capacity, 3);
        assert_eq!(config.open_meteo.url, "https://api.open-meteo.com/v1/forecast");
        assert!(config.log.log_path.is_none());
    }

    #[test]
    fn sample_config_file_loads() {
        let config = load_config(concat!(env!("CARGO_MANIFEST_DIR"), "/weatherapp.toml")).unwrap();
        assert_eq!(config.nominatim.user_agent, "WeatherApp/1.0");
        assert_eq!(config.chart.width, 900);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn missing_config_file_is_config_error() {
        assert!(load_config("/nonexistent/weatherapp.toml").is_err());
    }

    #[test]
    fn malformed_document_is_config_error() {
        let err = parse_config("[web_server\nbind_port = ").unwrap_err();
        assert!(err.to_string().starts_with("ConfigError"));
    }

    #[test]
    fn port_variable_overrides_config() {
        let mut config = Config::default();
        apply_port(&mut config, Some("8081")).unwrap();
        assert_eq!(config.web_server.bind_port, 8081);

        apply_port(&mut config, None).unwrap();
        assert_eq!(config.web_server.bind_port, 8081);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let mut config = Config::default();
        assert!(apply_port(&mut config, Some("http")).is_err());
        assert!(apply_port(&mut config, Some("70000")).is_err());
    }

    #[test]
    fn config_argument_is_parsed() {
        let args = Args::try_parse_from(["weatherapp", "--config=/etc/weatherapp.toml"]).unwrap();
        assert_eq!(args.config.as_deref(), Some("/etc/weatherapp.toml"));

        let args = Args::try_parse_from(["weatherapp", "--config", "weatherapp.toml"]).unwrap();
        assert_eq!(args.config.as_deref(), Some("weatherapp.toml"));

        let args = Args::try_parse_from(["weatherapp"]).unwrap();
        assert!(args.config.is_none());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(Args::try_parse_from(["weatherapp", "--verbose"]).is_err());
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let mut config = Config::default();
        config.recent_cities.capacity = 0;
        assert!(validate(&config).is_err());
    }
}
