//! Configuration loader - parses noaa_river.toml
//!
//! Keeps feed endpoints, the HTTP timeout and the CLI's default query
//! targets out of the code. Every section is optional; a missing file
//! means built-in defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::ingest::{nws, usgs};

/// Environment variable naming the config file. May come from `.env`.
pub const CONFIG_ENV_VAR: &str = "NOAA_RIVER_CONFIG";

/// Looked up in the working directory when nothing else names a file.
pub const DEFAULT_CONFIG_PATH: &str = "noaa_river.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Root of noaa_river.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub weather: FeedConfig,
    pub water: FeedConfig,
    pub defaults: QueryDefaults,
}

impl AppConfig {
    pub fn weather_base_url(&self) -> &str {
        self.weather.base_url.as_deref().unwrap_or(nws::FORECAST_BASE_URL)
    }

    pub fn water_base_url(&self) -> &str {
        self.water.base_url.as_deref().unwrap_or(usgs::IV_BASE_URL)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout_secs: 90,
            user_agent: format!("noaa_river/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Per-feed overrides. `base_url` unset means the public endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    pub base_url: Option<String>,
}

/// What the CLI queries when arguments are omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QueryDefaults {
    pub weather: WeatherDefaults,
    pub gauges: GaugeDefaults,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeatherDefaults {
    pub latitude: f64,
    /// West-positive; the forecast URL negates it.
    pub longitude: f64,
}

impl Default for WeatherDefaults {
    fn default() -> Self {
        WeatherDefaults {
            latitude: 38.95,
            longitude: 77.343,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaugeDefaults {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
    pub kilometers: bool,
    pub sites: Vec<String>,
}

impl Default for GaugeDefaults {
    fn default() -> Self {
        GaugeDefaults {
            latitude: 38.96,
            longitude: -77.45,
            radius: 15.0,
            kilometers: false,
            sites: vec!["01646500".to_string(), "01643700".to_string()],
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Loads and parses the config file at `path`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Finds the config to use, in order: `explicit`, `$NOAA_RIVER_CONFIG`
/// (after loading `.env`), `./noaa_river.toml`, built-in defaults.
///
/// A file that is named but unreadable is an error; only the implicit
/// `./noaa_river.toml` is allowed to be absent.
pub fn resolve_config(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    dotenv::dotenv().ok();
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return load_config(Path::new(&path));
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        return load_config(default_path);
    }

    Ok(AppConfig::default())
}
