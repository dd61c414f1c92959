//! [`Config`]-related definitions.

use std::{num::NonZeroUsize, time};

use common::Coordinates;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use derive_more::Debug;
use serde::Deserialize;
use service::view::location::SEOUL_CITY_HALL;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// REST API configuration.
    pub api: Api,

    /// Service configuration.
    pub service: Service,

    /// Map configuration.
    pub map: Map,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// REST API configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Api {
    /// Base URL of the REST API.
    #[default("http://127.0.0.1:8000/api".to_owned())]
    pub base_url: String,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,

    /// Access token of the logged in user, if any.
    #[debug(skip)]
    pub token: Option<String>,
}

impl From<&Api> for service::infra::http::Config {
    fn from(value: &Api) -> Self {
        Self {
            base_url: value.base_url.clone(),
            timeout: value.timeout,
        }
    }
}

/// Service configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Service {
    /// Maximum number of pages followed when collecting a whole listing.
    #[default(50)]
    pub max_pages: usize,

    /// Number of reports per page served by the REST API.
    #[default(NonZeroUsize::MIN.saturating_add(9))]
    pub report_page_size: NonZeroUsize,
}

impl From<Service> for service::Config {
    fn from(value: Service) -> Self {
        let Service {
            max_pages,
            report_page_size,
        } = value;
        Self {
            max_pages,
            report_page_size,
        }
    }
}

/// Map configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Map {
    /// Latitude of the default map center.
    #[default(SEOUL_CITY_HALL.lat)]
    pub latitude: f64,

    /// Longitude of the default map center.
    #[default(SEOUL_CITY_HALL.lng)]
    pub longitude: f64,

    /// Distance in degrees from the map center to the viewport edges.
    #[default(0.02)]
    pub half_span: f64,
}

impl Map {
    /// Returns the default map center.
    #[must_use]
    pub const fn center(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
