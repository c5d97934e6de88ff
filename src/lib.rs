//! noaa_river: weather forecasts and river gauge readings for a location.
//!
//! # Module structure
//!
//! ```text
//! noaa_river
//! ├── model    : shared records (WeatherReport, Site, Gauge, …) and NoaaError
//! ├── geo      : bounding box from point + radius, great-circle distance
//! ├── config   : noaa_river.toml loader
//! ├── logging  : tracing subscriber setup for the binary
//! ├── client   : WeatherClient / GaugeClient facades (URL → fetch → parse)
//! └── ingest
//!     ├── http : Fetch trait + blocking reqwest implementation
//!     ├── nws  : NWS DWML forecast feed: URL construction + XML parsing
//!     ├── usgs : USGS NWIS IV feed: URL construction + JSON parsing
//!     └── fixtures (test only) : representative feed payloads
//! ```

pub mod client;
pub mod config;
pub mod geo;
pub mod ingest;
pub mod logging;
pub mod model;

pub use client::{GaugeClient, WeatherClient};
pub use model::{DistanceUnit, NoaaError, ParseError};
