//! Core data types for the weather and river gauge client.
//!
//! This module defines the shared records produced by the parsers in
//! `ingest` and held by the facades in `client`, plus the error taxonomy
//! every other module returns. It does no I/O.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::geo;

// ---------------------------------------------------------------------------
// Geographic types
// ---------------------------------------------------------------------------

/// Unit used for radius queries and great-circle distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    pub fn from_kilometers(kilometers: bool) -> Self {
        if kilometers {
            DistanceUnit::Kilometers
        } else {
            DistanceUnit::Miles
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Miles => write!(f, "mi"),
            DistanceUnit::Kilometers => write!(f, "km"),
        }
    }
}

/// A rectangular lat/lon region, in degrees.
///
/// `west < east` and `south < north` for every box produced by
/// `geo::bounding_box`. Boxes crossing the antimeridian are not handled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Midpoint of the box as (latitude, longitude).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// A validated point, in degrees.
///
/// Both coordinates are accepted anywhere in [-180, 180]. Latitude is
/// not narrowed to [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, NoaaError> {
        Ok(GeoPoint {
            latitude: geo::check_coordinate("latitude", latitude)?,
            longitude: geo::check_coordinate("longitude", longitude)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Weather types
// ---------------------------------------------------------------------------

/// The "current observations" block of a forecast document.
///
/// Temperatures are kept as the feed's text; either may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub summary: String,
    pub apparent_temperature: Option<String>,
    pub dew_point: Option<String>,
}

/// One worded forecast entry, e.g. "Tonight" / "Mostly clear, with a low around 45."
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPeriod {
    pub period_name: String,
    pub text: String,
    /// Text of the matching `<start-valid-time>`, if it had any.
    pub start_time: Option<String>,
}

/// A fully parsed forecast document. Never partially filled.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    /// Feed order, not re-sorted.
    pub forecast: Vec<ForecastPeriod>,
}

// ---------------------------------------------------------------------------
// Gauge types
// ---------------------------------------------------------------------------

/// One entry in a gauge's time-value series.
///
/// `value` stays text: the feed uses sentinels such as "-999999" or
/// "Ice" that are not meaningful numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeValue {
    pub value: String,
    pub date_time: Option<String>,
}

/// The newest reading of a gauge together with the one before it.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeReading {
    pub value: String,
    pub previous_value: Option<String>,
    pub timestamp: Option<String>,
}

/// One measured variable (stage height, discharge, ...) at a site.
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    /// USGS parameter code, e.g. "00065".
    pub code: String,
    /// Unit code as reported, e.g. "ft" or "ft3/s".
    pub unit_name: String,
    pub description: String,
    /// Oldest first, as delivered.
    pub readings: Vec<TimeValue>,
}

impl Gauge {
    fn nth_from_end(&self, n: usize) -> Result<&TimeValue, NoaaError> {
        let available = self.readings.len();
        if available < n {
            return Err(NoaaError::InsufficientData {
                needed: n,
                available,
            });
        }
        Ok(&self.readings[available - n])
    }

    /// Newest value in the series.
    pub fn last(&self) -> Result<&str, NoaaError> {
        self.nth_from_end(1).map(|tv| tv.value.as_str())
    }

    /// Second-newest value in the series.
    pub fn previous(&self) -> Result<&str, NoaaError> {
        self.nth_from_end(2).map(|tv| tv.value.as_str())
    }

    /// Timestamp text of the newest value.
    pub fn last_time(&self) -> Result<&str, NoaaError> {
        self.nth_from_end(1)?
            .date_time
            .as_deref()
            .ok_or_else(|| ParseError::MissingField("dateTime".to_string()).into())
    }

    /// Timestamp of the newest value, parsed as RFC 3339.
    pub fn last_datetime(&self) -> Result<DateTime<FixedOffset>, NoaaError> {
        let raw = self.last_time()?;
        DateTime::parse_from_rfc3339(raw).map_err(|e| {
            ParseError::MalformedEntry {
                index: self.readings.len() - 1,
                reason: format!("bad dateTime '{}': {}", raw, e),
            }
            .into()
        })
    }

    pub fn latest_reading(&self) -> Result<GaugeReading, NoaaError> {
        let last = self.nth_from_end(1)?;
        Ok(GaugeReading {
            value: last.value.clone(),
            previous_value: self.previous().ok().map(str::to_string),
            timestamp: last.date_time.clone(),
        })
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:<8} {:<40}", self.code, self.unit_name, self.description)?;
        if let Ok(last) = self.last() {
            write!(f, " at {} {}", self.last_time().unwrap_or("?"), last)?;
        }
        if let Ok(prev) = self.previous() {
            write!(f, " prev {}", prev)?;
        }
        Ok(())
    }
}

/// A physical station and every gauge it reported in one response.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub site_code: String,
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub gauges: BTreeMap<String, Gauge>,
}

impl Site {
    /// Adds or replaces the gauge stored under its code.
    pub fn add_gauge(&mut self, gauge: Gauge) {
        self.gauges.insert(gauge.code.clone(), gauge);
    }

    pub fn gauge(&self, code: &str) -> Option<&Gauge> {
        self.gauges.get(code)
    }

    /// Great-circle distance from (`latitude`, `longitude`) to this site.
    pub fn distance_from(&self, latitude: f64, longitude: f64, unit: DistanceUnit) -> f64 {
        geo::great_circle_distance(latitude, longitude, self.latitude, self.longitude, unit)
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Site {} Name  {} Latitude {:.6} Longitude {:.6}.",
            self.site_code, self.site_name, self.latitude, self.longitude
        )?;
        writeln!(f, "Gauges:")?;
        for gauge in self.gauges.values() {
            writeln!(f, "{}", gauge)?;
        }
        Ok(())
    }
}

/// Sites keyed by site code, iterated in response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteCollection {
    sites: Vec<Site>,
    index: HashMap<String, usize>,
}

impl SiteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, site_code: &str) -> Option<&Site> {
        self.index.get(site_code).map(|&i| &self.sites[i])
    }

    pub fn contains(&self, site_code: &str) -> bool {
        self.index.contains_key(site_code)
    }

    /// Returns the site stored under `site_code`, creating it with `make`
    /// if this is the first time the code is seen.
    pub fn get_or_insert_with<F>(&mut self, site_code: &str, make: F) -> &mut Site
    where
        F: FnOnce() -> Site,
    {
        let i = match self.index.get(site_code) {
            Some(&i) => i,
            None => {
                self.sites.push(make());
                let i = self.sites.len() - 1;
                self.index.insert(site_code.to_string(), i);
                i
            }
        };
        &mut self.sites[i]
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Site> {
        self.sites.iter()
    }

    pub fn site_codes(&self) -> Vec<&str> {
        self.sites.iter().map(|s| s.site_code.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a SiteCollection {
    type Item = &'a Site;
    type IntoIter = std::slice::Iter<'a, Site>;

    fn into_iter(self) -> Self::IntoIter {
        self.sites.iter()
    }
}

/// A `timeSeries` entry the gauge parser could not use.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    /// Position in the response's `timeSeries` list.
    pub index: usize,
    /// Site code, when the entry got far enough to have one.
    pub site_code: Option<String>,
    pub error: ParseError,
}

impl fmt::Display for SkippedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.site_code {
            Some(code) => write!(f, "entry {} (site {}): {}", self.index, code, self.error),
            None => write!(f, "entry {}: {}", self.index, self.error),
        }
    }
}

/// Result of one gauge query: the usable sites plus what was dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GaugeReport {
    pub sites: SiteCollection,
    pub skipped: Vec<SkippedEntry>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// A document arrived but did not have the expected structure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Not well-formed XML.
    #[error("malformed XML: {0}")]
    Xml(String),
    /// Not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Json(String),
    /// A required element or block is absent.
    #[error("missing section: {0}")]
    MissingSection(String),
    /// A required attribute or value is absent.
    #[error("missing field: {0}")]
    MissingField(String),
    /// One list entry could not be used.
    #[error("malformed entry {index}: {reason}")]
    MalformedEntry { index: usize, reason: String },
}

/// Errors returned by every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NoaaError {
    /// Bad caller input; nothing was fetched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Transport failure talking to a feed.
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// Non-2xx response from a feed.
    #[error("HTTP error: {0}")]
    HttpStatus(u16),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    /// A derived gauge view needs more readings than the series holds.
    #[error("insufficient data: need {needed} readings, have {available}")]
    InsufficientData { needed: usize, available: usize },
}

impl NoaaError {
    /// True for both flavours of fetch failure.
    pub fn is_fetch(&self) -> bool {
        matches!(self, NoaaError::Fetch(_) | NoaaError::HttpStatus(_))
    }
}
