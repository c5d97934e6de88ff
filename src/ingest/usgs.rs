//! USGS NWIS Instantaneous Values (IV) API client.
//!
//! Handles URL construction and JSON response parsing for the USGS Water
//! Services IV endpoint:
//!   https://waterservices.usgs.gov/nwis/iv/
//!
//! The IV service returns WaterML rendered as JSON: a flat list of
//! `timeSeries` entries, one per (site, parameter) pair. See `fixtures.rs`
//! for annotated examples of the response structure.
//!
//! Entries are parsed independently. One malformed entry is recorded in
//! `GaugeReport::skipped` and the rest of the response is still used.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::geo::{self, check_coordinate};
use crate::model::{
    BoundingBox, DistanceUnit, Gauge, GaugeReport, NoaaError, ParseError, Site, SiteCollection,
    SkippedEntry, TimeValue,
};

// ---------------------------------------------------------------------------
// Serde structures for one WaterML JSON timeSeries entry
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct TimeSeries {
    #[serde(rename = "sourceInfo")]
    source_info: SourceInfo,
    variable: Variable,
    values: Vec<Values>,
}

#[derive(Deserialize)]
struct SourceInfo {
    #[serde(rename = "siteName")]
    site_name: String,
    #[serde(rename = "siteCode")]
    site_code: Vec<CodeValue>,
    #[serde(rename = "geoLocation")]
    geo_location: GeoLocation,
}

#[derive(Deserialize)]
struct CodeValue {
    value: String,
}

#[derive(Deserialize)]
struct GeoLocation {
    #[serde(rename = "geogLocation")]
    geog_location: GeogLocation,
}

#[derive(Deserialize)]
struct GeogLocation {
    latitude: Coordinate,
    longitude: Coordinate,
}

/// Coordinates are numbers in current responses; older ones used strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn to_f64(&self) -> Option<f64> {
        match self {
            Coordinate::Number(n) => Some(*n),
            Coordinate::Text(s) => s.trim().parse().ok(),
        }
    }
}

#[derive(Deserialize)]
struct Variable {
    #[serde(rename = "variableCode")]
    variable_code: Vec<CodeValue>,
    #[serde(rename = "variableName", default)]
    variable_name: Option<String>,
    #[serde(rename = "variableDescription", default)]
    variable_description: Option<String>,
    unit: Unit,
}

#[derive(Deserialize)]
struct Unit {
    #[serde(rename = "unitCode")]
    unit_code: String,
}

#[derive(Deserialize)]
struct Values {
    value: Vec<ValueEntry>,
}

#[derive(Deserialize)]
struct ValueEntry {
    value: String, // USGS returns as string!
    #[serde(rename = "dateTime", default)]
    date_time: Option<String>,
}

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

pub const IV_BASE_URL: &str = "https://waterservices.usgs.gov/nwis/iv/";

/// Every query asks for the last day of readings as JSON.
const PERIOD: &str = "P1D";

fn iv_prefix(base_url: &str) -> String {
    format!("{}?period={}&format=json", base_url, PERIOD)
}

/// Builds an IV URL for an explicit list of site codes.
///
/// # Example
/// ```
/// use noaa_river::ingest::usgs::{build_sites_url, IV_BASE_URL};
///
/// let url = build_sites_url(IV_BASE_URL, &["01646500", "01643700"]).unwrap();
/// assert!(url.ends_with("sites=01646500,01643700"));
/// ```
///
/// # Errors
/// `NoaaError::InvalidArgument` if `site_ids` is empty or contains a blank id.
pub fn build_sites_url<S: AsRef<str>>(base_url: &str, site_ids: &[S]) -> Result<String, NoaaError> {
    if site_ids.is_empty() {
        return Err(NoaaError::InvalidArgument(
            "at least one site id is required".to_string(),
        ));
    }
    let mut encoded = Vec::with_capacity(site_ids.len());
    for id in site_ids {
        let id = id.as_ref().trim();
        if id.is_empty() {
            return Err(NoaaError::InvalidArgument("blank site id".to_string()));
        }
        encoded.push(urlencoding::encode(id));
    }
    Ok(format!("{}&sites={}", iv_prefix(base_url), encoded.join(",")))
}

/// Builds an IV URL for every site inside `bbox`.
///
/// # Errors
/// `NoaaError::InvalidArgument` if any edge is outside [-180, 180].
pub fn build_bbox_url(base_url: &str, bbox: &BoundingBox) -> Result<String, NoaaError> {
    let west = check_coordinate("west", bbox.west)?;
    let south = check_coordinate("south", bbox.south)?;
    let east = check_coordinate("east", bbox.east)?;
    let north = check_coordinate("north", bbox.north)?;
    Ok(format!(
        "{}&bBox={:.6},{:.6},{:.6},{:.6}",
        iv_prefix(base_url),
        west,
        south,
        east,
        north
    ))
}

/// Builds an IV URL for the box `distance` around a point. See
/// `geo::bounding_box` for how the box is derived.
pub fn build_radius_url(
    base_url: &str,
    latitude: f64,
    longitude: f64,
    distance: f64,
    unit: DistanceUnit,
) -> Result<String, NoaaError> {
    let bbox = geo::bounding_box(latitude, longitude, distance, unit)?;
    build_bbox_url(base_url, &bbox)
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses a USGS IV API JSON response body into sites, grouping every
/// `timeSeries` entry under its site code.
///
/// A site is created from the first entry that names it; later entries
/// for the same site only add gauges. Entries that are structurally
/// unusable are skipped and listed in the returned report.
///
/// # Errors
/// - `ParseError::Json` : the body is not JSON.
/// - `ParseError::MissingSection` : `value` or `value.timeSeries` is absent
///   or not the expected shape.
pub fn parse_iv_response(json: &str) -> Result<GaugeReport, ParseError> {
    let root: Value = serde_json::from_str(json)
        .map_err(|e| ParseError::Json(format!("JSON deserialization failed: {}", e)))?;

    let wrapper = root
        .get("value")
        .ok_or_else(|| ParseError::MissingSection("value".to_string()))?;
    let entries = wrapper
        .get("timeSeries")
        .and_then(Value::as_array)
        .ok_or_else(|| ParseError::MissingSection("timeSeries".to_string()))?;

    let mut report = GaugeReport::default();

    for (index, entry) in entries.iter().enumerate() {
        match parse_time_series(index, entry) {
            Ok((site, gauge)) => {
                let site_code = site.site_code.clone();
                report
                    .sites
                    .get_or_insert_with(&site_code, || site)
                    .add_gauge(gauge);
            }
            Err(error) => {
                let site_code = entry
                    .pointer("/sourceInfo/siteCode/0/value")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                warn!(index, site = site_code.as_deref().unwrap_or("?"), %error, "skipping timeSeries entry");
                report.skipped.push(SkippedEntry {
                    index,
                    site_code,
                    error,
                });
            }
        }
    }

    debug!(
        sites = report.sites.len(),
        skipped = report.skipped.len(),
        "parsed IV response"
    );
    Ok(report)
}

/// Turns one `timeSeries` entry into a site header (no gauges yet) and
/// the gauge it carries.
fn parse_time_series(index: usize, entry: &Value) -> Result<(Site, Gauge), ParseError> {
    let malformed = |reason: String| ParseError::MalformedEntry { index, reason };

    let series = TimeSeries::deserialize(entry).map_err(|e| malformed(e.to_string()))?;

    let site_code = series
        .source_info
        .site_code
        .first()
        .ok_or_else(|| ParseError::MissingField("sourceInfo.siteCode".to_string()))?
        .value
        .clone();

    let geog = &series.source_info.geo_location.geog_location;
    let latitude = geog
        .latitude
        .to_f64()
        .ok_or_else(|| malformed("latitude is not a number".to_string()))?;
    let longitude = geog
        .longitude
        .to_f64()
        .ok_or_else(|| malformed("longitude is not a number".to_string()))?;

    let code = series
        .variable
        .variable_code
        .first()
        .ok_or_else(|| ParseError::MissingField("variable.variableCode".to_string()))?
        .value
        .clone();

    let values = series
        .values
        .into_iter()
        .next()
        .ok_or_else(|| ParseError::MissingField("values".to_string()))?;

    let description = series
        .variable
        .variable_description
        .or(series.variable.variable_name)
        .unwrap_or_default();

    let gauge = Gauge {
        code,
        unit_name: series.variable.unit.unit_code,
        description,
        readings: values
            .value
            .into_iter()
            .map(|v| TimeValue {
                value: v.value,
                date_time: v.date_time,
            })
            .collect(),
    };

    let site = Site {
        site_code,
        site_name: series.source_info.site_name,
        latitude,
        longitude,
        gauges: Default::default(),
    };

    Ok((site, gauge))
}

/// Convenience for callers that only want the sites.
pub fn parse_sites(json: &str) -> Result<SiteCollection, ParseError> {
    parse_iv_response(json).map(|report| report.sites)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
