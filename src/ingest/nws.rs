//! NWS point forecast client (MapClick, DWML format).
//!
//! Handles URL construction and XML parsing for:
//!   https://forecast.weather.gov/MapClick.php?...&FcstType=dwml
//!
//! A DWML document carries two `<data>` blocks that matter here:
//!
//! ```text
//! dwml
//! ├── data type="forecast"
//! │   ├── time-layout*            layout-key + ordered start-valid-time[@period-name]
//! │   └── parameters
//! │       └── wordedForecast[@time-layout]   ordered <text> entries
//! └── data type="current observations"
//!     └── parameters
//!         ├── temperature[@type="apparent" | "dew point"]/value
//!         └── weather/weather-conditions[@weather-summary]
//! ```
//!
//! Forecast texts and period names line up by position within the
//! time-layout the wordedForecast points at.

use roxmltree::{Document, Node};
use tracing::warn;

use crate::model::{
    CurrentConditions, ForecastPeriod, GeoPoint, NoaaError, ParseError, WeatherReport,
};

pub const FORECAST_BASE_URL: &str = "https://forecast.weather.gov/MapClick.php";

const ROLE_FORECAST: &str = "forecast";
const ROLE_CURRENT: &str = "current observations";

// ---------------------------------------------------------------------------
// URL construction
// ---------------------------------------------------------------------------

/// Builds a DWML forecast URL for a single point.
///
/// The longitude is negated before it goes into the URL: callers pass
/// west-positive longitudes (77.343 for Virginia) and the feed wants
/// -77.343. Eastern-hemisphere longitudes come out wrong as a result.
///
/// # Errors
/// `NoaaError::InvalidArgument` if either coordinate is outside [-180, 180].
pub fn build_forecast_url(base_url: &str, latitude: f64, longitude: f64) -> Result<String, NoaaError> {
    let point = GeoPoint::new(latitude, longitude)?;
    Ok(format!(
        "{}?lat={}&lon={}&unit=0&lg=english&FcstType=dwml",
        base_url, point.latitude, -point.longitude
    ))
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

fn first_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.descendants().find(|n| n.is_element() && n.has_tag_name(tag))
}

fn elements<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .filter(move |n| n.is_element() && n.has_tag_name(tag))
}

fn missing_section(name: &str) -> ParseError {
    ParseError::MissingSection(name.to_string())
}

/// Parses a DWML document into a `WeatherReport`.
///
/// All or nothing: if either data block, the referenced time-layout, or
/// the current weather summary is missing, no report is returned.
///
/// # Errors
/// - `ParseError::Xml` : not well-formed XML.
/// - `ParseError::MissingSection` : a required block or element is absent
///   (named after the data `type` for the two top-level blocks).
/// - `ParseError::MissingField` : `wordedForecast@time-layout` is absent,
///   or the current weather summary is (including its `weather` or
///   `weather-conditions` element).
pub fn parse_forecast_response(xml: &str) -> Result<WeatherReport, ParseError> {
    let doc = Document::parse(xml).map_err(|e| ParseError::Xml(e.to_string()))?;

    let mut forecast_data = None;
    let mut current_data = None;
    for data in elements(doc.root(), "data") {
        match data.attribute("type") {
            Some(ROLE_FORECAST) if forecast_data.is_none() => forecast_data = Some(data),
            Some(ROLE_CURRENT) if current_data.is_none() => current_data = Some(data),
            _ => {}
        }
    }

    let forecast_data = forecast_data.ok_or_else(|| missing_section(ROLE_FORECAST))?;
    let current_data = current_data.ok_or_else(|| missing_section(ROLE_CURRENT))?;

    let forecast = parse_worded_forecast(&doc, forecast_data)?;
    let current = parse_current_conditions(current_data)?;

    Ok(WeatherReport { current, forecast })
}

fn parse_worded_forecast(doc: &Document, data: Node) -> Result<Vec<ForecastPeriod>, ParseError> {
    let parameters = first_element(data, "parameters").ok_or_else(|| missing_section("parameters"))?;
    let worded = first_element(parameters, "wordedForecast")
        .ok_or_else(|| missing_section("wordedForecast"))?;
    let layout_key = worded
        .attribute("time-layout")
        .ok_or_else(|| ParseError::MissingField("time-layout".to_string()))?
        .trim();

    let texts: Vec<&str> = elements(worded, "text")
        .map(|n| n.text().unwrap_or("").trim())
        .collect();

    let layout = elements(doc.root(), "time-layout")
        .find(|tl| {
            first_element(*tl, "layout-key")
                .and_then(|k| k.text())
                .map(str::trim)
                == Some(layout_key)
        })
        .ok_or_else(|| missing_section("time-layout"))?;

    let starts: Vec<(&str, Option<&str>)> = elements(layout, "start-valid-time")
        .map(|n| {
            (
                n.attribute("period-name").unwrap_or(""),
                n.text().map(str::trim).filter(|t| !t.is_empty()),
            )
        })
        .collect();

    if texts.len() != starts.len() {
        warn!(
            layout_key,
            texts = texts.len(),
            periods = starts.len(),
            "worded forecast and time-layout lengths differ; truncating"
        );
    }

    Ok(texts
        .iter()
        .zip(starts.iter())
        .map(|(text, (period_name, start_time))| ForecastPeriod {
            period_name: period_name.to_string(),
            text: text.to_string(),
            start_time: start_time.map(str::to_string),
        })
        .collect())
}

fn parse_current_conditions(data: Node) -> Result<CurrentConditions, ParseError> {
    let parameters = first_element(data, "parameters").ok_or_else(|| missing_section("parameters"))?;

    let mut apparent_temperature = None;
    let mut dew_point = None;
    for temperature in elements(parameters, "temperature") {
        let value = first_element(temperature, "value")
            .and_then(|v| v.text())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);
        match temperature.attribute("type") {
            Some("apparent") => apparent_temperature = value,
            Some("dew point") => dew_point = value,
            _ => {}
        }
    }

    let summary = first_element(parameters, "weather")
        .and_then(|weather| first_element(weather, "weather-conditions"))
        .and_then(|conditions| conditions.attribute("weather-summary"))
        .ok_or_else(|| ParseError::MissingField("weather-summary".to_string()))?;

    Ok(CurrentConditions {
        summary: summary.to_string(),
        apparent_temperature,
        dew_point,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
