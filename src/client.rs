//! Client facades: build the URL, fetch it, parse it, keep the result.
//!
//! Each facade holds the result of its last successful query and exposes
//! read-only accessors over it. A failed query (bad input, fetch error,
//! parse error) leaves the previous result in place.
//!
//! Facades are not synchronized. Use one per thread, or wrap one in a
//! `Mutex` yourself.

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::ingest::http::{Fetch, HttpFetcher};
use crate::ingest::{nws, usgs};
use crate::model::{
    BoundingBox, CurrentConditions, DistanceUnit, ForecastPeriod, GaugeReport, NoaaError, Site,
    SiteCollection, SkippedEntry, WeatherReport,
};

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Point forecasts from the NWS DWML feed.
pub struct WeatherClient<F = HttpFetcher> {
    fetcher: F,
    base_url: String,
    last: Option<WeatherReport>,
}

impl WeatherClient<HttpFetcher> {
    pub fn from_config(config: &AppConfig) -> Result<Self, NoaaError> {
        Ok(Self::with_base_url(
            HttpFetcher::new(&config.http)?,
            config.weather_base_url(),
        ))
    }
}

impl<F: Fetch> WeatherClient<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_base_url(fetcher, nws::FORECAST_BASE_URL)
    }

    pub fn with_base_url(fetcher: F, base_url: impl Into<String>) -> Self {
        WeatherClient {
            fetcher,
            base_url: base_url.into(),
            last: None,
        }
    }

    /// Fetches and parses the forecast for a point. `longitude` is
    /// west-positive (see `nws::build_forecast_url`).
    pub fn query_by_lat_lon(&mut self, latitude: f64, longitude: f64) -> Result<&WeatherReport, NoaaError> {
        info!(latitude, longitude, "querying forecast");
        let url = nws::build_forecast_url(&self.base_url, latitude, longitude)?;
        debug!(%url, "forecast URL");

        let body = self.fetcher.fetch(&url)?;
        let report = nws::parse_forecast_response(&body).inspect_err(|e| {
            warn!(error = %e, "forecast document rejected");
        })?;

        debug!(periods = report.forecast.len(), "forecast parsed");
        Ok(self.last.insert(report))
    }

    /// The last successfully parsed report, if any.
    pub fn report(&self) -> Option<&WeatherReport> {
        self.last.as_ref()
    }

    pub fn current(&self) -> Option<&CurrentConditions> {
        self.last.as_ref().map(|r| &r.current)
    }

    pub fn forecast(&self) -> Option<&[ForecastPeriod]> {
        self.last.as_ref().map(|r| r.forecast.as_slice())
    }

    /// Apparent temperature, in Fahrenheit as the feed reports it.
    pub fn temperature(&self) -> Option<&str> {
        self.current()?.apparent_temperature.as_deref()
    }

    pub fn dew_point(&self) -> Option<&str> {
        self.current()?.dew_point.as_deref()
    }

    pub fn summary(&self) -> Option<&str> {
        self.current().map(|c| c.summary.as_str())
    }
}

// ---------------------------------------------------------------------------
// River gauges
// ---------------------------------------------------------------------------

/// Instantaneous gauge values from USGS NWIS.
pub struct GaugeClient<F = HttpFetcher> {
    fetcher: F,
    base_url: String,
    last: Option<GaugeReport>,
}

impl GaugeClient<HttpFetcher> {
    pub fn from_config(config: &AppConfig) -> Result<Self, NoaaError> {
        Ok(Self::with_base_url(
            HttpFetcher::new(&config.http)?,
            config.water_base_url(),
        ))
    }
}

impl<F: Fetch> GaugeClient<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_base_url(fetcher, usgs::IV_BASE_URL)
    }

    pub fn with_base_url(fetcher: F, base_url: impl Into<String>) -> Self {
        GaugeClient {
            fetcher,
            base_url: base_url.into(),
            last: None,
        }
    }

    pub fn query_by_site_id(&mut self, site_id: &str) -> Result<&GaugeReport, NoaaError> {
        self.query_by_site_ids(&[site_id])
    }

    pub fn query_by_site_ids<S: AsRef<str>>(&mut self, site_ids: &[S]) -> Result<&GaugeReport, NoaaError> {
        let url = usgs::build_sites_url(&self.base_url, site_ids)?;
        self.query_nwis(&url)
    }

    pub fn query_by_bbox(&mut self, bbox: &BoundingBox) -> Result<&GaugeReport, NoaaError> {
        let url = usgs::build_bbox_url(&self.base_url, bbox)?;
        self.query_nwis(&url)
    }

    /// Every site within the box `distance` around the point.
    pub fn query_by_radius(
        &mut self,
        latitude: f64,
        longitude: f64,
        distance: f64,
        unit: DistanceUnit,
    ) -> Result<&GaugeReport, NoaaError> {
        let url = usgs::build_radius_url(&self.base_url, latitude, longitude, distance, unit)?;
        self.query_nwis(&url)
    }

    fn query_nwis(&mut self, url: &str) -> Result<&GaugeReport, NoaaError> {
        info!(url, "querying NWIS");
        let body = self.fetcher.fetch(url)?;
        let report = usgs::parse_iv_response(&body)?;

        if !report.skipped.is_empty() {
            warn!(
                skipped = report.skipped.len(),
                sites = report.sites.len(),
                "some timeSeries entries were unusable"
            );
        }
        Ok(self.last.insert(report))
    }

    pub fn report(&self) -> Option<&GaugeReport> {
        self.last.as_ref()
    }

    pub fn sites(&self) -> Option<&SiteCollection> {
        self.last.as_ref().map(|r| &r.sites)
    }

    pub fn site(&self, site_code: &str) -> Option<&Site> {
        self.sites()?.get(site_code)
    }

    /// Entries dropped from the last response.
    pub fn skipped(&self) -> Option<&[SkippedEntry]> {
        self.last.as_ref().map(|r| r.skipped.as_slice())
    }
}
