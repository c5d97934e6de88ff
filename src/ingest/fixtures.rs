//! Test fixtures: representative payloads from the NWS DWML forecast feed
//! and the USGS IV API.
//!
//! These are structurally complete but truncated to the minimum needed to
//! exercise the parsers.
//!
//! USGS IV response shape:
//!   response.value.timeSeries[]
//!     .sourceInfo.siteCode[0].value   : site number (string)
//!     .sourceInfo.siteName
//!     .sourceInfo.geoLocation.geogLocation.{latitude,longitude}
//!     .variable.variableCode[0].value : parameter code (string)
//!     .variable.variableDescription
//!     .variable.unit.unitCode
//!     .values[0].value[]
//!       .value     : the measurement as a STRING (not a number)
//!       .dateTime  : ISO 8601 with offset
//!
//! NWS DWML shape: see the module docs in `nws.rs`.

// ---------------------------------------------------------------------------
// NWS DWML (XML)
// ---------------------------------------------------------------------------

/// Full forecast for a point near Great Falls, VA. Two time-layouts in the
/// forecast block; the wordedForecast references the second (12-hourly)
/// one, so index pairing must use the layout-key, not document order.
pub(crate) fn fixture_forecast_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<dwml version="1.0" xmlns:xsd="http://www.w3.org/2001/XMLSchema" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <head>
    <product concise-name="dwmlByDay" operational-mode="developmental" srsName="WGS 1984">
      <creation-date refresh-frequency="PT1H">2024-05-01T17:58:21-04:00</creation-date>
    </product>
  </head>
  <data type="forecast">
    <location>
      <location-key>point1</location-key>
      <point latitude="38.95" longitude="-77.34"/>
    </location>
    <time-layout time-coordinate="local" summarization="24hourly">
      <layout-key>k-p24h-n3-1</layout-key>
      <start-valid-time period-name="Wednesday">2024-05-01T06:00:00-04:00</start-valid-time>
      <start-valid-time period-name="Thursday">2024-05-02T06:00:00-04:00</start-valid-time>
      <start-valid-time period-name="Friday">2024-05-03T06:00:00-04:00</start-valid-time>
    </time-layout>
    <time-layout time-coordinate="local" summarization="12hourly">
      <layout-key>k-p12h-n3-1</layout-key>
      <start-valid-time period-name="Tonight">2024-05-01T18:00:00-04:00</start-valid-time>
      <start-valid-time period-name="Thursday">2024-05-02T06:00:00-04:00</start-valid-time>
      <start-valid-time period-name="Thursday Night">2024-05-02T18:00:00-04:00</start-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <temperature type="maximum" units="Fahrenheit" time-layout="k-p24h-n3-1">
        <name>Daily Maximum Temperature</name>
        <value>78</value>
        <value>81</value>
        <value>74</value>
      </temperature>
      <wordedForecast time-layout="k-p12h-n3-1" dataSource="lwxNetcdf" wordGenerator="markMitchell">
        <name>Text Forecast</name>
        <text>Mostly clear, with a low around 52. Calm wind.</text>
        <text>Sunny, with a high near 81. Southwest wind around 6 mph.</text>
        <text>Partly cloudy, with a low around 55.</text>
      </wordedForecast>
    </parameters>
  </data>
  <data type="current observations">
    <location>
      <location-key>point1</location-key>
      <point latitude="38.95" longitude="-77.45"/>
      <area-description>Washington Dulles International Airport, VA</area-description>
    </location>
    <time-layout time-coordinate="local">
      <layout-key>k-p1h-n1-1</layout-key>
      <start-valid-time period-name="current">2024-05-01T17:52:00-04:00</start-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <temperature type="apparent" units="Fahrenheit" time-layout="k-p1h-n1-1">
        <value>71</value>
      </temperature>
      <temperature type="dew point" units="Fahrenheit" time-layout="k-p1h-n1-1">
        <value>48</value>
      </temperature>
      <humidity type="relative" time-layout="k-p1h-n1-1">
        <value>44</value>
      </humidity>
      <weather time-layout="k-p1h-n1-1">
        <name>Weather Type, Coverage, Intensity</name>
        <weather-conditions weather-summary="Fair"/>
        <weather-conditions>
          <value>
            <visibility units="statute miles">10.00</visibility>
          </value>
        </weather-conditions>
      </weather>
    </parameters>
  </data>
</dwml>"#
}

/// Station reporting conditions but no temperatures (sensor outage).
/// `<value xsi:nil>` is how the feed marks a missing value.
pub(crate) fn fixture_forecast_no_temperatures_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<dwml version="1.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <data type="forecast">
    <time-layout time-coordinate="local" summarization="12hourly">
      <layout-key>k-p12h-n1-1</layout-key>
      <start-valid-time period-name="Today">2024-05-01T06:00:00-04:00</start-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <wordedForecast time-layout="k-p12h-n1-1">
        <text>Rain. High near 60.</text>
      </wordedForecast>
    </parameters>
  </data>
  <data type="current observations">
    <parameters applicable-location="point1">
      <temperature type="apparent" units="Fahrenheit" time-layout="k-p1h-n1-1">
        <value xsi:nil="true"/>
      </temperature>
      <weather time-layout="k-p1h-n1-1">
        <weather-conditions weather-summary="Light Rain"/>
      </weather>
    </parameters>
  </data>
</dwml>"#
}

/// Three worded forecast texts but only two start-valid-time entries in
/// the referenced layout.
pub(crate) fn fixture_forecast_mismatched_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<dwml version="1.0">
  <data type="forecast">
    <time-layout time-coordinate="local" summarization="12hourly">
      <layout-key>k-p12h-n2-1</layout-key>
      <start-valid-time period-name="Friday Night">2024-05-03T18:00:00-04:00</start-valid-time>
      <start-valid-time period-name="Saturday">2024-05-04T06:00:00-04:00</start-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <wordedForecast time-layout="k-p12h-n2-1">
        <text>Cloudy.</text>
        <text>Showers likely.</text>
        <text>Chance of showers.</text>
      </wordedForecast>
    </parameters>
  </data>
  <data type="current observations">
    <parameters applicable-location="point1">
      <temperature type="dew point" units="Fahrenheit"><value>51</value></temperature>
      <weather><weather-conditions weather-summary="Overcast"/></weather>
    </parameters>
  </data>
</dwml>"#
}

/// Forecast block present, current observations block absent (the feed
/// drops it when the nearest station is not reporting).
pub(crate) fn fixture_forecast_missing_current_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<dwml version="1.0">
  <data type="forecast">
    <time-layout time-coordinate="local" summarization="12hourly">
      <layout-key>k-p12h-n1-1</layout-key>
      <start-valid-time period-name="Tonight">2024-05-01T18:00:00-04:00</start-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <wordedForecast time-layout="k-p12h-n1-1">
        <text>Clear.</text>
      </wordedForecast>
    </parameters>
  </data>
</dwml>"#
}

/// Current observations whose weather-conditions has no summary attribute.
pub(crate) fn fixture_forecast_missing_summary_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<dwml version="1.0">
  <data type="forecast">
    <time-layout time-coordinate="local" summarization="12hourly">
      <layout-key>k-p12h-n1-1</layout-key>
      <start-valid-time period-name="Tonight">2024-05-01T18:00:00-04:00</start-valid-time>
    </time-layout>
    <parameters applicable-location="point1">
      <wordedForecast time-layout="k-p12h-n1-1">
        <text>Clear.</text>
      </wordedForecast>
    </parameters>
  </data>
  <data type="current observations">
    <parameters applicable-location="point1">
      <temperature type="apparent" units="Fahrenheit"><value>64</value></temperature>
      <weather>
        <weather-conditions>
          <value><visibility units="statute miles">10.00</visibility></value>
        </weather-conditions>
      </weather>
    </parameters>
  </data>
</dwml>"#
}

// ---------------------------------------------------------------------------
// USGS IV (JSON)
// ---------------------------------------------------------------------------

/// Little Falls (01646500) with discharge and stage as two separate
/// timeSeries entries. Both must land on the same site.
pub(crate) fn fixture_little_falls_json() -> &'static str {
    r#"{
      "name": "ns1:timeSeriesResponseType",
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "POTOMAC RIVER NEAR WASH, DC LITTLE FALLS PUMP STA",
              "siteCode": [{ "value": "01646500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 38.94977778, "longitude": -77.12763889 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "variableName": "Streamflow, ft&#179;/s",
              "variableDescription": "Discharge, cubic feet per second",
              "unit": { "unitCode": "ft3/s" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "4300", "qualifiers": ["P"], "dateTime": "2024-05-01T11:45:00.000-04:00" },
                { "value": "4270", "qualifiers": ["P"], "dateTime": "2024-05-01T12:00:00.000-04:00" }
              ],
              "qualifier": [{ "qualifierCode": "P", "qualifierDescription": "Provisional data subject to revision." }]
            }]
          },
          {
            "sourceInfo": {
              "siteName": "POTOMAC RIVER NEAR WASH, DC LITTLE FALLS PUMP STA",
              "siteCode": [{ "value": "01646500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 38.94977778, "longitude": -77.12763889 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "variableName": "Gage height, ft",
              "variableDescription": "Gage height, feet",
              "unit": { "unitCode": "ft" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "3.55", "qualifiers": ["P"], "dateTime": "2024-05-01T11:30:00.000-04:00" },
                { "value": "3.54", "qualifiers": ["P"], "dateTime": "2024-05-01T11:45:00.000-04:00" },
                { "value": "3.52", "qualifiers": ["P"], "dateTime": "2024-05-01T12:00:00.000-04:00" }
              ],
              "qualifier": []
            }]
          }
        ]
      }
    }"#
}

/// Little Falls stage + Point of Rocks (01638500) discharge. Tests
/// multi-site grouping and response-order iteration.
pub(crate) fn fixture_multi_site_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "POTOMAC RIVER NEAR WASH, DC LITTLE FALLS PUMP STA",
              "siteCode": [{ "value": "01646500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 38.94977778, "longitude": -77.12763889 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "variableDescription": "Gage height, feet",
              "unit": { "unitCode": "ft" }
            },
            "values": [{
              "value": [
                { "value": "3.52", "qualifiers": ["P"], "dateTime": "2024-05-01T12:00:00.000-04:00" }
              ]
            }]
          },
          {
            "sourceInfo": {
              "siteName": "POTOMAC RIVER AT POINT OF ROCKS, MD",
              "siteCode": [{ "value": "01638500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 39.27371111, "longitude": -77.5433 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "variableDescription": "Discharge, cubic feet per second",
              "unit": { "unitCode": "ft3/s" }
            },
            "values": [{
              "value": [
                { "value": "3950", "qualifiers": ["P"], "dateTime": "2024-05-01T11:45:00.000-04:00" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Stage series ending in the "-999999" no-data sentinel after an "Ice"
/// flag. Values must come through as text, unmodified.
pub(crate) fn fixture_sentinel_values_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "POTOMAC RIVER NEAR WASH, DC LITTLE FALLS PUMP STA",
              "siteCode": [{ "value": "01646500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 38.94977778, "longitude": -77.12763889 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00065", "network": "NWIS" }],
              "variableDescription": "Gage height, feet",
              "unit": { "unitCode": "ft" },
              "noDataValue": -999999.0
            },
            "values": [{
              "value": [
                { "value": "Ice", "qualifiers": ["P", "Ice"], "dateTime": "2024-01-17T07:45:00.000-05:00" },
                { "value": "-999999", "qualifiers": ["P"], "dateTime": "2024-01-17T08:00:00.000-05:00" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Goose Creek (01643700) with coordinates delivered as strings.
pub(crate) fn fixture_string_coordinates_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "GOOSE CREEK NEAR MIDDLEBURG, VA",
              "siteCode": [{ "value": "01643700", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": "39.0198", "longitude": "-77.5776" }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "variableDescription": "Discharge, cubic feet per second",
              "unit": { "unitCode": "ft3/s" }
            },
            "values": [{
              "value": [
                { "value": "212", "qualifiers": ["P"], "dateTime": "2024-05-01T12:00:00.000-04:00" }
              ]
            }]
          }
        ]
      }
    }"#
}

/// Goose Creek discharge with an empty value array, as during a sensor outage or
/// data gap. The gauge still exists; it just has no readings.
pub(crate) fn fixture_empty_value_array_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "GOOSE CREEK NEAR MIDDLEBURG, VA",
              "siteCode": [{ "value": "01643700", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 39.0198, "longitude": -77.5776 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "variableDescription": "Discharge, cubic feet per second",
              "unit": { "unitCode": "ft3/s" }
            },
            "values": [{ "value": [], "qualifier": [] }]
          }
        ]
      }
    }"#
}

/// A good Little Falls entry followed by a Point of Rocks entry whose
/// `variable` has lost its `unit`. Only the first should survive.
pub(crate) fn fixture_one_good_one_malformed_json() -> &'static str {
    r#"{
      "value": {
        "timeSeries": [
          {
            "sourceInfo": {
              "siteName": "POTOMAC RIVER NEAR WASH, DC LITTLE FALLS PUMP STA",
              "siteCode": [{ "value": "01646500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 38.94977778, "longitude": -77.12763889 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "variableDescription": "Discharge, cubic feet per second",
              "unit": { "unitCode": "ft3/s" }
            },
            "values": [{
              "value": [
                { "value": "4270", "qualifiers": ["P"], "dateTime": "2024-05-01T12:00:00.000-04:00" }
              ]
            }]
          },
          {
            "sourceInfo": {
              "siteName": "POTOMAC RIVER AT POINT OF ROCKS, MD",
              "siteCode": [{ "value": "01638500", "network": "NWIS", "agencyCode": "USGS" }],
              "geoLocation": {
                "geogLocation": { "srs": "EPSG:4326", "latitude": 39.27371111, "longitude": -77.5433 }
              }
            },
            "variable": {
              "variableCode": [{ "value": "00060", "network": "NWIS" }],
              "variableDescription": "Discharge, cubic feet per second"
            },
            "values": [{
              "value": [
                { "value": "3950", "qualifiers": ["P"], "dateTime": "2024-05-01T11:45:00.000-04:00" }
              ]
            }]
          }
        ]
      }
    }"#
}
