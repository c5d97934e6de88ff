//! Upstream feeds.
//!
//! - `http`  : the fetch capability and its reqwest implementation
//! - `nws`   : NWS forecast feed (DWML XML): URL construction + parsing
//! - `usgs`  : USGS NWIS instantaneous values (WaterML JSON): URL construction + parsing
//! - `fixtures` (test only) : representative response payloads

pub mod http;
pub mod nws;
pub mod usgs;

#[cfg(test)]
pub(crate) mod fixtures;
