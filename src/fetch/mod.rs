// src/fetch/mod.rs

pub mod urls;

use crate::clock::Clock;
use crate::model::RawRecord;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// First year of the default query range, the earliest year the World Bank
/// publishes for most series.
pub const DEFAULT_START_YEAR: i32 = 1960;

/// Parameters for one indicator fetch. An `end_year` of `None` resolves to
/// the current calendar year at request time.
#[derive(Debug, Clone)]
pub struct IndicatorQuery {
    pub country_code: String,
    pub indicator_code: String,
    pub start_year: i32,
    pub end_year: Option<i32>,
}

impl IndicatorQuery {
    pub fn new(country_code: impl Into<String>, indicator_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            indicator_code: indicator_code.into(),
            start_year: DEFAULT_START_YEAR,
            end_year: None,
        }
    }
}

/// Fetch all observations for one country/indicator pair.
///
/// Returns `None` for every recoverable failure: transport errors, non-2xx
/// statuses, and response envelopes that do not carry an observation list.
/// Each case is logged so a batch run can report which pairs yielded no
/// data. Callers treat `None` as "no data", never as a fatal condition.
pub fn fetch_indicator(
    client: &Client,
    query: &IndicatorQuery,
    clock: &dyn Clock,
) -> Option<Vec<RawRecord>> {
    let end_year = query.end_year.unwrap_or_else(|| clock.current_year());
    let url = match urls::indicator_url(
        &query.country_code,
        &query.indicator_code,
        query.start_year,
        end_year,
    ) {
        Ok(u) => u,
        Err(e) => {
            warn!(
                country = %query.country_code,
                indicator = %query.indicator_code,
                error = %e,
                "bad query parameters"
            );
            return None;
        }
    };

    debug!(%url, "GET");
    let body = match get_text(client, &url) {
        Ok(b) => b,
        Err(e) => {
            warn!(
                country = %query.country_code,
                indicator = %query.indicator_code,
                error = %e,
                "fetch failed"
            );
            return None;
        }
    };

    let records = parse_envelope(&body);
    if records.is_none() {
        warn!(
            country = %query.country_code,
            indicator = %query.indicator_code,
            "no data available"
        );
    }
    records
}

fn get_text(client: &Client, url: &Url) -> Result<String> {
    client
        .get(url.clone())
        .send()
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("non-success status from {}", url))?
        .text()
        .with_context(|| format!("reading body from {}", url))
}

/// Apply the two-element envelope rules to a response body.
///
/// The API answers with `[paginationObj, observationArray]`. Anything else
/// (a non-array body, fewer than two elements, a null or empty observation
/// list, records missing required fields) yields `None`. On success the
/// observation list is returned unmodified.
pub fn parse_envelope(body: &str) -> Option<Vec<RawRecord>> {
    let mut envelope: Vec<Value> = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            debug!(error = %e, "response body is not a JSON array");
            return None;
        }
    };
    if envelope.len() < 2 {
        debug!(elements = envelope.len(), "envelope too short");
        return None;
    }

    let observations = envelope.remove(1);
    let records: Option<Vec<RawRecord>> = match serde_json::from_value(observations) {
        Ok(r) => r,
        Err(e) => {
            debug!(error = %e, "observation list failed to deserialize");
            return None;
        }
    };
    records.filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CodedName;
    use serde_json::json;

    fn page_meta() -> Value {
        json!({"page": 1, "pages": 1, "per_page": 50, "total": 2})
    }

    fn observation(date: &str, value: Value) -> Value {
        json!({
            "indicator": {"id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)"},
            "country": {"id": "ETH", "value": "Ethiopia"},
            "countryiso3code": "ETH",
            "date": date,
            "value": value,
            "unit": "",
            "obs_status": "",
            "decimal": 0
        })
    }

    #[test]
    fn well_formed_envelope_returns_second_element() {
        let body = json!([
            page_meta(),
            [observation("2020", json!(5.0)), observation("2021", json!(null))]
        ])
        .to_string();

        let records = parse_envelope(&body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            RawRecord {
                date: "2020".to_string(),
                value: Some(json!(5.0)),
                country: CodedName {
                    id: "ETH".to_string(),
                    value: "Ethiopia".to_string(),
                },
                indicator: CodedName {
                    id: "NY.GDP.MKTP.CD".to_string(),
                    value: "GDP (current US$)".to_string(),
                },
            }
        );
        assert_eq!(records[1].value, None);
    }

    #[test]
    fn short_envelope_is_absent() {
        let body = json!([page_meta()]).to_string();
        assert!(parse_envelope(&body).is_none());
    }

    #[test]
    fn null_observation_list_is_absent() {
        let body = json!([page_meta(), null]).to_string();
        assert!(parse_envelope(&body).is_none());
    }

    #[test]
    fn empty_observation_list_is_absent() {
        let body = json!([page_meta(), []]).to_string();
        assert!(parse_envelope(&body).is_none());
    }

    #[test]
    fn non_array_body_is_absent() {
        // The API reports bad parameters as an object, not an envelope.
        let body = json!({"message": [{"id": "120", "value": "Invalid indicator"}]}).to_string();
        assert!(parse_envelope(&body).is_none());
    }

    #[test]
    fn record_missing_country_id_is_absent() {
        let body = json!([
            page_meta(),
            [{
                "indicator": {"id": "X", "value": "X"},
                "country": {"value": "Ethiopia"},
                "date": "2020",
                "value": 1.0
            }]
        ])
        .to_string();
        assert!(parse_envelope(&body).is_none());
    }

    #[test]
    fn query_defaults() {
        let query = IndicatorQuery::new("ETH", "NY.GDP.MKTP.CD");
        assert_eq!(query.start_year, DEFAULT_START_YEAR);
        assert_eq!(query.end_year, None);
    }
}
