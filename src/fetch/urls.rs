// src/fetch/urls.rs

use anyhow::{Context, Result};
use url::Url;

/// Root of the World Bank v2 API.
pub const BASE_URL: &str = "http://api.worldbank.org/v2";

/// Build the query URL for one country/indicator pair over an inclusive
/// year range:
/// `<base>/country/{c}/indicator/{i}?format=json&date={start}:{end}`.
pub fn indicator_url(
    country_code: &str,
    indicator_code: &str,
    start_year: i32,
    end_year: i32,
) -> Result<Url> {
    let raw = format!(
        "{}/country/{}/indicator/{}?format=json&date={}:{}",
        BASE_URL, country_code, indicator_code, start_year, end_year
    );
    Url::parse(&raw).with_context(|| {
        format!(
            "building indicator URL for {}/{}",
            country_code, indicator_code
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_url_shape() {
        let url = indicator_url("ETH", "NY.GDP.MKTP.CD", 1960, 2024).unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.worldbank.org/v2/country/ETH/indicator/NY.GDP.MKTP.CD?format=json&date=1960:2024"
        );
    }

    #[test]
    fn indicator_url_carries_custom_range() {
        let url = indicator_url("KEN", "FP.CPI.TOTL.ZG", 2000, 2010).unwrap();
        assert_eq!(url.query(), Some("format=json&date=2000:2010"));
    }
}
