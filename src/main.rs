// src/main.rs

use anyhow::Result;
use reqwest::blocking::Client;
use std::{fs, path::Path};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use wbscraper::{
    clock::SystemClock,
    fetch::{self, IndicatorQuery},
    process, store,
};

const COUNTRY: &str = "ETH";

/// Indicator series fetched per run: short name, World Bank code.
static INDICATORS: &[(&str, &str)] = &[
    ("gdp", "NY.GDP.MKTP.CD"),
    ("gdp_growth", "NY.GDP.MKTP.KD.ZG"),
    ("inflation", "FP.CPI.TOTL.ZG"),
    ("unemployment", "SL.UEM.TOTL.ZS"),
];

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    let client = Client::new();
    let clock = SystemClock;
    let raw_dir = Path::new("data/raw");
    let processed_dir = Path::new("data/processed");
    for d in [raw_dir, processed_dir] {
        fs::create_dir_all(d)?;
    }

    for &(name, code) in INDICATORS {
        info!(indicator = name, code, "fetching");
        let query = IndicatorQuery::new(COUNTRY, code);

        // fetch_indicator logs the reason for every absent result; the
        // batch moves on to the next indicator either way.
        let raw = match fetch::fetch_indicator(&client, &query, &clock) {
            Some(r) => r,
            None => continue,
        };

        let raw_path = raw_dir.join(format!("{}_{}_raw.json", COUNTRY.to_lowercase(), name));
        store::save_json(&raw, &raw_path)?;
        info!(count = raw.len(), path = %raw_path.display(), "saved raw payload");

        match process::clean(&raw, &clock)? {
            Some(document) => {
                let out_path =
                    processed_dir.join(format!("{}_{}_processed.json", COUNTRY.to_lowercase(), name));
                store::save_json(&document, &out_path)?;
                info!(
                    records = document.data.len(),
                    years = ?document.metadata.year_range,
                    path = %out_path.display(),
                    "saved processed document"
                );
            }
            None => warn!(indicator = name, "nothing to process"),
        }
    }

    info!("all done");
    Ok(())
}
