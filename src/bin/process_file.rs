// src/bin/process_file.rs
//
// Offline companion to the main fetcher: re-process a previously saved raw
// payload without touching the network.

use anyhow::{Context, Result};
use std::{env, path::PathBuf, process::exit};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use wbscraper::{clock::SystemClock, process, store};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <RAW_JSON> <OUT_JSON>", args[0]);
        exit(1);
    }
    if let Err(e) = run(PathBuf::from(&args[1]), PathBuf::from(&args[2])) {
        eprintln!("Error: {:#}", e);
        exit(1);
    }
}

fn run(raw_path: PathBuf, out_path: PathBuf) -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let raw = store::load_raw(&raw_path)?;
    let document = process::clean(&raw, &SystemClock)?
        .with_context(|| format!("no records to process in {:?}", raw_path))?;
    store::save_json(&document, &out_path)?;
    info!(
        records = document.data.len(),
        path = %out_path.display(),
        "saved processed document"
    );

    // Sample aggregation over the document's first country/indicator pair.
    if let (Some(country), Some(indicator)) = (
        document.metadata.country_codes.first(),
        document.metadata.indicators.first(),
    ) {
        let by_year = process::aggregate(&document.data, country, indicator);
        info!(
            country = %country,
            indicator = %indicator,
            years = by_year.len(),
            "aggregated by year"
        );
    }

    Ok(())
}
