// src/process/mod.rs

pub mod aggregate;

pub use aggregate::aggregate;

use crate::clock::Clock;
use crate::model::{FlatRecord, Metadata, ProcessedDocument, RawRecord, YearRange};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::warn;

/// Label stamped into every processed document's metadata.
pub const SOURCE_LABEL: &str = "World Bank API";

/// Clean a raw observation list into a processed document.
///
/// Returns `Ok(None)` when there is nothing to process. A non-numeric
/// `date` is a hard error: the source guarantees numeric year strings, so
/// a failure there indicates a data-contract break, unlike a bad `value`
/// which is recorded as null and never stops the run.
pub fn clean(raw: &[RawRecord], clock: &dyn Clock) -> Result<Option<ProcessedDocument>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let mut data = Vec::with_capacity(raw.len());
    for record in raw {
        data.push(flatten(record)?);
    }

    // Stable sort: same-year records keep their source order.
    data.sort_by_key(|r| r.date);

    let metadata = Metadata {
        source: SOURCE_LABEL.to_string(),
        retrieved_on: clock.now().to_rfc3339(),
        country_codes: distinct(data.iter().map(|r| r.country_code.as_str())),
        indicators: distinct(data.iter().map(|r| r.indicator_code.as_str())),
        // data is sorted and non-empty, so the range is just the ends
        year_range: YearRange {
            min: data[0].date,
            max: data[data.len() - 1].date,
        },
    };

    Ok(Some(ProcessedDocument { metadata, data }))
}

/// Reduce one raw observation to its flat tabular form.
fn flatten(record: &RawRecord) -> Result<FlatRecord> {
    let date: i32 = record.date.trim().parse().with_context(|| {
        format!(
            "non-numeric year {:?} for {}/{}",
            record.date, record.country.id, record.indicator.id
        )
    })?;

    Ok(FlatRecord {
        date,
        value: coerce_numeric(record.value.as_ref()),
        country_code: record.country.id.clone(),
        country_name: record.country.value.clone(),
        indicator_code: record.indicator.id.clone(),
        indicator_name: record.indicator.value.clone(),
    })
}

/// Best-effort numeric coercion: numbers pass through, numeric strings
/// parse, everything else (null included) becomes `None`.
fn coerce_numeric(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::Null => None,
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                warn!(value = %s, "unparseable numeric value, recording null");
                None
            }
        },
        other => {
            warn!(value = %other, "unexpected value type, recording null");
            None
        }
    }
}

/// Distinct values in order of first appearance.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for v in values {
        if !seen.iter().any(|s| s == v) {
            seen.push(v.to_string());
        }
    }
    seen
}
