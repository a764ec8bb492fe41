// src/model.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Year → value mapping produced by [`crate::process::aggregate`].
pub type YearValueMap = BTreeMap<i32, Option<f64>>;

/// The `{id, value}` sub-object the World Bank API uses for both the
/// `country` and `indicator` fields of an observation. Both fields are
/// required; a record missing either fails deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodedName {
    pub id: String,
    pub value: String,
}

/// One observation as returned by the source API, before any cleaning.
///
/// `date` is a year carried as a string, and `value` arrives as a number, a
/// numeric string, or null depending on the series. Sibling fields the API
/// also sends (`unit`, `obs_status`, `decimal`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub date: String,
    #[serde(default)]
    pub value: Option<Value>,
    pub country: CodedName,
    pub indicator: CodedName,
}

/// The flattened form of a [`RawRecord`]: nested sub-objects reduced to
/// scalar code/name columns, `date` coerced to an integer year. Field order
/// is fixed and matches the persisted column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub date: i32,
    pub value: Option<f64>,
    pub country_code: String,
    pub country_name: String,
    pub indicator_code: String,
    pub indicator_name: String,
}

/// Inclusive year span covered by a processed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

/// Provenance block attached to every processed document.
///
/// `country_codes` and `indicators` hold the distinct codes present in the
/// document's data, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub source: String,
    pub retrieved_on: String,
    pub country_codes: Vec<String>,
    pub indicators: Vec<String>,
    pub year_range: YearRange,
}

/// Top-level persisted artifact: provenance plus the flattened records,
/// ascending by year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub metadata: Metadata,
    pub data: Vec<FlatRecord>,
}
