// src/store/mod.rs

use crate::model::{ProcessedDocument, RawRecord};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{fs, path::Path};

/// Serialize `value` as indented JSON and write it to `path`, overwriting
/// any existing file. Parent directories are created as needed. Failures
/// here are fatal to the caller; there is no fallback path.
pub fn save_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating directory {:?}", parent))?;
    }
    let text = serde_json::to_string_pretty(value).context("serializing value to JSON")?;
    fs::write(path, text).with_context(|| format!("writing {:?}", path))
}

/// Read back a previously saved raw payload for offline processing.
pub fn load_raw(path: impl AsRef<Path>) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("parsing raw payload {:?}", path))
}

/// Read back a previously saved processed document.
pub fn load_processed(path: impl AsRef<Path>) -> Result<ProcessedDocument> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("parsing processed document {:?}", path))
}
