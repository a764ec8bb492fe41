// src/process/aggregate.rs

use crate::model::{FlatRecord, YearValueMap};

/// Build a year → value map for one country/indicator pair.
///
/// Matching is exact and case-sensitive on both codes. Duplicate years for
/// the same pair are not validated; the later record wins. A pair with no
/// matching records yields an empty map.
pub fn aggregate(records: &[FlatRecord], country_code: &str, indicator_code: &str) -> YearValueMap {
    let mut by_year = YearValueMap::new();
    for record in records {
        if record.country_code == country_code && record.indicator_code == indicator_code {
            by_year.insert(record.date, record.value);
        }
    }
    by_year
}
