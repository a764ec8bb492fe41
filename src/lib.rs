//! Fetch World Bank indicator series, flatten the nested API records into
//! tabular form, and persist both raw and processed JSON to disk.

pub mod clock;
pub mod fetch;
pub mod model;
pub mod process;
pub mod store;
