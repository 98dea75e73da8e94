//! Tabular input for the chart.
//!
//! The input is a comma-separated file with a header row. Region and
//! abbreviation columns stay text; `healthcare`, `smokes` and `obesity` are
//! converted to numbers once, at load time.

mod loader;

pub use loader::{
    LoadOptions, NumericPolicy, load_dataset, load_dataset_from_reader, load_dataset_with,
};
