use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Numeric attribute of a record that can drive an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Healthcare,
    Smokes,
    Obesity,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Healthcare, Self::Smokes, Self::Obesity];

    /// Column name used in the input table.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Healthcare => "healthcare",
            Self::Smokes => "smokes",
            Self::Obesity => "obesity",
        }
    }

    /// Human-readable prefix used in tooltip lines.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Healthcare => "Healthcare",
            Self::Smokes => "Smokes",
            Self::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Field {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.column().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| ChartError::UnknownField(value.to_owned()))
    }
}

/// One row of input data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub region: String,
    pub abbreviation: String,
    pub healthcare: f64,
    pub smokes: f64,
    pub obesity: f64,
    /// Remaining columns, kept as text in file order.
    #[serde(default)]
    pub extra: IndexMap<String, String>,
}

impl Record {
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        abbreviation: impl Into<String>,
        healthcare: f64,
        smokes: f64,
        obesity: f64,
    ) -> Self {
        Self {
            region: region.into(),
            abbreviation: abbreviation.into(),
            healthcare,
            smokes,
            obesity,
            extra: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Healthcare => self.healthcare,
            Field::Smokes => self.smokes,
            Field::Obesity => self.obesity,
        }
    }
}

/// Ordered, non-empty sequence of records in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Smallest value of `field`. NaN values are skipped unless every value is NaN.
    #[must_use]
    pub fn min(&self, field: Field) -> f64 {
        self.records
            .iter()
            .map(|record| record.value(field))
            .fold(f64::NAN, f64::min)
    }

    /// Largest value of `field`. NaN values are skipped unless every value is NaN.
    #[must_use]
    pub fn max(&self, field: Field) -> f64 {
        self.records
            .iter()
            .map(|record| record.value(field))
            .fold(f64::NAN, f64::max)
    }
}
