use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Dataset, Field, Record};
use crate::error::{ChartError, ChartResult};

const REGION_COLUMNS: [&str; 2] = ["state", "region"];
const ABBREVIATION_COLUMNS: [&str; 2] = ["abbr", "abbreviation"];

/// How text in numeric columns is converted to `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NumericPolicy {
    /// Reject any value that does not parse to a finite number.
    #[default]
    Strict,
    /// Unary-plus coercion: blank text is `0`, `Infinity` / `-Infinity` are
    /// infinite, and any other unparseable or non-finite text is `NaN`.
    Coerce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadOptions {
    #[serde(default)]
    pub numeric_policy: NumericPolicy,
}

impl LoadOptions {
    #[must_use]
    pub fn with_numeric_policy(mut self, policy: NumericPolicy) -> Self {
        self.numeric_policy = policy;
        self
    }
}

/// Loads a comma-separated table with a header row using default options.
pub fn load_dataset(path: impl AsRef<Path>) -> ChartResult<Dataset> {
    load_dataset_with(path, LoadOptions::default())
}

pub fn load_dataset_with(path: impl AsRef<Path>, options: LoadOptions) -> ChartResult<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| ChartError::Load(format!("cannot open `{}`: {e}", path.display())))?;
    debug!(path = %path.display(), "loading dataset");
    load_dataset_from_reader(file, options)
}

/// Parses a dataset from any reader producing CSV text.
pub fn load_dataset_from_reader<R: Read>(reader: R, options: LoadOptions) -> ChartResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| ChartError::Load(format!("failed to read header row: {e}")))?
        .clone();
    let columns = ColumnMap::resolve(&headers)?;

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|e| ChartError::Load(format!("malformed row: {e}")))?;
        let line = row
            .position()
            .map_or(index + 2, |position| position.line() as usize);
        records.push(columns.build_record(&headers, &row, line, options.numeric_policy)?);
    }

    debug!(rows = records.len(), "dataset parsed");
    Dataset::new(records)
}

#[derive(Debug)]
struct ColumnMap {
    region: usize,
    abbreviation: usize,
    numeric: [(Field, usize); 3],
}

impl ColumnMap {
    fn resolve(headers: &StringRecord) -> ChartResult<Self> {
        let lookup: IndexMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.to_ascii_lowercase(), index))
            .collect();

        Ok(Self {
            region: find_column(&lookup, &REGION_COLUMNS)?,
            abbreviation: find_column(&lookup, &ABBREVIATION_COLUMNS)?,
            numeric: [
                (Field::Healthcare, find_column(&lookup, &[Field::Healthcare.column()])?),
                (Field::Smokes, find_column(&lookup, &[Field::Smokes.column()])?),
                (Field::Obesity, find_column(&lookup, &[Field::Obesity.column()])?),
            ],
        })
    }

    fn is_known(&self, index: usize) -> bool {
        index == self.region
            || index == self.abbreviation
            || self.numeric.iter().any(|(_, column)| *column == index)
    }

    fn build_record(
        &self,
        headers: &StringRecord,
        row: &StringRecord,
        line: usize,
        policy: NumericPolicy,
    ) -> ChartResult<Record> {
        let text = |index: usize| row.get(index).unwrap_or_default();

        let mut values = [0.0; 3];
        for (slot, (field, index)) in values.iter_mut().zip(self.numeric) {
            *slot = parse_numeric(text(index), field, line, policy)?;
        }

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.is_known(*index))
            .map(|(index, name)| (name.to_owned(), text(index).to_owned()))
            .collect();

        Ok(Record {
            region: text(self.region).to_owned(),
            abbreviation: text(self.abbreviation).to_owned(),
            healthcare: values[0],
            smokes: values[1],
            obesity: values[2],
            extra,
        })
    }
}

fn find_column(lookup: &IndexMap<String, usize>, names: &[&str]) -> ChartResult<usize> {
    names
        .iter()
        .find_map(|name| lookup.get(*name).copied())
        .ok_or_else(|| ChartError::MissingColumn(names[0].to_owned()))
}

fn parse_numeric(raw: &str, field: Field, line: usize, policy: NumericPolicy) -> ChartResult<f64> {
    let parsed = raw.parse::<f64>();
    match policy {
        NumericPolicy::Strict => match parsed {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(ChartError::InvalidNumber {
                row: line,
                column: field.column().to_owned(),
                value: raw.to_owned(),
            }),
        },
        NumericPolicy::Coerce => {
            let value = match raw {
                "" => 0.0,
                "Infinity" | "+Infinity" => f64::INFINITY,
                "-Infinity" => f64::NEG_INFINITY,
                // `inf`, `nan` and friends are Rust spellings only.
                _ => parsed.ok().filter(|value| value.is_finite()).unwrap_or(f64::NAN),
            };
            if value.is_nan() {
                warn!(row = line, column = field.column(), value = raw, "coerced to NaN");
            }
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NumericPolicy, parse_numeric};
    use crate::core::Field;

    #[test]
    fn coerce_policy_mirrors_unary_plus() {
        let coerce = NumericPolicy::Coerce;
        assert_eq!(parse_numeric("", Field::Smokes, 2, coerce).ok(), Some(0.0));
        assert!(
            parse_numeric("n/a", Field::Smokes, 2, coerce)
                .expect("coerced")
                .is_nan()
        );
        assert_eq!(parse_numeric("12.5", Field::Smokes, 2, coerce).ok(), Some(12.5));
        for raw in ["inf", "-inf", "INFINITY", "infinity", "NaN"] {
            assert!(
                parse_numeric(raw, Field::Smokes, 2, coerce)
                    .expect("coerced")
                    .is_nan(),
                "{raw} should coerce to NaN"
            );
        }
        assert_eq!(
            parse_numeric("-Infinity", Field::Smokes, 2, coerce).ok(),
            Some(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn strict_policy_rejects_non_finite_values() {
        assert!(parse_numeric("inf", Field::Obesity, 3, NumericPolicy::Strict).is_err());
        assert!(parse_numeric("", Field::Obesity, 3, NumericPolicy::Strict).is_err());
    }
}
