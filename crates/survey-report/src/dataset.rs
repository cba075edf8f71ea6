//! Numeric survey tables loaded from CSV
//!
//! Both survey files are rectangular tables of numeric answers. Empty cells
//! and the usual missing-value spellings become `None`; yes/no style answers
//! become 1 and 0.

use crate::{Error, Result};
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument};

/// A column-major table of optional numbers
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<Option<f64>>>,
    n_rows: usize,
}

impl Table {
    /// Build a table from named columns of equal length
    pub fn from_columns(columns: Vec<(String, Vec<Option<f64>>)>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, |(_, c)| c.len());
        if let Some((name, _)) = columns.iter().find(|(_, c)| c.len() != n_rows) {
            return Err(Error::InvalidParameter(format!(
                "column {name} does not have {n_rows} rows"
            )));
        }
        let (headers, columns) = columns.into_iter().unzip();
        Ok(Self {
            headers,
            columns,
            n_rows,
        })
    }

    /// Read a table from a CSV file with a header row
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_csv_reader(file)
    }

    /// Read a table from any CSV source with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let mut columns = vec![Vec::new(); headers.len()];

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            for (col, header) in headers.iter().enumerate() {
                let raw = record.get(col).unwrap_or("");
                let value = parse_cell(raw).ok_or_else(|| Error::InvalidValue {
                    column: header.clone(),
                    row,
                    value: raw.to_string(),
                })?;
                columns[col].push(value);
            }
        }

        let n_rows = columns.first().map_or(0, Vec::len);
        debug!(n_rows, n_columns = headers.len(), "Loaded survey table");
        Ok(Self {
            headers,
            columns,
            n_rows,
        })
    }

    /// Column names in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of rows (participants)
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&[Option<f64>]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// Iterate `(name, values)` pairs in file order
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[Option<f64>])> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }
}

/// Parse one cell; `None` inside `Some` means the answer is missing
fn parse_cell(raw: &str) -> Option<Option<f64>> {
    match raw.to_ascii_lowercase().as_str() {
        "" | "na" | "nan" | "n/a" | "null" => Some(None),
        "yes" | "true" | "y" => Some(Some(1.0)),
        "no" | "false" | "n" => Some(Some(0.0)),
        other => other.parse::<f64>().ok().map(Some),
    }
}

/// Sum of the present values in a column
pub fn column_sum(values: &[Option<f64>]) -> f64 {
    values.iter().flatten().sum()
}

/// Present values of a column, in row order
pub fn present(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().flatten().copied().filter(|v| !v.is_nan()).collect()
}
