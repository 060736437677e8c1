// File: crates/graphic-core/src/data.rs
// Summary: Record/Dataset model and CSV loading with numeric coercion.

use std::io::Read;
use std::path::Path;

use crate::error::{GraphicError, Result};

/// CSV header of the category column.
pub const LABEL_COLUMN: &str = "pct_change";
/// CSV header of the value column.
pub const VALUE_COLUMN: &str = "count";

/// One input row: a percent-change bucket label and its count.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub label: String,
    pub count: f64,
}

/// Ordered record sequence, immutable after load. Input order defines the
/// categorical axis order. Created once, read by every render.
#[derive(Clone, Debug)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Wrap formatted records, rejecting an empty sequence up front so the
    /// renderer never sees one.
    pub fn try_new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(GraphicError::EmptyDataset);
        }
        Ok(Self { records })
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let dataset = Self::from_csv_reader(file)?;
        log::info!(
            "loaded {} records from {}",
            dataset.len(),
            path.as_ref().display()
        );
        Ok(dataset)
    }

    /// Parse CSV rows from any reader. Header names are fixed identifiers;
    /// lookup is by name, not position.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
        let label_at = find(LABEL_COLUMN)
            .ok_or(GraphicError::MissingColumn { name: LABEL_COLUMN })?;
        let count_at = find(VALUE_COLUMN)
            .ok_or(GraphicError::MissingColumn { name: VALUE_COLUMN })?;

        let mut records = Vec::new();
        for (i, rec) in rdr.records().enumerate() {
            let rec = rec?;
            // 1-based file line, counting the header row
            let row = i + 2;
            let label = rec.get(label_at).unwrap_or("").trim().to_string();
            let count = format_count(rec.get(count_at).unwrap_or("").trim(), row)?;
            records.push(Record { label, count });
        }
        Self::try_new(records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Labels in axis order.
    pub fn labels(&self) -> Vec<String> {
        self.records.iter().map(|r| r.label.clone()).collect()
    }

    /// (min, max) over counts. Total because the dataset is never empty.
    pub fn count_extent(&self) -> (f64, f64) {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for r in &self.records {
            min = min.min(r.count);
            max = max.max(r.count);
        }
        (min, max)
    }
}

/// Coerce one count cell. The formatter contract admits finite numbers only;
/// anything else halts the load.
fn format_count(raw: &str, row: usize) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(GraphicError::Format { row, value: raw.to_string() }),
    }
}
