//! Dataset Sources
//!
//! Tabular row sources behind the paginators. The first row a source yields
//! is a header and is dropped by the paginator; the rest keep their order.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::{Error, Result};

/// One dataset row, as read.
pub type Row = Vec<String>;

// == Dataset Source ==
/// Supplies every row of a dataset, header first.
pub trait DatasetSource {
    fn read_rows(&self) -> Result<Vec<Row>>;

    /// Short label used in logs.
    fn describe(&self) -> String;
}

// == CSV File ==
/// Comma-separated file on disk.
///
/// Rows may have differing field counts; nothing beyond CSV syntax is
/// validated.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for CsvFile {
    fn read_rows(&self) -> Result<Vec<Row>> {
        let dataset_error = |source| Error::Dataset {
            path: self.path.display().to_string(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(dataset_error)?;

        reader
            .records()
            .map(|record| {
                record
                    .map(|fields| fields.iter().map(str::to_owned).collect::<Row>())
                    .map_err(dataset_error)
            })
            .collect()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

// == Static Rows ==
/// Rows held in memory, header first.
#[derive(Debug, Clone, Default)]
pub struct StaticRows {
    rows: Vec<Row>,
}

impl StaticRows {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Builds rows from string slices.
    pub fn from_slices(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|field| field.to_string()).collect())
                .collect(),
        )
    }
}

impl DatasetSource for StaticRows {
    fn read_rows(&self) -> Result<Vec<Row>> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("<{} in-memory rows>", self.rows.len())
    }
}
