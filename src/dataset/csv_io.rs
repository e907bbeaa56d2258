//! CSV persistence of labeled examples.
//!
//! One row per example, no header: N² cell codes in row-major order, then the
//! winner code.

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::core::{Cell, Color, DatasetError, Grid};
use crate::training::LabeledExample;

/// One persisted row.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DatasetRow(pub Vec<i8>);

impl DatasetRow {
    /// Row for a labeled example.
    #[must_use]
    pub fn from_example(example: &LabeledExample) -> Self {
        Self(example.to_row())
    }

    /// Board codes (everything but the last field).
    #[must_use]
    pub fn cells(&self) -> &[i8] {
        &self.0[..self.0.len().saturating_sub(1)]
    }

    /// Winner code (the last field).
    #[must_use]
    pub fn winner(&self) -> i8 {
        self.0.last().copied().unwrap_or(0)
    }

    /// Number of stones on the board.
    #[must_use]
    pub fn moves_made(&self) -> usize {
        self.cells().iter().filter(|&&c| c != 0).count()
    }

    /// Board side length implied by the row width, if it is a square.
    #[must_use]
    pub fn board_size(&self) -> Option<usize> {
        let n = self.cells().len();
        let size = (n as f64).sqrt().round() as usize;
        (size > 0 && size * size == n).then_some(size)
    }

    /// Decode the board and winner.
    #[must_use]
    pub fn decode(&self) -> Option<(Grid, Color)> {
        let grid = Grid::from_codes(self.board_size()?, self.cells())?;
        let winner = Color::from_code(self.winner())?;
        Some((grid, winner))
    }

    fn validate(&self, line: usize, width: Option<usize>) -> Result<(), DatasetError> {
        let malformed = |reason: String| DatasetError::MalformedRow { line, reason };

        if let Some(w) = width {
            if self.0.len() != w {
                return Err(malformed(format!("expected {} fields, got {}", w, self.0.len())));
            }
        }
        if self.board_size().is_none() {
            return Err(malformed(format!(
                "{} board cells is not a square board",
                self.cells().len()
            )));
        }
        if let Some(bad) = self.cells().iter().find(|&&c| Cell::from_code(c).is_none()) {
            return Err(malformed(format!("invalid cell code {bad}")));
        }
        if !(-1..=1).contains(&self.winner()) {
            return Err(malformed(format!("invalid winner code {}", self.winner())));
        }
        Ok(())
    }
}

/// Appending CSV writer for dataset rows.
pub struct DatasetWriter {
    inner: csv::Writer<File>,
    rows_written: usize,
}

impl DatasetWriter {
    /// Create or truncate `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Ok(Self::from_file(File::create(path)?))
    }

    /// Open `path` for appending, creating it if missing.
    pub fn append(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: File) -> Self {
        Self {
            inner: csv::WriterBuilder::new().has_headers(false).from_writer(file),
            rows_written: 0,
        }
    }

    /// Write one example.
    pub fn write_example(&mut self, example: &LabeledExample) -> Result<(), DatasetError> {
        self.write_row(&DatasetRow::from_example(example))
    }

    /// Write one raw row.
    pub fn write_row(&mut self, row: &DatasetRow) -> Result<(), DatasetError> {
        self.inner.write_record(row.0.iter().map(|v| v.to_string()))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Rows written through this writer.
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush buffered rows to disk.
    pub fn flush(&mut self) -> Result<(), DatasetError> {
        self.inner.flush()?;
        Ok(())
    }
}

impl Drop for DatasetWriter {
    fn drop(&mut self) {
        if let Err(e) = self.inner.flush() {
            log::error!("failed to flush dataset writer: {}", e);
        }
    }
}

/// Write all rows to `path`, replacing its contents.
pub fn write_rows(path: impl AsRef<Path>, rows: &[DatasetRow]) -> Result<(), DatasetError> {
    let mut writer = DatasetWriter::create(path)?;
    for row in rows {
        writer.write_row(row)?;
    }
    writer.flush()
}

/// Read and validate every row of a dataset file.
///
/// All rows must have the same width, a square board, valid cell codes and a
/// winner code in {-1, 0, 1}.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<DatasetRow>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    let mut width = None;
    for (i, record) in reader.records().enumerate() {
        let line = i + 1;
        let record = record?;
        let values: Result<Vec<i8>, _> = record.iter().map(|f| f.trim().parse::<i8>()).collect();
        let row = DatasetRow(values.map_err(|e| DatasetError::MalformedRow {
            line,
            reason: e.to_string(),
        })?);
        row.validate(line, width)?;
        width = Some(row.0.len());
        rows.push(row);
    }
    Ok(rows)
}

/// Write `examples` to a fresh file at `path`. Returns the number written.
pub fn save_examples(
    path: impl AsRef<Path>,
    examples: &[LabeledExample],
) -> Result<usize, DatasetError> {
    let mut writer = DatasetWriter::create(path)?;
    for example in examples {
        writer.write_example(example)?;
    }
    writer.flush()?;
    Ok(writer.rows_written())
}
