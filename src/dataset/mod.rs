//! Dataset files: the persisted example format and tooling around it.
//!
//! The simulation core only produces [`LabeledExample`](crate::training::LabeledExample)s;
//! everything here is I/O and bookkeeping on their CSV form.

pub mod csv_io;
pub mod tools;

pub use csv_io::{read_rows, save_examples, write_rows, DatasetRow, DatasetWriter};
pub use tools::{filter_sort_by_moves, remove_duplicates};
