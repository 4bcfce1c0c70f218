use std::fs::File;
use std::io::{self, Read};

use log::trace;
use thiserror::Error;

use super::Position;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Unable to open {path:?}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Error while reading {path:?}: {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// An immutable ragged table of string cells as they appear in the source document.
///
/// Rows may have different lengths, so all accessors are bounds-checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Grid {
        Grid {rows}
    }

    pub fn read(path: &str) -> Result<Grid, GridError> {
        let file = File::open(path).map_err(|source| GridError::Io {
            path: path.to_owned(),
            source,
        })?;

        Grid::from_reader(file).map_err(|source| GridError::Read {
            path: path.to_owned(),
            source,
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Grid, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(ToOwned::to_owned).collect());
        }

        trace!("Read {} rows.", rows.len());
        Ok(Grid::new(rows))
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn cell(&self, position: Position) -> Option<&str> {
        self.row(position.row)
            .and_then(|row| row.get(position.column))
            .map(String::as_str)
    }

    /// Returns the cell value or an empty string if the cell is out of the grid bounds.
    pub fn cell_or_empty(&self, position: Position) -> &str {
        self.cell(position).unwrap_or_default()
    }
}

impl<R: AsRef<str>> FromIterator<Vec<R>> for Grid {
    fn from_iter<I: IntoIterator<Item = Vec<R>>>(rows: I) -> Grid {
        Grid::new(rows.into_iter().map(|row| {
            row.iter().map(|cell| cell.as_ref().to_owned()).collect()
        }).collect())
    }
}
