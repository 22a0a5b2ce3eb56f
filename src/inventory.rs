// src/inventory.rs
use std::fs;
use std::path::Path;

use crate::csv::parse_rows;
use crate::error::{ Error, Result };

/// The tool list as read from disk: one header row plus data rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Inventory {
    pub fn load(path: &Path, sep: char) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        let mut rows = parse_rows(text, sep).into_iter();
        let headers = rows.next().ok_or_else(|| Error::EmptyInventory(path.to_path_buf()))?;
        Ok(Self { headers, rows: rows.collect() })
    }

    /// Index of the column called `name` (exact match).
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| Error::MissingColumn(name.to_string()))
    }

    /// `row` stretched to the header width. Short rows get empty fields,
    /// long rows are rejected.
    pub fn normalized_row(&self, index: usize) -> Result<Vec<String>> {
        let row = &self.rows[index];
        let expected = self.headers.len();
        if row.len() > expected {
            return Err(Error::RowShape { row: index, got: row.len(), expected });
        }
        let mut out = row.clone();
        out.resize(expected, String::new());
        Ok(out)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
