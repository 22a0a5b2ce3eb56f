// src/file.rs

use std::{
    fs::{ self, File },
    io::{ BufWriter, Write },
    path::{ Path, PathBuf },
};

use crate::csv::write_row;
use crate::error::{ Error, Result };

/// Output file written one row at a time.
/// Every row is flushed before `append` returns, so an interrupted run leaves
/// a header plus whole rows behind.
pub struct RowFile {
    path: PathBuf,
    out: BufWriter<File>,
    sep: char,
    rows: usize,
}

impl RowFile {
    /// Ensure parent dir exists; create/truncate file; write header.
    pub fn create(path: &Path, headers: &[String], sep: char) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent)?;
            }
        }
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let mut this = Self { path: path.to_path_buf(), out: BufWriter::new(file), sep, rows: 0 };
        this.write(headers)?;
        Ok(this)
    }

    pub fn append(&mut self, row: &[String]) -> Result<()> {
        self.write(row)?;
        self.rows += 1;
        Ok(())
    }

    fn write(&mut self, row: &[String]) -> Result<()> {
        write_row(&mut self.out, row, self.sep)
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::io(&self.path, e))
    }

    /// Data rows written so far (header excluded).
    pub fn rows_written(&self) -> usize {
        self.rows
    }
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        let err = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path exists but is not a directory");
        return Err(Error::io(dir, err));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    }
    Ok(())
}
