// src/config/options.rs
use std::path::{ Path, PathBuf };

use super::consts::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delim {
    Csv,
    #[default]
    Tsv,
}

impl Delim {
    pub fn ext(&self) -> &'static str {
        match self { Delim::Csv => "csv", Delim::Tsv => "tsv" }
    }
    pub fn sep(&self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }
}

/// How candidate definition files are found for a tool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Discovery {
    /// Scrape `<repository>/file/tip` for every `.xml` in the repository.
    #[default]
    Listing,
    /// Only fetch `<repository>/raw-file/tip/<tool-name>.xml`.
    Direct,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub input: PathBuf,
    output: Option<PathBuf>,
    pub format: Delim,
    pub base_url: String,
    pub tool_id_column: String,
    pub field_name: String,
    pub limit: Option<usize>,          // stop after this many processed rows
    pub start_at: usize,               // skip rows before this index
    pub use_cache: bool,               // per-run URL -> definition memo
    pub discovery: Discovery,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: None,
            format: Delim::Tsv,
            base_url: BASE_URL.to_string(),
            tool_id_column: TOOL_ID_COLUMN.to_string(),
            field_name: TABLES_FIELD_NAME.to_string(),
            limit: DEFAULT_LIMIT,
            start_at: DEFAULT_START_AT,
            use_cache: false,
            discovery: Discovery::Listing,
        }
    }
}

impl RunOptions {
    /// Explicit output path, or `<input-stem>+tables.<ext>` beside the input.
    pub fn out_path(&self) -> PathBuf {
        match &self.output {
            Some(p) => p.clone(),
            None => derived_out_path(&self.input, self.format),
        }
    }

    pub fn set_output(&mut self, path: impl Into<PathBuf>) {
        self.output = Some(path.into());
    }
}

fn derived_out_path(input: &Path, format: Delim) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "tools".to_string());
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| format.ext().to_string());
    input.with_file_name(format!("{stem}{OUTPUT_SUFFIX}.{ext}"))
}
