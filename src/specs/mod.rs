//! # Toolshed page "specs"
//!
//! Page-specific extraction for the two kinds of documents the toolshed serves us:
//!
//! - `listing` reads the hgweb `file/tip` page of a repository and returns the raw-content
//!   paths of every `.xml` file in it.
//! - `definition` reads one Galaxy tool definition (or a `macros`/`tokens` include) and
//!   returns its root tag, declared id and `from_data_table` names.
//!
//! Both are pure functions over text. Fetching, caching and identity decisions live in
//! `scrape`; writing rows lives in `runner`/`file`.
pub mod definition;
pub mod listing;
