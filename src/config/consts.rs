// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://toolshed.g2.bx.psu.edu";
pub const LISTING_SUFFIX: &str = "/file/tip";
pub const RAW_TIP_SEGMENT: &str = "/raw-file/tip/";
pub const USER_AGENT: &str = concat!("data_table_deps/", env!("CARGO_PKG_VERSION"));

// Listing scrape
pub const FILENAME_CLASS: &str = "filename";
pub const DEFINITION_EXT: &str = ".xml";
pub const VIEW_SEGMENT: &str = "/file/";
pub const RAW_SEGMENT: &str = "/raw-file/";

// Tool definitions
pub const SHARED_ROOT_TAGS: [&str; 2] = ["macros", "tokens"];
pub const OPTIONS_TAG: &str = "options";
pub const DATA_TABLE_ATTR: &str = "from_data_table";
pub const TABLE_JOIN: &str = ", ";

// Inventory
pub const DEFAULT_INPUT: &str = "eu_iuc_tools.tsv";
pub const OUTPUT_SUFFIX: &str = "+tables";
pub const TOOL_ID_COLUMN: &str = "Tool ID";
pub const TABLES_FIELD_NAME: &str = "Data tables";
pub const DEFAULT_LIMIT: Option<usize> = None;
pub const DEFAULT_START_AT: usize = 0;
