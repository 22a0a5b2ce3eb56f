// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::{ consts::TABLE_JOIN, RunOptions },
    core::Fetch,
    error::Result,
    file::RowFile,
    inventory::Inventory,
    progress::Progress,
    scrape::Scraper,
    tool::ToolRef,
};

/// Summary of what was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub processed: usize,
    pub skipped: usize,
    pub cache_hits: usize,
}

/// Read the inventory, look up data tables per tool, write the augmented copy.
///
/// Rows before `opts.start_at` are read but neither fetched nor written; at most
/// `opts.limit` rows are processed. Any error other than an identity mismatch
/// ends the run; rows written so far stay on disk.
pub fn run<F: Fetch>(
    opts: &RunOptions,
    fetcher: F,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let sep = opts.format.sep();
    logf!("Opening inventory: {}", opts.input.display());
    let inventory = Inventory::load(&opts.input, sep)?;
    let id_col = inventory.column(&opts.tool_id_column)?;

    let mut headers = inventory.headers.clone();
    headers.push(opts.field_name.clone());
    let out_path = opts.out_path();
    let mut out = RowFile::create(&out_path, &headers, sep)?;
    logd!("Writing to {}", out_path.display());

    let mut scraper = Scraper::new(fetcher, opts.base_url.as_str(), opts.discovery);
    if opts.use_cache {
        scraper = scraper.with_cache();
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(inventory.len());
        if opts.start_at > 0 {
            p.log(&format!("Resuming at row {}", opts.start_at));
        }
    }

    let mut skipped = 0usize;
    for index in 0..inventory.len() {
        if index < opts.start_at {
            skipped += 1;
            if let Some(p) = progress.as_deref_mut() {
                p.item_skipped(index);
            }
            continue;
        }
        if opts.limit.is_some_and(|limit| out.rows_written() >= limit) {
            logf!("Row limit {} reached", opts.limit.unwrap_or_default());
            break;
        }

        let mut row = inventory.normalized_row(index)?;
        let tool_id = row[id_col].clone();
        logf!("Fetching tool ({index}): {tool_id}");

        let tool = ToolRef::from_tool_id(&tool_id)?;
        let tables = scraper.data_tables(&tool)?.join(TABLE_JOIN);

        row.push(tables);
        out.append(&row)?;

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(index, &tool_id, &row[row.len() - 1]);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary {
        output: out_path,
        processed: out.rows_written(),
        skipped,
        cache_hits: scraper.cache().map(|c| c.hits()).unwrap_or(0),
    })
}

/// Data tables for a single versionless tool id, no inventory involved.
pub fn lookup<F: Fetch>(gxid: &str, opts: &RunOptions, fetcher: F) -> Result<Vec<String>> {
    let tool = ToolRef::from_gxid(gxid)?;
    logf!("Looking up {} (repository {})", tool.gxid(), tool.repository);
    let mut scraper = Scraper::new(fetcher, opts.base_url.as_str(), opts.discovery);
    if opts.use_cache {
        scraper = scraper.with_cache();
    }
    scraper.data_tables(&tool)
}
