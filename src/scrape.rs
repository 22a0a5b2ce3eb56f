// src/scrape.rs
// One tool in, its data tables out.

use crate::{
    cache::DefinitionCache,
    config::{ consts::{ DEFINITION_EXT, RAW_TIP_SEGMENT }, Discovery },
    core::Fetch,
    error::Result,
    specs::{ definition::{ id_matches, ToolDefinition }, listing },
    tool::ToolRef,
};

/// Outcome for a single candidate file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// Identity matched (or shared include); these tables count.
    Tables(Vec<String>),
    /// Declared id differs from the tool we are looking for.
    Skipped { declared: Option<String> },
}

pub struct Scraper<F: Fetch> {
    fetcher: F,
    base_url: String,
    discovery: Discovery,
    cache: Option<DefinitionCache>,
}

impl<F: Fetch> Scraper<F> {
    pub fn new(fetcher: F, base_url: impl Into<String>, discovery: Discovery) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { fetcher, base_url, discovery, cache: None }
    }

    /// Turn on the per-run URL cache.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(DefinitionCache::new());
        self
    }

    pub fn cache(&self) -> Option<&DefinitionCache> {
        self.cache.as_ref()
    }

    /// All data tables across the tool's candidate files, in file order.
    /// Not de-duplicated, not sorted.
    pub fn data_tables(&mut self, tool: &ToolRef) -> Result<Vec<String>> {
        let mut tables = Vec::new();
        for url in self.candidate_urls(tool)? {
            if let FileOutcome::Tables(t) = self.resolve_file(&url, &tool.tool_name)? {
                tables.extend(t);
            }
        }
        Ok(tables)
    }

    /// Full URLs of the definition files worth fetching for `tool`.
    pub fn candidate_urls(&self, tool: &ToolRef) -> Result<Vec<String>> {
        match self.discovery {
            Discovery::Listing => {
                let url = listing::listing_url(&tool.repository);
                logd!("Listing files: {url}");
                let page = self.fetcher.get(&url)?;
                let paths = listing::extract_definition_paths(&page, &url)?;
                Ok(paths.into_iter().map(|p| format!("{}{}", self.base_url, p)).collect())
            }
            Discovery::Direct => Ok(vec![format!(
                "https://{}{}{}{}",
                tool.repository, RAW_TIP_SEGMENT, tool.tool_name, DEFINITION_EXT
            )]),
        }
    }

    /// Fetch (or recall) one definition and apply the identity rule.
    pub fn resolve_file(&mut self, url: &str, tool_name: &str) -> Result<FileOutcome> {
        if let Some(hit) = self.cache.as_mut().and_then(|c| c.get(url)) {
            logf!("Cache hit: {url}");
            let declared = hit.declared_id.clone();
            if !id_matches(declared.as_deref(), tool_name) {
                log_skip(url, declared.as_deref(), tool_name);
                return Ok(FileOutcome::Skipped { declared });
            }
            return Ok(FileOutcome::Tables(hit.data_tables.clone()));
        }

        logf!("Fetching URL: {url}");
        let body = self.fetcher.get(url)?;
        let def = ToolDefinition::parse(&body, url)?;

        if let Some(cache) = self.cache.as_mut() {
            cache.remember(url, &def);
        }

        if !def.is_shared() && !id_matches(def.id.as_deref(), tool_name) {
            log_skip(url, def.id.as_deref(), tool_name);
            return Ok(FileOutcome::Skipped { declared: def.id });
        }
        Ok(FileOutcome::Tables(def.data_tables))
    }
}

fn log_skip(url: &str, declared: Option<&str>, expected: &str) {
    let declared = declared.unwrap_or("<none>");
    logf!("Skipping {url} - source tool ID '{declared}' does not match '{expected}'");
}
