// src/specs/listing.rs

use crate::config::consts::{ DEFINITION_EXT, FILENAME_CLASS, LISTING_SUFFIX, RAW_SEGMENT, VIEW_SEGMENT };
use crate::core::html::{ attr_value, cell_end, has_class, next_open_tag_ci, normalize_entities, to_lower };
use crate::error::{ Error, Result };

/// `https://<repository>/file/tip`
pub fn listing_url(repository: &str) -> String {
    format!("https://{repository}{LISTING_SUFFIX}")
}

/// Pull every `.xml` link out of a repository listing page, rewritten from the
/// `/file/` view form to the `/raw-file/` content form.
///
/// Order follows the page; duplicates are kept. `url` is only used for errors.
/// A `filename` cell with no anchor, or an anchor with no `href`, is an error:
/// the page is not shaped the way we expect and guessing would drop files silently.
pub fn extract_definition_paths(page: &str, url: &str) -> Result<Vec<String>> {
    let lc = to_lower(page);
    let mut out = Vec::new();
    let mut pos = 0usize;

    while let Some(td) = next_open_tag_ci(page, &lc, "td", pos) {
        pos = td.end;
        if !has_class(td.text(page), FILENAME_CLASS) {
            continue;
        }

        let end = cell_end(&lc, td.end);
        let (cell, cell_lc) = (&page[td.end..end], &lc[td.end..end]);
        let anchor = next_open_tag_ci(cell, cell_lc, "a", 0).ok_or_else(|| Error::Listing {
            url: url.to_string(),
            reason: "filename cell without a link".to_string(),
        })?;
        let href = attr_value(anchor.text(cell), "href").ok_or_else(|| Error::Listing {
            url: url.to_string(),
            reason: "filename link without href".to_string(),
        })?;
        let href = normalize_entities(&href);

        if href.ends_with(DEFINITION_EXT) {
            out.push(href.replace(VIEW_SEGMENT, RAW_SEGMENT));
        }
    }

    Ok(out)
}
