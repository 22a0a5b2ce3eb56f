// src/core/html.rs
// Small case-insensitive scanners over raw HTML.
// Tag and attribute names are matched ASCII-case-insensitively; values are kept as-is.

/// ASCII-only lowercasing. Byte offsets stay valid against the original.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// An opening tag, as byte offsets into the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenTag {
    pub start: usize, // at '<'
    pub end: usize,   // just past '>'
}

impl OpenTag {
    pub fn text<'a>(&self, s: &'a str) -> &'a str {
        &s[self.start..self.end]
    }
}

/// Find the next `<tag …>` at or after `from`.
/// `lc` must be `to_lower(s)`, computed once per document by the caller.
/// `<tag` must be followed by whitespace, `>` or `/`, so `<td` never matches `<tdata`.
pub fn next_open_tag_ci(s: &str, lc: &str, tag: &str, from: usize) -> Option<OpenTag> {
    let open_pat = format!("<{}", to_lower(tag));

    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find(&open_pat)? + pos;
        let after = start + open_pat.len();
        match lc[after..].chars().next() {
            Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/' => {}
            _ => {
                pos = after;
                continue;
            }
        }
        let end = s[start..].find('>')? + start + 1;
        return Some(OpenTag { start, end });
    }
}

/// End of a table cell's content starting at `from`: the first `</td`, `</th`,
/// `</tr`, `</table`, `<td`, `<th` or `<tr`, whichever comes first.
/// Closing tags are optional in HTML, so a missing `</td>` ends at the next cell or row.
pub fn cell_end(lc: &str, from: usize) -> usize {
    const BOUNDARIES: [&str; 7] = ["</td", "</th", "</tr", "</table", "<td", "<th", "<tr"];
    lc[from..]
        .match_indices('<')
        .map(|(rel, _)| from + rel)
        .find(|&at| BOUNDARIES.iter().any(|b| lc[at..].starts_with(b)))
        .unwrap_or(lc.len())
}

/// Value of attribute `name` inside an opening tag such as `<a class="x" href='/y'>`.
/// Handles double, single and unquoted values. Entities are not decoded.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let body = open_tag
        .trim_start_matches('<')
        .trim_end_matches('>')
        .trim_end_matches('/');
    let mut chars = body.char_indices().peekable();

    // skip the tag name
    while let Some(&(_, c)) = chars.peek() {
        if c.is_whitespace() { break; }
        chars.next();
    }

    loop {
        while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
            chars.next();
        }
        let (key_start, _) = *chars.peek()?;
        let mut key_end = body.len();
        while let Some(&(i, c)) = chars.peek() {
            if c == '=' || c.is_whitespace() { key_end = i; break; }
            chars.next();
        }
        let key = &body[key_start..key_end];

        while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
            chars.next();
        }
        let value = if matches!(chars.peek(), Some(&(_, '='))) {
            chars.next();
            while matches!(chars.peek(), Some(&(_, c)) if c.is_whitespace()) {
                chars.next();
            }
            match chars.peek().copied() {
                Some((i, q)) if q == '"' || q == '\'' => {
                    chars.next();
                    let mut end = body.len();
                    for (j, c) in chars.by_ref() {
                        if c == q { end = j; break; }
                    }
                    &body[i + 1..end]
                }
                Some((i, _)) => {
                    let mut end = body.len();
                    while let Some(&(j, c)) = chars.peek() {
                        if c.is_whitespace() { end = j; break; }
                        chars.next();
                    }
                    &body[i..end]
                }
                None => "",
            }
        } else {
            ""
        };

        if key.eq_ignore_ascii_case(name) {
            return Some(value.to_string());
        }
    }
}

/// True when the tag's `class` attribute lists `class` as one of its tokens.
pub fn has_class(open_tag: &str, class: &str) -> bool {
    attr_value(open_tag, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// Minimal entity decoding for attribute values and text.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
