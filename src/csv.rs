// src/csv.rs
use std::io::{ self, Write };
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV parser: `"` quoting with `""` escapes, CRLF tolerant,
/// blank lines dropped.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if matches!(chars.peek(), Some('"')) {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.is_empty() => in_quotes = true,
            c if c == sep && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                push_unless_blank(&mut rows, take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Last line without a trailing newline (or an unterminated quote).
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        push_unless_blank(&mut rows, row);
    }
    rows
}

fn push_unless_blank(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    if !(row.len() == 1 && row[0].is_empty()) {
        rows.push(row);
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 { write!(w, "{}", sep)?; }
        if needs_quotes(cell, sep) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tsv_with_quotes_and_crlf() {
        let text = "Tool ID\tName\r\na/b/c/1\t\"x\ty\"\r\n\r\nd/e/f/2\t\"say \"\"hi\"\"\"";
        let rows = parse_rows(text, '\t');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], vec!["Tool ID", "Name"]);
        assert_eq!(rows[1], vec!["a/b/c/1", "x\ty"]);
        assert_eq!(rows[2], vec!["d/e/f/2", "say \"hi\""]);
    }

    #[test]
    fn trailing_newline_adds_no_row() {
        assert_eq!(parse_rows("a\tb\n", '\t').len(), 1);
        assert!(parse_rows("", '\t').is_empty());
    }

    #[test]
    fn empty_trailing_field_is_kept() {
        assert_eq!(parse_rows("a\t\n", '\t'), vec![vec!["a".to_string(), String::new()]]);
    }

    #[test]
    fn writer_quotes_only_when_needed() {
        let mut buf = Vec::new();
        let row = vec!["plain".to_string(), "a, b".to_string(), "tab\there".to_string()];
        write_row(&mut buf, &row, '\t').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "plain\ta, b\t\"tab\there\"\n");
    }
}
