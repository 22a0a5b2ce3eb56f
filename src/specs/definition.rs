// src/specs/definition.rs

use roxmltree::{ Document, ParsingOptions };

use crate::config::consts::{ DATA_TABLE_ATTR, OPTIONS_TAG, SHARED_ROOT_TAGS };
use crate::error::{ Error, Result };

/// The parts of a tool definition document we care about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolDefinition {
    pub root_tag: String,
    /// Root `id` attribute, if any. Only meaningful for non-shared documents.
    pub id: Option<String>,
    /// `from_data_table` values of every `<options>` below the root, document order.
    pub data_tables: Vec<String>,
}

impl ToolDefinition {
    /// Parse one XML document. `url` is only used to label parse errors.
    pub fn parse(xml: &str, url: &str) -> Result<Self> {
        let opts = ParsingOptions { allow_dtd: true, ..ParsingOptions::default() };
        let doc = Document::parse_with_options(xml, opts)
            .map_err(|source| Error::Xml { url: url.to_string(), source })?;

        let root = doc.root_element();
        let data_tables = root
            .descendants()
            .skip(1)
            .filter(|n| {
                n.is_element()
                    && n.tag_name().namespace().is_none()
                    && n.tag_name().name() == OPTIONS_TAG
            })
            .filter_map(|n| n.attribute(DATA_TABLE_ATTR))
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            root_tag: root.tag_name().name().to_string(),
            id: root.attribute("id").map(str::to_string),
            data_tables,
        })
    }

    /// `macros` / `tokens` includes carry no tool id and are never identity-checked.
    pub fn is_shared(&self) -> bool {
        is_shared_tag(&self.root_tag)
    }
}

pub fn is_shared_tag(tag: &str) -> bool {
    SHARED_ROOT_TAGS.contains(&tag)
}

/// Identity rule: a declared id must equal the expected tool name exactly.
/// A missing id never matches.
pub fn id_matches(declared: Option<&str>, tool_name: &str) -> bool {
    declared == Some(tool_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAKTA: &str = r#"<?xml version="1.0"?>
<tool id="bakta" name="Bakta" version="1.9.4">
  <macros><import>macro.xml</import></macros>
  <inputs>
    <section name="input_option">
      <conditional name="db_select">
        <param name="bakta_db_select" type="select">
          <options from_data_table="bakta_db">
            <filter type="sort_by" column="2"/>
          </options>
        </param>
      </conditional>
      <param name="amrfinder" type="select">
        <options from_data_table="amrfinderplus_versioned_database"/>
      </param>
      <param name="plain" type="select">
        <options from_file="x.loc"/>
        <options from_data_table=""/>
      </param>
    </section>
  </inputs>
</tool>"#;

    #[test]
    fn collects_nested_options_in_document_order() {
        let def = ToolDefinition::parse(BAKTA, "u").unwrap();
        assert_eq!(def.root_tag, "tool");
        assert_eq!(def.id.as_deref(), Some("bakta"));
        assert_eq!(def.data_tables, vec!["bakta_db", "amrfinderplus_versioned_database"]);
        assert!(!def.is_shared());
    }

    #[test]
    fn shared_roots() {
        let def = ToolDefinition::parse(
            r#"<macros><xml name="db"><options from_data_table="kraken2_databases"/></xml></macros>"#,
            "u",
        )
        .unwrap();
        assert!(def.is_shared());
        assert_eq!(def.id, None);
        assert_eq!(def.data_tables, vec!["kraken2_databases"]);

        assert!(is_shared_tag("tokens"));
        assert!(!is_shared_tag("tool"));
    }

    #[test]
    fn root_options_is_not_collected() {
        let def = ToolDefinition::parse(r#"<options from_data_table="self"/>"#, "u").unwrap();
        assert!(def.data_tables.is_empty());
    }

    #[test]
    fn identity_is_exact() {
        assert!(id_matches(Some("bakta"), "bakta"));
        assert!(!id_matches(Some("Bakta"), "bakta"));
        assert!(!id_matches(None, "bakta"));
    }

    #[test]
    fn malformed_xml_is_an_error() {
        let err = ToolDefinition::parse("<tool id='x'><inputs></tool>", "https://x/a.xml").unwrap_err();
        assert!(matches!(err, Error::Xml { ref url, .. } if url == "https://x/a.xml"));
    }
}
