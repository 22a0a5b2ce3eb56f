// src/tool.rs
// Toolshed identifiers.
//
//   tool id:  toolshed.g2.bx.psu.edu/repos/iuc/bakta/bakta/1.9.4
//   gxid:     toolshed.g2.bx.psu.edu/repos/iuc/bakta/bakta
//   repo:     toolshed.g2.bx.psu.edu/repos/iuc/bakta
//   name:     bakta

use crate::error::{ Error, Result };

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolRef {
    pub repository: String,
    pub tool_name: String,
}

impl ToolRef {
    /// Parse a versionless id, `<host>/<path…>/<tool-name>`.
    pub fn from_gxid(gxid: &str) -> Result<Self> {
        let (repository, tool_name) = split_last(gxid).ok_or_else(|| Error::ToolId(gxid.to_string()))?;
        Ok(Self { repository: repository.to_string(), tool_name: tool_name.to_string() })
    }

    /// Parse an installed-tool id as found in the inventory: the gxid plus a trailing version.
    pub fn from_tool_id(tool_id: &str) -> Result<Self> {
        let (gxid, _version) = split_last(tool_id).ok_or_else(|| Error::ToolId(tool_id.to_string()))?;
        Self::from_gxid(gxid).map_err(|_| Error::ToolId(tool_id.to_string()))
    }

    pub fn gxid(&self) -> String {
        format!("{}/{}", self.repository, self.tool_name)
    }
}

fn split_last(s: &str) -> Option<(&str, &str)> {
    let (head, tail) = s.rsplit_once('/')?;
    if head.is_empty() || tail.is_empty() {
        return None;
    }
    Some((head, tail))
}
