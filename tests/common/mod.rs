// tests/common/mod.rs
//
// Canned toolshed for integration tests: URL -> body, with a request log.
//
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use data_table_deps::core::Fetch;
use data_table_deps::{ Error, Result };

pub const HOST: &str = "ts.test";
pub const BASE_URL: &str = "https://ts.test";

#[derive(Default)]
pub struct FakeShed {
    pages: HashMap<String, String>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeShed {
    /// Register a repository listing page holding `files` (names under file/tip/).
    pub fn repo(mut self, repo_path: &str, files: &[&str]) -> Self {
        let cells: String = files
            .iter()
            .map(|f| {
                format!(
                    "<tr class=\"fileline\"><td class=\"filename\"><a href=\"/{repo_path}/file/tip/{f}\">\n\
                     <img src=\"/static/coal-file.png\" alt=\"file\"/> {f}</a></td><td class=\"size\">1 KiB</td></tr>\n"
                )
            })
            .collect();
        let page = format!("<html><body><table class=\"bigtable\">\n{cells}</table></body></html>");
        self.pages.insert(format!("https://{HOST}/{repo_path}/file/tip"), page);
        self
    }

    /// Register the raw content of one file.
    pub fn file(mut self, repo_path: &str, name: &str, xml: &str) -> Self {
        self.pages.insert(format!("{BASE_URL}/{repo_path}/raw-file/tip/{name}"), xml.to_string());
        self
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|u| *u == url).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Fetch for FakeShed {
    fn get(&self, url: &str) -> Result<String> {
        self.calls.borrow_mut().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or(Error::Status { url: url.to_string(), status: 404 })
    }
}

pub fn tool_xml(id: &str, tables: &[&str]) -> String {
    let opts: String = tables
        .iter()
        .map(|t| format!("<param name=\"p\" type=\"select\"><options from_data_table=\"{t}\"/></param>"))
        .collect();
    format!("<?xml version=\"1.0\"?>\n<tool id=\"{id}\" name=\"{id}\"><inputs><section name=\"s\">{opts}</section></inputs></tool>")
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("dtd_it_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
