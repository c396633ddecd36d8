//! Test utilities for boomi-guard integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// A component ID present in the built-in blocklist
pub const DEFAULT_BLOCKLISTED_ID: &str = "ab12cd34-5678-90ef-ghij-klmnopqrstuv";

/// Build a Boomi-style process document from `(shapetype, userlabel, componentId)` triples
pub fn process_xml(shapes: &[(&str, &str, Option<&str>)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <Component componentId=\"proc-0001\" type=\"process\" name=\"Test\">\n\
         <object><process><shapes>\n",
    );
    for (i, (shape_type, label, component_id)) in shapes.iter().enumerate() {
        xml.push_str(&format!(
            "<shape name=\"shape{}\" shapetype=\"{}\" userlabel=\"{}\"",
            i + 1,
            shape_type,
            label
        ));
        if let Some(id) = component_id {
            xml.push_str(&format!(" componentId=\"{}\"", id));
        }
        xml.push_str("/>\n");
    }
    xml.push_str("</shapes></process></object>\n</Component>\n");
    xml
}

/// A process that satisfies every rule under the default configuration
pub fn compliant_process() -> String {
    process_xml(&[
        ("start", "Start", None),
        ("returndocuments", "Success", None),
        ("returndocuments", "Error Exit", None),
    ])
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
