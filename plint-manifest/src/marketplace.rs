//! Validation for marketplace catalogs: documents listing installable plugins.
//!
//! Every marketplace problem is an error; the result reuses [`Report`] so the
//! CLI renders and scores it the same way as a plugin manifest.

use serde_json::{Map, Value};
use tracing::info;

use crate::finding::Findings;
use crate::report::Report;

pub const REQUIRED_ROOT_FIELDS: [&str; 4] = ["name", "description", "owner", "plugins"];
pub const REQUIRED_PLUGIN_FIELDS: [&str; 4] = ["name", "description", "author", "source"];

/// Fields a plugin entry may carry.
pub const RECOGNIZED_PLUGIN_FIELDS: [&str; 10] = [
    "name",
    "version",
    "description",
    "author",
    "source",
    "homepage",
    "license",
    "keywords",
    "category",
    "repository",
];

pub fn validate_marketplace(document: &Value) -> Report {
    let mut findings = Findings::new();
    let root = document.as_object();
    let field = |name: &str| root.and_then(|map| map.get(name));

    for name in REQUIRED_ROOT_FIELDS {
        if field(name).is_none() {
            findings.error(format!("Missing required field: {}", name));
        }
    }

    if let Some(owner) = field("owner") {
        check_owner(owner, &mut findings);
    }

    if let Some(plugins) = field("plugins") {
        match plugins.as_array() {
            Some(entries) => {
                for (index, entry) in entries.iter().enumerate() {
                    check_plugin_entry(index, entry, &mut findings);
                }
            }
            None => findings.error("plugins must be an array"),
        }
    }

    let report = Report::from_findings(&findings);
    info!(
        valid = report.valid,
        errors = report.errors.len(),
        "marketplace validated"
    );
    report
}

fn check_owner(owner: &Value, findings: &mut Findings) {
    let Some(owner) = owner.as_object() else {
        findings.error("owner must be an object");
        return;
    };

    match owner.get("name") {
        None => findings.error("owner.name is required"),
        Some(name) if !name.is_string() => findings.error("owner.name must be a string"),
        Some(_) => {}
    }
}

fn check_plugin_entry(index: usize, entry: &Value, findings: &mut Findings) {
    let prefix = format!("plugins[{}]", index);

    let Some(plugin) = entry.as_object() else {
        findings.error(format!("{}: must be an object", prefix));
        return;
    };

    for name in REQUIRED_PLUGIN_FIELDS {
        if !plugin.contains_key(name) {
            findings.error(format!("{}.{}: is required", prefix, name));
        }
    }

    if let Some(author) = plugin.get("author") {
        check_plugin_author(&prefix, author, findings);
    }

    if let Some(source) = plugin.get("source") {
        match source.as_str() {
            None => findings.error(format!(
                "{}.source: must be a string (URL or path)",
                prefix
            )),
            Some(source) if !is_valid_source(source) => findings.error(format!(
                "{}.source: should be a valid URL, relative path, or local path",
                prefix
            )),
            Some(_) => {}
        }
    }

    for name in plugin.keys() {
        if !RECOGNIZED_PLUGIN_FIELDS.contains(&name.as_str()) {
            findings.error(format!(
                "{}: Unrecognized field '{}' - may not be supported in current schema",
                prefix, name
            ));
        }
    }
}

fn check_plugin_author(prefix: &str, author: &Value, findings: &mut Findings) {
    let Some(author) = author.as_object() else {
        findings.error(format!("{}.author: must be an object", prefix));
        return;
    };

    match author.get("name") {
        None => findings.error(format!("{}.author.name: is required", prefix)),
        Some(name) if !name.is_string() => {
            findings.error(format!("{}.author.name: must be a string", prefix))
        }
        Some(_) => {}
    }

    for name in ["email", "url"] {
        if optional_non_string(author, name) {
            findings.error(format!("{}.author.{}: must be a string", prefix, name));
        }
    }
}

fn optional_non_string(map: &Map<String, Value>, field: &str) -> bool {
    map.get(field).is_some_and(|value| !value.is_string())
}

/// An http(s) URL, an explicit relative or absolute path, or a bare name.
pub fn is_valid_source(source: &str) -> bool {
    source.starts_with("http://")
        || source.starts_with("https://")
        || source.starts_with("./")
        || source.starts_with('/')
        || !source.contains('/')
}
