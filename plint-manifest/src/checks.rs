//! Individual manifest checks.
//!
//! Each check is a pure function of the manifest and catalog that returns its
//! own findings. The validator runs them in the order of [`CHECKS`] and
//! concatenates the results, so no check can see or disturb another.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use url::Url;

use crate::catalog::{Catalog, ComponentKind, FieldRule, Presence, COMPONENT_BASE_FIELDS};
use crate::finding::Findings;
use crate::manifest::{display_value, Manifest};

pub const DESCRIPTION_MIN_CHARS: usize = 10;
pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const LONG_DESCRIPTION_MIN_CHARS: usize = 100;
pub const MIN_KEYWORDS: usize = 3;

static SEMVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\.\d+\.\d+(?:-[0-9A-Za-z.-]+)?(?:\+[0-9A-Za-z.-]+)?$")
        .expect("semver pattern is valid")
});

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

pub type Check = fn(&Manifest<'_>, &Catalog) -> Findings;

/// All checks in execution order, with the name used in logs.
pub const CHECKS: [(&str, Check); 9] = [
    ("root_fields", check_root_fields),
    ("author", check_author),
    ("version", check_version),
    ("category", check_category),
    ("components", check_components),
    ("security", check_security),
    ("usage", check_usage),
    ("recommended_fields", check_recommended_fields),
    ("content_quality", check_content_quality),
];

pub fn is_semver(version: &str) -> bool {
    SEMVER_RE.is_match(version)
}

pub fn is_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_url(candidate: &str) -> bool {
    Url::parse(candidate).is_ok()
}

pub fn check_root_fields(manifest: &Manifest<'_>, catalog: &Catalog) -> Findings {
    let mut findings = Findings::new();

    for field in &catalog.required_root_fields {
        match manifest.get(&field.name) {
            None => findings.error(format!("Missing required field: {}", field.name)),
            Some(value) if !field.shape.matches(value) => findings.error(format!(
                "Field {} must be {}",
                field.name,
                field.shape.describe()
            )),
            Some(_) => {}
        }
    }

    if let Some(description) = manifest.str_field("description") {
        let length = description.chars().count();
        if length < DESCRIPTION_MIN_CHARS {
            findings.warning(format!(
                "Description is too short ({} characters, minimum {})",
                length, DESCRIPTION_MIN_CHARS
            ));
        } else if length > DESCRIPTION_MAX_CHARS {
            findings.warning(format!(
                "Description is too long ({} characters, maximum {})",
                length, DESCRIPTION_MAX_CHARS
            ));
        }
    }

    findings
}

pub fn check_author(manifest: &Manifest<'_>, catalog: &Catalog) -> Findings {
    let mut findings = Findings::new();

    let Some(author) = manifest.get("author") else {
        findings.error("Missing required field: author");
        return findings;
    };
    let Some(author) = author.as_object() else {
        findings.error("Field author must be an object");
        return findings;
    };

    for field in &catalog.required_author_fields {
        match author.get(field) {
            None => findings.error(format!("Missing required author field: {}", field)),
            Some(value) if !value.is_string() => {
                findings.error(format!("Field author.{} must be a string", field))
            }
            Some(_) => {}
        }
    }

    if let Some(email) = author.get("email") {
        if !email.as_str().is_some_and(is_email) {
            findings.warning(format!(
                "Author email '{}' does not look like a valid email address",
                display_value(email)
            ));
        }
    }

    if let Some(url) = author.get("url") {
        if !url.as_str().is_some_and(is_url) {
            findings.warning(format!(
                "Author url '{}' is not a valid URL",
                display_value(url)
            ));
        }
    }

    findings
}

pub fn check_version(manifest: &Manifest<'_>, _catalog: &Catalog) -> Findings {
    let mut findings = Findings::new();

    match manifest.get("version") {
        None => findings.error("Missing required field: version"),
        // A non-string version is already an error from the root field check.
        Some(Value::String(version)) if !is_semver(version) => findings.warning(format!(
            "Version '{}' does not follow semantic versioning (major.minor.patch)",
            version
        )),
        Some(_) => {}
    }

    findings
}

pub fn check_category(manifest: &Manifest<'_>, catalog: &Catalog) -> Findings {
    let mut findings = Findings::new();

    let Some(category) = manifest.get("category") else {
        findings.warning("No category specified - this affects discoverability");
        return findings;
    };

    let category_name = display_value(category);
    let allowed = category.as_str().and_then(|name| catalog.subcategories(name));
    let Some(allowed) = allowed else {
        findings.warning(format!(
            "Unknown category '{}'. Valid categories: {}",
            category_name,
            catalog.category_names().join(", ")
        ));
        return findings;
    };

    if let Some(subcategory) = manifest.get("subcategory") {
        let known = subcategory
            .as_str()
            .is_some_and(|name| allowed.iter().any(|candidate| candidate == name));
        if !known {
            findings.warning(format!(
                "Unknown subcategory '{}' for category '{}'. Valid subcategories: {}",
                display_value(subcategory),
                category_name,
                allowed.join(", ")
            ));
        }
    }

    findings
}

pub fn check_components(manifest: &Manifest<'_>, _catalog: &Catalog) -> Findings {
    let mut findings = Findings::new();

    let Some(components) = manifest.get("components") else {
        findings.suggestion(
            "Consider adding components (commands, agents, skills or mcpServers) to describe what the plugin provides",
        );
        return findings;
    };
    let Some(components) = components.as_object() else {
        findings.warning("Field components should be an object");
        return findings;
    };

    for kind in ComponentKind::ALL {
        let Some(slot) = components.get(kind.slot()) else {
            continue;
        };
        let Some(entries) = slot.as_array() else {
            findings.error(format!("Components.{} must be an array", kind.slot()));
            continue;
        };
        for (index, entry) in entries.iter().enumerate() {
            check_component(kind, index, entry, &mut findings);
        }
    }

    findings
}

fn check_component(kind: ComponentKind, index: usize, entry: &Value, findings: &mut Findings) {
    let prefix = format!("{}[{}]", kind.slot(), index);

    let Some(component) = entry.as_object() else {
        findings.error(format!("{}: Component must be an object", prefix));
        return;
    };

    for field in COMPONENT_BASE_FIELDS {
        if !component.contains_key(field) {
            findings.error(format!("{}: Missing required field: {}", prefix, field));
        }
    }

    for rule in kind.rules() {
        apply_field_rule(&prefix, component, rule, findings);
    }
}

fn apply_field_rule(
    prefix: &str,
    component: &Map<String, Value>,
    rule: &FieldRule,
    findings: &mut Findings,
) {
    match (component.get(rule.field), rule.presence) {
        (None, Presence::Required) => {
            findings.error(format!("{}: Missing required {} field", prefix, rule.field))
        }
        (None, Presence::Recommended) => findings.warning(format!(
            "{}: Missing recommended {} field",
            prefix, rule.field
        )),
        (None, Presence::Optional) => {}
        (Some(value), _) if rule.shape.matches(value) => {}
        (Some(_), Presence::Recommended) => findings.warning(format!(
            "{}: {} should be {}",
            prefix,
            rule.field,
            rule.shape.describe()
        )),
        (Some(_), Presence::Required | Presence::Optional) => findings.error(format!(
            "{}: {} must be {}",
            prefix,
            rule.field,
            rule.shape.describe()
        )),
    }
}

pub fn check_security(manifest: &Manifest<'_>, _catalog: &Catalog) -> Findings {
    let mut findings = Findings::new();

    let Some(security) = manifest.get("security") else {
        findings.suggestion(
            "Consider adding a security section describing permissions and privacy practices",
        );
        return findings;
    };

    if !security.get("permissions").is_some_and(Value::is_array) {
        findings.warning("Security section should include a permissions array");
    }
    if security.get("privacy").is_none() {
        findings.warning("Security section should include a privacy statement");
    }

    findings
}

pub fn check_usage(manifest: &Manifest<'_>, _catalog: &Catalog) -> Findings {
    let mut findings = Findings::new();

    let Some(usage) = manifest.get("usage") else {
        findings.suggestion("Consider adding a usage section with a quickStart guide and examples");
        return findings;
    };

    if usage.get("quickStart").is_none() {
        findings.warning("Usage section should include a quickStart guide");
    }
    if usage.get("examples").is_some_and(|examples| !examples.is_array()) {
        findings.error("Usage examples must be an array");
    }

    findings
}

pub fn check_recommended_fields(manifest: &Manifest<'_>, catalog: &Catalog) -> Findings {
    let mut findings = Findings::new();

    for field in &catalog.recommended_fields {
        if !manifest.has(field) {
            findings.suggestion(format!(
                "Consider adding {} field for better plugin presentation",
                field
            ));
        }
    }

    findings
}

pub fn check_content_quality(manifest: &Manifest<'_>, _catalog: &Catalog) -> Findings {
    let mut findings = Findings::new();

    if let Some(long_description) = manifest.str_field("longDescription") {
        if long_description.chars().count() < LONG_DESCRIPTION_MIN_CHARS {
            findings.suggestion(format!(
                "Consider expanding longDescription to at least {} characters",
                LONG_DESCRIPTION_MIN_CHARS
            ));
        }
    }

    if let Some(keywords) = manifest.get("keywords").and_then(Value::as_array) {
        if keywords.len() < MIN_KEYWORDS {
            findings.suggestion(format!(
                "Consider adding more keywords (at least {}) to improve discoverability",
                MIN_KEYWORDS
            ));
        }
    }

    if let Some(components) = manifest.object("components") {
        if components.is_empty() {
            findings.suggestion("Consider declaring at least one component type");
        } else if components.len() == 1 && components.contains_key("commands") {
            findings.suggestion("Consider adding agents or skills alongside your commands");
        }
    }

    if let Some(support) = manifest.get("support") {
        if support.get("documentation").is_none() {
            findings.suggestion("Consider adding a documentation link to the support section");
        }
    }

    findings
}
