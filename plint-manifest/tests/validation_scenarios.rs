use plint_manifest::{validate, Catalog, Report, Validator};
use serde_json::{json, Value};

fn minimal_manifest() -> Value {
    json!({
        "name": "x",
        "version": "1.0.0",
        "description": "A valid plugin description.",
        "author": {"name": "A"}
    })
}

fn complete_manifest() -> Value {
    json!({
        "name": "release-helper",
        "displayName": "Release Helper",
        "version": "2.1.0-beta.1+build.7",
        "description": "Automates changelogs and release notes.",
        "longDescription": "Release Helper collects merged pull requests, groups them by label and drafts release notes and changelog entries that can be reviewed before publishing.",
        "author": {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "url": "https://example.com/jane",
            "organization": "Example Co"
        },
        "category": "Productivity",
        "subcategory": "Automation",
        "keywords": ["release", "changelog", "automation"],
        "tags": ["git"],
        "license": "MIT",
        "homepage": "https://example.com/release-helper",
        "repository": "https://github.com/example/release-helper",
        "installation": {"command": "plugin install release-helper"},
        "components": {
            "commands": [{
                "name": "release-notes",
                "description": "Draft release notes",
                "usage": "/release-notes <tag>",
                "examples": ["/release-notes v2.0.0"]
            }],
            "agents": [{
                "name": "changelog-writer",
                "description": "Writes changelog entries",
                "capabilities": ["summarize", "group"],
                "model": "default"
            }],
            "skills": [{
                "name": "label-grouping",
                "description": "Groups pull requests by label",
                "category": "Automation",
                "input": {"type": "array"},
                "output": {"type": "object"}
            }],
            "mcpServers": [{
                "name": "git-history",
                "description": "Serves repository history",
                "command": "git-history-server",
                "args": ["--stdio"]
            }]
        },
        "security": {"permissions": ["read:repo"], "privacy": "No data leaves the machine."},
        "usage": {"quickStart": "Run /release-notes", "examples": ["/release-notes v1.0.0"]},
        "support": {"documentation": "https://example.com/docs", "issues": "https://example.com/issues"}
    })
}

fn description_of(length: usize) -> Value {
    let mut manifest = minimal_manifest();
    manifest["description"] = Value::String("d".repeat(length));
    manifest
}

fn has_length_warning(report: &Report, needle: &str) -> bool {
    report.warnings.iter().any(|warning| warning.contains(needle))
}

#[test]
fn test_minimal_manifest_is_valid_with_suggestions() {
    let report = validate(&minimal_manifest());
    assert!(report.valid);
    assert!(report.errors.is_empty());
    assert!(report
        .suggestions
        .contains(&"Consider adding displayName field for better plugin presentation".to_string()));
    assert!(report
        .suggestions
        .contains(&"Consider adding category field for better plugin presentation".to_string()));
    assert!(report.score < 100);
    assert!(report.score > 0);
}

#[test]
fn test_missing_author_is_invalid() {
    let mut manifest = minimal_manifest();
    manifest
        .as_object_mut()
        .expect("fixture is an object")
        .remove("author");

    let report = validate(&manifest);
    assert!(!report.valid);
    assert!(report
        .errors
        .contains(&"Missing required field: author".to_string()));
    assert!(report.score <= 80);
}

#[test]
fn test_component_slot_not_an_array() {
    let mut manifest = minimal_manifest();
    manifest["components"] = json!({"commands": {"name": "go", "description": "Run"}});

    let report = validate(&manifest);
    assert!(!report.valid);
    assert!(report
        .errors
        .contains(&"Components.commands must be an array".to_string()));
}

#[test]
fn test_unknown_subcategory_lists_valid_ones() {
    let mut manifest = minimal_manifest();
    manifest["category"] = json!("Productivity");
    manifest["subcategory"] = json!("Nonexistent");

    let report = validate(&manifest);
    let warning = report
        .warnings
        .iter()
        .find(|warning| warning.contains("Nonexistent"))
        .expect("unknown subcategory warning");
    assert!(warning.contains("Unknown subcategory"));
    for subcategory in ["Automation", "Documentation", "Project Management", "Workflow"] {
        assert!(warning.contains(subcategory), "missing {}", subcategory);
    }
}

#[test]
fn test_mcp_server_without_command() {
    let mut manifest = minimal_manifest();
    manifest["components"] = json!({
        "mcpServers": [{"name": "srv", "description": "A server", "args": []}]
    });

    let report = validate(&manifest);
    assert!(!report.valid);
    assert_eq!(
        report.errors,
        vec!["mcpServers[0]: Missing required command field"]
    );
}

#[test]
fn test_skill_without_data_shapes_warns() {
    let mut manifest = minimal_manifest();
    manifest["components"] = json!({
        "skills": [{"name": "summarize", "description": "Summarizes text", "category": "Analysis"}]
    });

    let report = validate(&manifest);
    assert!(report.valid);
    assert_eq!(
        report.warnings,
        vec![
            "No category specified - this affects discoverability",
            "skills[0]: Missing recommended input field",
            "skills[0]: Missing recommended output field",
        ]
    );
}

#[test]
fn test_mcp_server_without_args_warns() {
    let mut manifest = minimal_manifest();
    manifest["components"] = json!({
        "mcpServers": [{"name": "srv", "description": "A server", "command": "srv-bin"}]
    });

    let report = validate(&manifest);
    assert!(report.valid);
    assert!(report
        .warnings
        .contains(&"mcpServers[0]: Missing recommended args field".to_string()));
}

#[test]
fn test_mcp_server_command_must_be_string() {
    let mut manifest = minimal_manifest();
    manifest["components"] = json!({
        "mcpServers": [{"name": "srv", "description": "A server", "command": ["srv-bin"], "args": []}]
    });

    let report = validate(&manifest);
    assert!(!report.valid);
    assert_eq!(report.errors, vec!["mcpServers[0]: command must be a string"]);
}

#[test]
fn test_components_not_an_object_keeps_manifest_valid() {
    let mut manifest = minimal_manifest();
    manifest["components"] = json!("commands");

    let report = validate(&manifest);
    assert!(report.valid);
    assert!(report
        .warnings
        .contains(&"Field components should be an object".to_string()));
}

#[test]
fn test_component_findings_carry_index() {
    let mut manifest = minimal_manifest();
    manifest["components"] = json!({
        "commands": [
            {"name": "a", "description": "first", "usage": "/a"},
            {"name": "b", "description": "second", "usage": "/b"},
            {"description": "third"}
        ]
    });

    let report = validate(&manifest);
    assert!(report
        .errors
        .contains(&"commands[2]: Missing required field: name".to_string()));
    assert!(report
        .warnings
        .contains(&"commands[2]: Missing recommended usage field".to_string()));
}

#[test]
fn test_complete_manifest_scores_perfectly() {
    let report = validate(&complete_manifest());
    assert!(report.valid, "errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);
    assert!(
        report.suggestions.is_empty(),
        "suggestions: {:?}",
        report.suggestions
    );
    assert_eq!(report.score, 100);
}

#[test]
fn test_well_typed_required_fields_yield_no_root_or_author_errors() {
    let mut manifest = minimal_manifest();
    // Malformed component still errors, but not from the root or author checks.
    manifest["components"] = json!({"skills": "everything"});

    let report = validate(&manifest);
    assert_eq!(report.errors, vec!["Components.skills must be an array"]);
}

#[test]
fn test_validation_is_idempotent() {
    let validator = Validator::new();
    let mut manifest = complete_manifest();
    manifest["category"] = json!("Unknown");
    manifest["components"]["agents"] = json!([{"name": "a"}]);

    let first = validator.validate(&manifest);
    let second = validator.validate(&manifest);
    assert_eq!(first, second);
}

#[test]
fn test_input_is_not_mutated() {
    let manifest = complete_manifest();
    let before = manifest.clone();
    let _ = validate(&manifest);
    assert_eq!(manifest, before);
}

#[test]
fn test_description_length_boundaries() {
    assert!(!has_length_warning(&validate(&description_of(10)), "too short"));
    assert!(has_length_warning(&validate(&description_of(9)), "too short"));
    assert!(!has_length_warning(&validate(&description_of(200)), "too long"));
    assert!(has_length_warning(&validate(&description_of(201)), "too long"));
}

#[test]
fn test_description_length_counts_characters() {
    let mut manifest = minimal_manifest();
    manifest["description"] = json!("ünïcödé✓✓✓");
    let report = validate(&manifest);
    assert!(!has_length_warning(&report, "too short"));
}

#[test]
fn test_empty_document_produces_complete_report() {
    let report = validate(&json!({}));
    assert!(!report.valid);
    assert_eq!(report.score, 0);
    assert!(!report.errors.is_empty());
    assert!(!report.warnings.is_empty());
    assert_eq!(report.suggestions.len(), 16);
}

#[test]
fn test_custom_taxonomy_with_many_categories() {
    let catalog = (0..12).fold(Catalog::without_taxonomy(), |catalog, i| {
        catalog.with_category(format!("Category {}", i), [format!("Sub {}", i)])
    });
    let validator = Validator::with_catalog(catalog);

    let mut manifest = minimal_manifest();
    manifest["category"] = json!("Category 11");
    manifest["subcategory"] = json!("Sub 11");
    let report = validator.validate(&manifest);
    assert!(report.warnings.is_empty(), "warnings: {:?}", report.warnings);

    manifest["subcategory"] = json!("Sub 3");
    let report = validator.validate(&manifest);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn test_score_matches_finding_counts() {
    for manifest in [minimal_manifest(), complete_manifest(), json!({})] {
        let report = validate(&manifest);
        assert_eq!(
            report.score,
            plint_manifest::score(
                report.errors.len(),
                report.warnings.len(),
                report.suggestions.len()
            )
        );
    }
}
