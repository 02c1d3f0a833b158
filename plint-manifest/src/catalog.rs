//! Static rule data the validator checks manifests against.
//!
//! Everything here is plain data. The check engine reads it but never
//! mutates it, so one `Catalog` can back any number of validations.

use indexmap::IndexMap;
use serde_json::Value;

/// Shape a field value is expected to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Any,
    String,
    Sequence,
    Mapping,
}

impl Shape {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Shape::Any => true,
            Shape::String => value.is_string(),
            Shape::Sequence => value.is_array(),
            Shape::Mapping => value.is_object(),
        }
    }

    /// Noun phrase used in messages, e.g. "an array".
    pub fn describe(self) -> &'static str {
        match self {
            Shape::Any => "a value",
            Shape::String => "a string",
            Shape::Sequence => "an array",
            Shape::Mapping => "an object",
        }
    }
}

/// How strongly a component field is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Missing or mis-shaped is an error.
    Required,
    /// Missing or mis-shaped is a warning.
    Recommended,
    /// Missing is fine; mis-shaped is an error.
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub shape: Shape,
    pub presence: Presence,
}

const fn rule(field: &'static str, shape: Shape, presence: Presence) -> FieldRule {
    FieldRule {
        field,
        shape,
        presence,
    }
}

const COMMAND_RULES: &[FieldRule] = &[
    rule("usage", Shape::String, Presence::Recommended),
    rule("examples", Shape::Sequence, Presence::Optional),
];

const AGENT_RULES: &[FieldRule] = &[
    rule("capabilities", Shape::Sequence, Presence::Recommended),
    rule("model", Shape::String, Presence::Recommended),
];

const SKILL_RULES: &[FieldRule] = &[
    rule("category", Shape::String, Presence::Recommended),
    rule("input", Shape::Mapping, Presence::Recommended),
    rule("output", Shape::Mapping, Presence::Recommended),
];

const MCP_SERVER_RULES: &[FieldRule] = &[
    rule("command", Shape::String, Presence::Required),
    rule("args", Shape::Sequence, Presence::Recommended),
];

/// Fields every component must carry regardless of kind.
pub const COMPONENT_BASE_FIELDS: [&str; 2] = ["name", "description"];

/// The four component slots a manifest may declare under `components`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Command,
    Agent,
    Skill,
    McpServer,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Command,
        ComponentKind::Agent,
        ComponentKind::Skill,
        ComponentKind::McpServer,
    ];

    /// Key of this kind's slot inside `components`.
    pub fn slot(self) -> &'static str {
        match self {
            ComponentKind::Command => "commands",
            ComponentKind::Agent => "agents",
            ComponentKind::Skill => "skills",
            ComponentKind::McpServer => "mcpServers",
        }
    }

    pub fn from_slot(slot: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slot() == slot)
    }

    /// Kind-specific field expectations, checked after the base fields.
    pub fn rules(self) -> &'static [FieldRule] {
        match self {
            ComponentKind::Command => COMMAND_RULES,
            ComponentKind::Agent => AGENT_RULES,
            ComponentKind::Skill => SKILL_RULES,
            ComponentKind::McpServer => MCP_SERVER_RULES,
        }
    }
}

/// A required top-level field and the shape its value must have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootField {
    pub name: String,
    pub shape: Shape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub required_root_fields: Vec<RootField>,
    pub required_author_fields: Vec<String>,
    pub recommended_fields: Vec<String>,
    /// Category name to its allowed subcategories, in display order.
    pub taxonomy: IndexMap<String, Vec<String>>,
}

impl Catalog {
    /// Catalog with the required and recommended field lists but no categories.
    pub fn without_taxonomy() -> Self {
        let root = |name: &str, shape| RootField {
            name: name.to_string(),
            shape,
        };

        Self {
            required_root_fields: vec![
                root("name", Shape::String),
                root("version", Shape::String),
                root("description", Shape::String),
                // The author check owns the author shape.
                root("author", Shape::Any),
            ],
            required_author_fields: vec!["name".to_string()],
            recommended_fields: [
                "displayName",
                "longDescription",
                "category",
                "subcategory",
                "keywords",
                "tags",
                "license",
                "homepage",
                "repository",
                "installation",
                "usage",
                "security",
                "support",
            ]
            .iter()
            .map(|field| field.to_string())
            .collect(),
            taxonomy: IndexMap::new(),
        }
    }

    /// Add (or replace) a category and its allowed subcategories.
    pub fn with_category<I, S>(mut self, category: impl Into<String>, subcategories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taxonomy.insert(
            category.into(),
            subcategories.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn subcategories(&self, category: &str) -> Option<&[String]> {
        self.taxonomy.get(category).map(Vec::as_slice)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.taxonomy.keys().map(String::as_str).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::without_taxonomy()
            .with_category(
                "Development",
                ["Code Generation", "Testing", "Debugging", "Refactoring"],
            )
            .with_category(
                "Productivity",
                ["Automation", "Documentation", "Project Management", "Workflow"],
            )
            .with_category(
                "Data",
                ["Analysis", "Visualization", "Transformation", "Databases"],
            )
            .with_category(
                "Security",
                ["Auditing", "Compliance", "Secrets Management", "Vulnerability Scanning"],
            )
            .with_category("Integration", ["APIs", "Cloud", "DevOps", "Communication"])
    }
}
