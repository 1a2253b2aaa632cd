use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One portfolio entry as stored in the project data file.
///
/// `title` and `description` hold translation keys. Fields this model does not know
/// about are kept in `extra` and passed through to the page untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Technology tags: a list, or a single scalar in older data files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<Value>,

    /// Markdown file path, relative to the data directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A project ready for the page: localized text, list-shaped stack, rendered README
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectView {
    pub title: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,

    /// Present whenever `readme` is; empty when rendering was not possible
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme_html: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wrap a scalar stack into a one-element list; lists pass through unchanged
pub fn normalize_stack(stack: Option<Value>) -> Option<Vec<Value>> {
    match stack? {
        Value::Array(items) => Some(items),
        scalar => Some(vec![scalar]),
    }
}

impl ProjectView {
    /// Start a view from a copy of `record` with the stack normalized.
    /// Text fields still hold the raw keys; the service localizes them afterwards.
    pub fn from_record(record: &ProjectRecord) -> Self {
        let record = record.clone();
        Self {
            title: record.title.unwrap_or_default(),
            description: record.description.unwrap_or_default(),
            stack: normalize_stack(record.stack),
            readme: record.readme,
            readme_html: None,
            extra: record.extra,
        }
    }
}
