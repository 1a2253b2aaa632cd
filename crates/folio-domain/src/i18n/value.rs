use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::shared::{DomainError, JsonResultExt};

/// Key → value mapping for one language
pub type Dictionary = BTreeMap<String, TranslationValue>;

/// A translation entry: plain text, or nested structure addressed by dotted keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Text(String),
    /// `None` marks a `null` slot; it keeps its index but never resolves
    List(Vec<Option<TranslationValue>>),
    Map(Dictionary),
}

impl TranslationValue {
    /// Convert a JSON value. `null` has no translation and yields `None`;
    /// numbers and booleans are kept as their JSON text. Inside a list a `null` stays
    /// as an empty slot so later elements keep their indices.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(TranslationValue::Text(s)),
            Value::Bool(b) => Some(TranslationValue::Text(b.to_string())),
            Value::Number(n) => Some(TranslationValue::Text(n.to_string())),
            Value::Array(items) => Some(TranslationValue::List(
                items.into_iter().map(TranslationValue::from_json).collect(),
            )),
            Value::Object(map) => Some(TranslationValue::Map(dictionary_from_object(map))),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text as-is; nested values as compact JSON
    pub fn to_display_string(&self) -> String {
        match self {
            TranslationValue::Text(text) => text.clone(),
            other => serde_json::to_string(other).unwrap_or_default(),
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        TranslationValue::Text(text.to_string())
    }
}

impl From<String> for TranslationValue {
    fn from(text: String) -> Self {
        TranslationValue::Text(text)
    }
}

fn dictionary_from_object(map: serde_json::Map<String, Value>) -> Dictionary {
    map.into_iter()
        .filter_map(|(key, value)| TranslationValue::from_json(value).map(|v| (key, v)))
        .collect()
}

/// Parse the contents of a translation file. The top level must be a JSON object.
pub fn parse_dictionary(raw: &str) -> Result<Dictionary, DomainError> {
    let value: Value = serde_json::from_str(raw).to_parse_err("invalid translation JSON")?;
    match value {
        Value::Object(map) => Ok(dictionary_from_object(map)),
        other => Err(DomainError::Parse(format!(
            "translation file must contain an object, found {}",
            json_type_name(&other)
        ))),
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Replace the first `{0}` placeholder with `fallback`
pub fn substitute_placeholder(text: &str, fallback: &str) -> String {
    text.replacen("{0}", fallback, 1)
}

/// Language code → dictionary. Built completely, then published as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TranslationTable {
    languages: BTreeMap<String, Dictionary>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, lang: impl Into<String>, dictionary: Dictionary) -> Self {
        self.insert(lang, dictionary);
        self
    }

    pub fn insert(&mut self, lang: impl Into<String>, dictionary: Dictionary) {
        self.languages.insert(lang.into(), dictionary);
    }

    pub fn dictionary(&self, lang: &str) -> Option<&Dictionary> {
        self.languages.get(lang)
    }
}
