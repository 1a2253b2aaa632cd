use super::value::{Dictionary, TranslationTable, TranslationValue};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Translation key not found: {0}")]
    NotFound(String),
}

/// Resolve `key` inside a single dictionary.
///
/// A key stored verbatim (flat `"home.title"` entries) wins; otherwise the key is split
/// on `.` and walked through nested maps, with numeric segments indexing into lists.
pub fn resolve<'a>(dictionary: &'a Dictionary, key: &str) -> Result<&'a TranslationValue, LookupError> {
    let not_found = || LookupError::NotFound(key.to_string());

    if key.is_empty() {
        return Err(not_found());
    }
    if let Some(value) = dictionary.get(key) {
        return Ok(value);
    }

    let mut segments = key.split('.');
    let first = segments.next().ok_or_else(not_found)?;
    let mut current = dictionary.get(first).ok_or_else(not_found)?;
    for segment in segments {
        current = step(current, segment).ok_or_else(not_found)?;
    }
    Ok(current)
}

fn step<'a>(value: &'a TranslationValue, segment: &str) -> Option<&'a TranslationValue> {
    match value {
        TranslationValue::Map(map) => map.get(segment),
        TranslationValue::List(items) => parse_index(segment)
            .and_then(|index| items.get(index))
            .and_then(Option::as_ref),
        TranslationValue::Text(_) => None,
    }
}

// Digits only: "+1" and "-0" are not indices
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Resolve against `lang`, then against `default_lang`
pub fn lookup<'a>(
    table: &'a TranslationTable,
    key: &str,
    lang: &str,
    default_lang: &str,
) -> Result<&'a TranslationValue, LookupError> {
    resolve_in(table, key, lang).or_else(|_| resolve_in(table, key, default_lang))
}

fn resolve_in<'a>(
    table: &'a TranslationTable,
    key: &str,
    lang: &str,
) -> Result<&'a TranslationValue, LookupError> {
    let dictionary = table
        .dictionary(lang)
        .ok_or_else(|| LookupError::NotFound(key.to_string()))?;
    resolve(dictionary, key)
}

/// Full fallback chain: active language, default language, then the key itself
pub fn translate(key: &str, table: &TranslationTable, lang: &str, default_lang: &str) -> TranslationValue {
    match lookup(table, key, lang, default_lang) {
        Ok(value) => value.clone(),
        Err(LookupError::NotFound(_)) => TranslationValue::Text(key.to_string()),
    }
}
