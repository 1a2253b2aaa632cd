use serde::{Deserialize, Serialize};

use crate::shared::DomainError;

pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en", "pt"];
pub const DEFAULT_LANGUAGE: &str = "en";

/// The fixed set of languages the site is translated into, plus the default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    supported: Vec<String>,
    default: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect(),
            default: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl LocaleConfig {
    pub fn new(supported: Vec<String>, default: impl Into<String>) -> Result<Self, DomainError> {
        let supported: Vec<String> = supported
            .into_iter()
            .map(|code| code.trim().to_ascii_lowercase())
            .filter(|code| !code.is_empty())
            .collect();
        let default = default.into().trim().to_ascii_lowercase();

        if supported.is_empty() {
            return Err(DomainError::Validation(
                "At least one supported language is required".to_string(),
            ));
        }
        if !supported.contains(&default) {
            return Err(DomainError::Validation(format!(
                "Default language '{}' is not in the supported set {:?}",
                default, supported
            )));
        }

        Ok(Self { supported, default })
    }

    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    pub fn default_language(&self) -> &str {
        &self.default
    }

    /// The canonical supported code matching `code`, if any
    pub fn find(&self, code: &str) -> Option<&str> {
        let code = code.trim();
        self.supported
            .iter()
            .find(|supported| supported.eq_ignore_ascii_case(code))
            .map(String::as_str)
    }

    /// `code` when supported, otherwise the default
    pub fn normalize(&self, code: &str) -> &str {
        self.find(code).unwrap_or(&self.default)
    }

    /// Pick the request language.
    ///
    /// Sources are consulted in order: session, `lang` cookie, primary Accept-Language tag.
    /// The first supported value wins; unsupported values fall through to the next source.
    pub fn resolve(
        &self,
        session: Option<&str>,
        cookie: Option<&str>,
        accept_language: Option<&str>,
    ) -> &str {
        let header_tag = accept_language.and_then(primary_language_tag);

        [session, cookie, header_tag]
            .into_iter()
            .flatten()
            .find_map(|candidate| self.find(candidate))
            .unwrap_or(&self.default)
    }
}

/// First language range of an Accept-Language header, reduced to its primary subtag:
/// `"pt-BR,en;q=0.8"` → `"pt"`
pub fn primary_language_tag(header: &str) -> Option<&str> {
    let first = header.split(',').next()?;
    let first = first.split(';').next()?;
    let primary = first.split('-').next()?.trim();
    if primary.is_empty() {
        None
    } else {
        Some(primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LocaleConfig {
        LocaleConfig::default()
    }

    #[test]
    fn test_session_wins_when_supported() {
        assert_eq!(config().resolve(Some("pt"), Some("en"), Some("en-US")), "pt");
    }

    #[test]
    fn test_unsupported_session_falls_through_to_cookie() {
        assert_eq!(config().resolve(Some("xx"), Some("pt"), Some("en-US")), "pt");
    }

    #[test]
    fn test_cookie_used_without_session() {
        assert_eq!(config().resolve(None, Some("pt"), Some("en-US")), "pt");
    }

    #[test]
    fn test_header_used_without_session_or_cookie() {
        assert_eq!(config().resolve(None, None, Some("pt-BR,en;q=0.8")), "pt");
    }

    #[test]
    fn test_unsupported_everything_gives_default() {
        assert_eq!(config().resolve(Some("fr"), Some("de"), Some("es-ES")), "en");
        assert_eq!(config().resolve(None, None, None), "en");
        assert_eq!(config().resolve(Some(""), Some(""), Some("")), "en");
    }

    #[test]
    fn test_header_quality_and_case() {
        assert_eq!(config().resolve(None, None, Some("PT;q=0.9")), "pt");
        assert_eq!(config().resolve(None, None, Some(" pt ")), "pt");
    }

    #[test]
    fn test_primary_language_tag() {
        assert_eq!(primary_language_tag("en-US,en;q=0.9"), Some("en"));
        assert_eq!(primary_language_tag("pt"), Some("pt"));
        assert_eq!(primary_language_tag(",pt"), None);
        assert_eq!(primary_language_tag(""), None);
    }

    #[test]
    fn test_normalize_substitutes_default() {
        let config = config();
        assert_eq!(config.normalize("pt"), "pt");
        assert_eq!(config.normalize("PT"), "pt");
        assert_eq!(config.normalize("xx"), "en");
        assert_eq!(config.normalize(""), "en");
    }

    #[test]
    fn test_new_rejects_default_outside_supported() {
        let result = LocaleConfig::new(vec!["en".into(), "pt".into()], "fr");
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_empty_supported_set() {
        assert!(LocaleConfig::new(vec![" ".into()], "en").is_err());
    }

    #[test]
    fn test_new_normalizes_codes() {
        let config = LocaleConfig::new(vec![" EN".into(), "Pt".into()], "en ").unwrap();
        assert_eq!(config.supported(), ["en".to_string(), "pt".to_string()]);
        assert_eq!(config.default_language(), "en");
    }
}
