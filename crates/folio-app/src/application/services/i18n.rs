use std::sync::Arc;

use folio_domain::i18n::{
    substitute_placeholder, LocaleConfig, TranslationTable, TranslationValue, Translator,
};
use folio_infrastructure::i18n::TranslationStore;
use tracing::warn;

/// Locale negotiation and key translation for request handlers
pub struct I18nService {
    store: Arc<TranslationStore>,
    reload_per_request: bool,
}

impl I18nService {
    pub fn new(store: Arc<TranslationStore>, reload_per_request: bool) -> Self {
        Self {
            store,
            reload_per_request,
        }
    }

    pub fn locale(&self) -> &LocaleConfig {
        self.store.locale()
    }

    pub fn default_language(&self) -> &str {
        self.store.locale().default_language()
    }

    /// Session, then `lang` cookie, then Accept-Language, then the default
    pub fn resolve_locale(
        &self,
        session: Option<&str>,
        cookie: Option<&str>,
        accept_language: Option<&str>,
    ) -> String {
        self.locale()
            .resolve(session, cookie, accept_language)
            .to_string()
    }

    /// `lang` if supported, otherwise the default language
    pub fn normalize(&self, lang: &str) -> String {
        self.locale().normalize(lang).to_string()
    }

    pub fn table(&self) -> Arc<TranslationTable> {
        self.store.snapshot()
    }

    /// Get translation by key path (e.g. "home.hero.title")
    pub fn t(&self, key: &str, lang: &str) -> TranslationValue {
        self.store.t(key, lang)
    }

    /// Like [`t`](Self::t), filling a `{0}` placeholder in text values with `fallback`
    pub fn t_with_fallback(&self, key: &str, lang: &str, fallback: &str) -> TranslationValue {
        match self.t(key, lang) {
            TranslationValue::Text(text) => {
                TranslationValue::Text(substitute_placeholder(&text, fallback))
            }
            other => other,
        }
    }

    pub fn translator(&self) -> Arc<dyn Translator> {
        self.store.clone()
    }

    pub fn reloads_per_request(&self) -> bool {
        self.reload_per_request
    }

    /// Re-read translation files when running in development mode
    pub async fn refresh(&self) {
        if !self.reload_per_request {
            return;
        }
        let store = Arc::clone(&self.store);
        if let Err(e) = tokio::task::spawn_blocking(move || store.reload()).await {
            warn!("Translation reload task failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::i18n::parse_dictionary;

    fn service() -> I18nService {
        let table = TranslationTable::new()
            .with_language(
                "en",
                parse_dictionary(r#"{"greeting": "Hello {0}", "menu": ["Work", "About"]}"#)
                    .unwrap(),
            )
            .with_language("pt", parse_dictionary(r#"{"greeting": "Olá {0}"}"#).unwrap());
        let store = TranslationStore::with_table(table, LocaleConfig::default());
        I18nService::new(Arc::new(store), false)
    }

    #[test]
    fn test_resolve_locale_priority() {
        let service = service();
        assert_eq!(service.resolve_locale(Some("xx"), Some("pt"), Some("en-US")), "pt");
        assert_eq!(service.resolve_locale(None, None, Some("pt-BR")), "pt");
        assert_eq!(service.resolve_locale(None, None, None), "en");
    }

    #[test]
    fn test_normalize_unsupported() {
        assert_eq!(service().normalize("fr"), "en");
        assert_eq!(service().normalize("pt"), "pt");
    }

    #[test]
    fn test_t_with_fallback_fills_placeholder() {
        let service = service();
        assert_eq!(
            service.t_with_fallback("greeting", "pt", "Ana"),
            TranslationValue::from("Olá Ana")
        );
        assert_eq!(
            service.t_with_fallback("menu", "pt", "Ana"),
            TranslationValue::List(vec![Some("Work".into()), Some("About".into())])
        );
    }

    #[test]
    fn test_translator_shares_store() {
        let service = service();
        let translator = service.translator();
        assert_eq!(
            translator.translate("greeting", "en").unwrap(),
            TranslationValue::from("Hello {0}")
        );
    }

    #[tokio::test]
    async fn test_refresh_is_noop_outside_development() {
        let service = service();
        let before = service.table();
        service.refresh().await;
        assert!(Arc::ptr_eq(&before, &service.table()));
    }
}
