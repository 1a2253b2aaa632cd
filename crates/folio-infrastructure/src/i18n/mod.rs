//! File-backed translation store.
//!
//! One `<lang>.json` file per supported language. A table is always built completely
//! before it is published; readers hold an `Arc` to the table they started with, so a
//! reload never exposes a half-populated table.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use folio_domain::i18n::{
    parse_dictionary, translate, Dictionary, LocaleConfig, TranslationTable, TranslationValue,
    Translator,
};
use folio_domain::shared::{DomainError, ResultExt};
use tracing::{debug, info, warn};

pub struct TranslationStore {
    base_path: PathBuf,
    locale: LocaleConfig,
    current: RwLock<Arc<TranslationTable>>,
}

impl TranslationStore {
    /// Load every supported language from `base_path` and publish the result
    pub fn load(base_path: impl Into<PathBuf>, locale: LocaleConfig) -> Self {
        let base_path = base_path.into();
        let table = load_table(&base_path, &locale);
        Self {
            base_path,
            locale,
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Store with an already built table, mainly for tests
    pub fn with_table(table: TranslationTable, locale: LocaleConfig) -> Self {
        Self {
            base_path: PathBuf::new(),
            locale,
            current: RwLock::new(Arc::new(table)),
        }
    }

    /// Re-read all files and swap the published table
    pub fn reload(&self) -> Arc<TranslationTable> {
        let table = Arc::new(load_table(&self.base_path, &self.locale));
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&table);
        debug!(path = %self.base_path.display(), "Translations reloaded");
        table
    }

    /// The table published at the time of the call
    pub fn snapshot(&self) -> Arc<TranslationTable> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn locale(&self) -> &LocaleConfig {
        &self.locale
    }

    /// Translate with the full fallback chain against the current table
    pub fn t(&self, key: &str, lang: &str) -> TranslationValue {
        translate(key, &self.snapshot(), lang, self.locale.default_language())
    }
}

impl Translator for TranslationStore {
    fn translate(&self, key: &str, lang: &str) -> Result<TranslationValue, DomainError> {
        Ok(self.t(key, lang))
    }
}

/// Build a table holding every supported language.
///
/// A language whose file is missing or broken gets an empty dictionary; this never fails.
pub fn load_table(base_path: &Path, locale: &LocaleConfig) -> TranslationTable {
    let mut table = TranslationTable::new();

    for lang in locale.supported() {
        let path = base_path.join(format!("{lang}.json"));
        let dictionary = match load_dictionary(&path) {
            Ok(dictionary) => {
                debug!(lang = %lang, entries = dictionary.len(), "Loaded translations");
                dictionary
            }
            Err(err) => {
                warn!(
                    lang = %lang,
                    path = %path.display(),
                    kind = %err.kind(),
                    "Failed to load translations, using empty table: {}",
                    err
                );
                Dictionary::new()
            }
        };
        table.insert(lang.clone(), dictionary);
    }

    info!(
        path = %base_path.display(),
        languages = ?locale.supported(),
        "Translation table built"
    );
    table
}

pub fn load_dictionary(path: &Path) -> Result<Dictionary, DomainError> {
    let context = path.display().to_string();
    let raw = std::fs::read_to_string(path).to_io_err(&context)?;
    parse_dictionary(&raw).map_err(|err| DomainError::Parse(format!("{}: {}", context, err.message())))
}
