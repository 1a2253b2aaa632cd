use super::value::TranslationValue;
use crate::shared::DomainError;

/// Translates keys for a given language using the currently published table.
///
/// A missing key is not an error: implementations return the key itself. `Err` is
/// reserved for the translator being unable to answer at all.
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait Translator: Send + Sync {
    fn translate(&self, key: &str, lang: &str) -> Result<TranslationValue, DomainError>;
}
