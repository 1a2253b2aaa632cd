//! Localization rules: translation values, dotted-key resolution and locale negotiation.
//!
//! Everything here is pure. Loading dictionaries from disk and publishing reloaded
//! tables lives in the infrastructure layer.

mod locale;
mod resolver;
mod translator;
mod value;


pub use locale::{primary_language_tag, LocaleConfig, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use resolver::{lookup, resolve, translate, LookupError};
pub use translator::Translator;
#[cfg(any(test, feature = "mocks"))]
pub use translator::MockTranslator;
pub use value::{parse_dictionary, substitute_placeholder, Dictionary, TranslationTable, TranslationValue};
