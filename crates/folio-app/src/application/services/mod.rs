mod i18n;
mod project_service;

pub use i18n::I18nService;
pub use project_service::ProjectService;
