mod home;
mod i18n;
mod language;
mod middleware;

pub use home::home;
pub use i18n::translations;
pub use language::set_language;
pub use middleware::reload_translations;
