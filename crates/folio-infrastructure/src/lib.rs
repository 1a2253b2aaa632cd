// Infrastructure layer - File-backed implementations
// Depends on domain layer, implements its interfaces

pub mod config;
pub mod i18n;
pub mod logging;
pub mod markdown;
pub mod persistence;
