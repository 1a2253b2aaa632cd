// Domain layer - Pure portfolio and localization rules
// No dependencies on infrastructure or presentation layers

pub mod i18n;
pub mod project;
pub mod shared;

// Re-exports for convenience
pub use shared::{DomainError, ErrorKind};
