use async_trait::async_trait;

use super::ProjectRecord;
use crate::shared::DomainError;

/// Project data source trait
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Read every record, in source order.
    ///
    /// Errors carry their kind (`NotFound`, `Parse`, `Io`) so the caller can degrade
    /// to an empty list.
    async fn find_all(&self) -> Result<Vec<ProjectRecord>, DomainError>;
}

/// README file source trait
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait ReadmeRepository: Send + Sync {
    /// Read the Markdown file at `relative_path` under the data directory
    async fn read(&self, relative_path: &str) -> Result<String, DomainError>;
}
