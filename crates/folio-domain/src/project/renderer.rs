use crate::shared::DomainError;

/// Converts README Markdown into HTML that is embedded in the page as-is
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> Result<String, DomainError>;
}
