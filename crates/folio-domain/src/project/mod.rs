mod record;
mod renderer;
mod repository;

#[cfg(test)]
mod record_test;

pub use record::{normalize_stack, ProjectRecord, ProjectView};
pub use renderer::MarkdownRenderer;
#[cfg(any(test, feature = "mocks"))]
pub use renderer::MockMarkdownRenderer;
pub use repository::{ProjectRepository, ReadmeRepository};
#[cfg(any(test, feature = "mocks"))]
pub use repository::{MockProjectRepository, MockReadmeRepository};
