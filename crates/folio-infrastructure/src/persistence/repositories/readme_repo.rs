use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

use folio_domain::project::ReadmeRepository;
use folio_domain::shared::{DomainError, ResultExt};

/// README files under the data directory
pub struct FsReadmeRepository {
    data_dir: PathBuf,
}

impl FsReadmeRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Join `relative_path` onto the data directory, refusing paths that could leave it
    pub fn resolve(&self, relative_path: &str) -> Result<PathBuf, DomainError> {
        let relative = Path::new(relative_path);
        let contained = !relative_path.trim().is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

        if !contained {
            return Err(DomainError::Validation(format!(
                "README path must stay inside the data directory: {relative_path}"
            )));
        }
        Ok(self.data_dir.join(relative))
    }
}

#[async_trait]
impl ReadmeRepository for FsReadmeRepository {
    async fn read(&self, relative_path: &str) -> Result<String, DomainError> {
        let path = self.resolve(relative_path)?;
        tokio::fs::read_to_string(&path)
            .await
            .to_io_err(&path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::ErrorKind;

    #[test]
    fn test_resolve_relative_path() {
        let repo = FsReadmeRepository::new("/srv/data");
        assert_eq!(
            repo.resolve("readmes/x.md").unwrap(),
            PathBuf::from("/srv/data/readmes/x.md")
        );
        assert_eq!(
            repo.resolve("./readmes/x.md").unwrap(),
            PathBuf::from("/srv/data/./readmes/x.md")
        );
    }

    #[test]
    fn test_resolve_rejects_escapes() {
        let repo = FsReadmeRepository::new("/srv/data");
        for path in ["../secret.md", "readmes/../../etc/passwd", "/etc/passwd", "", "  "] {
            let err = repo.resolve(path).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "path {path:?}");
        }
    }
}
