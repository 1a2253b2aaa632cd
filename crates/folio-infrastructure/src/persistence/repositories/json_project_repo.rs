use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, warn};

use folio_domain::project::{ProjectRecord, ProjectRepository};
use folio_domain::shared::{DomainError, JsonResultExt, ResultExt};

/// Project records stored as a JSON array in a single file
pub struct JsonProjectRepository {
    path: PathBuf,
}

impl JsonProjectRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(&self, raw: &str) -> Result<Vec<ProjectRecord>, DomainError> {
        let context = self.path.display().to_string();
        let value: Value = serde_json::from_str(raw).to_parse_err(&context)?;

        let Value::Array(items) = value else {
            return Err(DomainError::Parse(format!(
                "{}: expected a JSON array of projects",
                context
            )));
        };

        let total = items.len();
        let records: Vec<ProjectRecord> = items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(path = %context, index, "Skipping malformed project entry: {}", err);
                    None
                }
            })
            .collect();

        debug!(path = %context, total, loaded = records.len(), "Projects loaded");
        Ok(records)
    }
}

#[async_trait]
impl ProjectRepository for JsonProjectRepository {
    async fn find_all(&self) -> Result<Vec<ProjectRecord>, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .to_io_err(&self.path.display().to_string())?;
        self.parse(&raw)
    }
}
