use std::sync::Arc;
use tracing::{debug, warn};

use folio_domain::i18n::Translator;
use folio_domain::project::{
    MarkdownRenderer, ProjectRecord, ProjectRepository, ProjectView, ReadmeRepository,
};

/// Turns stored project records into page-ready views.
///
/// Nothing is cached: each call re-reads the data file and re-renders READMEs, and no
/// failure escapes. A broken file gives an empty list, a broken README an empty
/// `readme_html`, a failed translation the raw key.
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
    readmes: Arc<dyn ReadmeRepository>,
    renderer: Arc<dyn MarkdownRenderer>,
    translator: Option<Arc<dyn Translator>>,
}

impl ProjectService {
    pub fn new(
        repository: Arc<dyn ProjectRepository>,
        readmes: Arc<dyn ReadmeRepository>,
        renderer: Arc<dyn MarkdownRenderer>,
        translator: Option<Arc<dyn Translator>>,
    ) -> Self {
        Self {
            repository,
            readmes,
            renderer,
            translator,
        }
    }

    pub async fn list_projects(&self, lang: &str) -> Vec<ProjectView> {
        let records = match self.repository.find_all().await {
            Ok(records) => records,
            Err(e) if e.kind().is_expected() => {
                debug!("No project data: {}", e);
                Vec::new()
            }
            Err(e) => {
                warn!(kind = %e.kind(), "Failed to load projects: {}", e);
                Vec::new()
            }
        };

        let mut views = Vec::with_capacity(records.len());
        for record in &records {
            views.push(self.prepare(record, lang).await);
        }
        views
    }

    async fn prepare(&self, record: &ProjectRecord, lang: &str) -> ProjectView {
        let mut view = ProjectView::from_record(record);
        view.title = self.localize(record.title.as_deref(), lang);
        view.description = self.localize(record.description.as_deref(), lang);

        if let Some(readme) = view.readme.as_deref() {
            let html = self.render_readme(readme).await;
            view.readme_html = Some(html);
        }
        view
    }

    fn localize(&self, raw: Option<&str>, lang: &str) -> String {
        let raw = match raw {
            Some(raw) if !raw.is_empty() => raw,
            _ => return String::new(),
        };

        let Some(translator) = &self.translator else {
            return raw.to_string();
        };

        match translator.translate(raw, lang) {
            Ok(value) => value.to_display_string(),
            Err(e) => {
                warn!(key = raw, lang, "Translation failed, keeping raw value: {}", e);
                raw.to_string()
            }
        }
    }

    async fn render_readme(&self, path: &str) -> String {
        let markdown = match self.readmes.read(path).await {
            Ok(markdown) => markdown,
            Err(e) if e.kind().is_expected() => {
                debug!(path, "README not found");
                return String::new();
            }
            Err(e) => {
                warn!(path, kind = %e.kind(), "Failed to read README: {}", e);
                return String::new();
            }
        };

        self.renderer.render(&markdown).unwrap_or_else(|e| {
            warn!(path, "Failed to render README: {}", e);
            String::new()
        })
    }
}
