use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use tracing::info;

use crate::application::services::{I18nService, ProjectService};
use crate::presentation::session::signing_key;
use crate::presentation::state::{AppState, Services};
use crate::presentation::templates::Templates;
use folio_domain::project::{MarkdownRenderer, ProjectRepository, ReadmeRepository};
use folio_infrastructure::config::ServerConfig;
use folio_infrastructure::i18n::TranslationStore;
use folio_infrastructure::markdown::CommonMarkRenderer;
use folio_infrastructure::persistence::{FsReadmeRepository, JsonProjectRepository};

pub fn build_app_state(config: ServerConfig) -> anyhow::Result<AppState> {
    let startup_started_at = Instant::now();

    info!("🌐 Loading translations...");
    let started_at = Instant::now();
    let store = Arc::new(TranslationStore::load(
        config.translations_dir.clone(),
        config.locale.clone(),
    ));
    info!(
        "✓ Translations loaded from {} ({}ms)",
        config.translations_dir.display(),
        started_at.elapsed().as_millis()
    );

    let project_repo = Arc::new(JsonProjectRepository::new(config.projects_file.clone()))
        as Arc<dyn ProjectRepository>;
    let readme_repo =
        Arc::new(FsReadmeRepository::new(config.data_dir.clone())) as Arc<dyn ReadmeRepository>;
    let renderer = Arc::new(CommonMarkRenderer::new()) as Arc<dyn MarkdownRenderer>;
    info!("Projects file: {}", config.projects_file.display());

    let i18n = Arc::new(I18nService::new(store, config.is_development()));
    let projects = Arc::new(ProjectService::new(
        project_repo,
        readme_repo,
        renderer,
        Some(i18n.translator()),
    ));

    let started_at = Instant::now();
    let templates = Templates::new().context("Failed to compile templates")?;
    info!(
        "✓ Templates compiled ({}ms)",
        started_at.elapsed().as_millis()
    );

    let cookie_key = signing_key(&config.secret_key);

    info!(
        environment = config.environment.as_str(),
        "✅ Application state ready ({}ms)",
        startup_started_at.elapsed().as_millis()
    );

    Ok(AppState {
        config: Arc::new(config),
        services: Arc::new(Services { i18n, projects }),
        templates: Arc::new(templates),
        cookie_key,
    })
}
