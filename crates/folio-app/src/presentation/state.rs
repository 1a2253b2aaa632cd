use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

use crate::application::services::{I18nService, ProjectService};
use crate::presentation::templates::Templates;
use folio_infrastructure::config::ServerConfig;

pub struct Services {
    pub i18n: Arc<I18nService>,
    pub projects: Arc<ProjectService>,
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub services: Arc<Services>,
    pub templates: Arc<Templates>,
    /// Signs the session cookie
    pub cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
