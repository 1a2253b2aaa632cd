use axum::extract::State;
use axum::http::{header::ACCEPT_LANGUAGE, HeaderMap};
use axum::response::Html;
use axum_extra::extract::cookie::{CookieJar, SignedCookieJar};
use tracing::debug;

use crate::presentation::error::AppError;
use crate::presentation::session::{lang_cookie_value, SessionData};
use crate::presentation::state::AppState;
use crate::presentation::templates::HomePage;

/// Request language from session, `lang` cookie and Accept-Language
pub(crate) fn request_language(
    state: &AppState,
    session: &SignedCookieJar,
    cookies: &CookieJar,
    headers: &HeaderMap,
) -> String {
    let session_lang = SessionData::from_jar(session).lang;
    let cookie_lang = lang_cookie_value(cookies);
    let accept_language = headers
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    state.services.i18n.resolve_locale(
        session_lang.as_deref(),
        cookie_lang.as_deref(),
        accept_language,
    )
}

pub async fn home(
    State(state): State<AppState>,
    session: SignedCookieJar,
    cookies: CookieJar,
    headers: HeaderMap,
) -> Result<Html<String>, AppError> {
    let lang = request_language(&state, &session, &cookies, &headers);
    let projects = state.services.projects.list_projects(&lang).await;
    debug!(lang = %lang, projects = projects.len(), "Rendering home page");

    let i18n = &state.services.i18n;
    let html = state.templates.render_home(&HomePage {
        lang: &lang,
        default_lang: i18n.default_language(),
        languages: i18n.locale().supported(),
        projects: &projects,
        translations: i18n.table(),
    })?;

    Ok(Html(html))
}
