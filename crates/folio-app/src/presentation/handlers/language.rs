use axum::extract::{Path, State};
use axum::http::{header::REFERER, HeaderMap};
use axum::response::Redirect;
use axum_extra::extract::cookie::{CookieJar, SignedCookieJar};
use tracing::{debug, info};

use crate::presentation::session::{set_lang_cookie, SessionData};
use crate::presentation::state::AppState;

/// `POST /set_language/:lang`
///
/// Unsupported codes are replaced by the default language. The choice goes into the
/// session and a one-year `lang` cookie, then the client is sent back where it came from.
pub async fn set_language(
    State(state): State<AppState>,
    Path(requested): Path<String>,
    session: SignedCookieJar,
    cookies: CookieJar,
    headers: HeaderMap,
) -> (SignedCookieJar, CookieJar, Redirect) {
    let lang = state.services.i18n.normalize(&requested);
    if lang != requested {
        debug!(requested = %requested, lang = %lang, "Unsupported language, using default");
    }

    let mut data = SessionData::from_jar(&session);
    data.lang = Some(lang.clone());
    let session = data.save(session);
    let cookies = set_lang_cookie(cookies, &lang);

    let target = headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .filter(|referer| !referer.is_empty())
        .unwrap_or("/");

    info!(lang = %lang, "Language changed");
    (session, cookies, Redirect::to(target))
}
