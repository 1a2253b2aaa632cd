use axum::extract::{Path, State};
use axum::Json;

use folio_domain::i18n::Dictionary;

use crate::presentation::state::AppState;

/// `GET /i18n/:lang` — one language's dictionary for the client-side cache.
/// Unsupported codes get the default language.
pub async fn translations(
    State(state): State<AppState>,
    Path(requested): Path<String>,
) -> Json<Dictionary> {
    let i18n = &state.services.i18n;
    let lang = i18n.normalize(&requested);
    let dictionary = i18n.table().dictionary(&lang).cloned().unwrap_or_default();
    Json(dictionary)
}
