use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::presentation::state::AppState;

/// Development only: pick up edited translation files before handling the request
pub async fn reload_translations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.services.i18n.refresh().await;
    next.run(request).await
}
