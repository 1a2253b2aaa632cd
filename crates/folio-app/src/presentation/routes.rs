use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::presentation::handlers;
use crate::presentation::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::home))
        .route("/set_language/:lang", post(handlers::set_language))
        .route("/i18n/:lang", get(handlers::translations))
        .nest_service("/static", ServeDir::new(&state.config.static_dir));

    if state.services.i18n.reloads_per_request() {
        router = router.layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::reload_translations,
        ));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
