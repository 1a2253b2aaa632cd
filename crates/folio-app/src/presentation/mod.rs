pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod session;
pub mod state;
pub mod templates;

pub use bootstrap::build_app_state;
pub use routes::build_router;
pub use state::AppState;
