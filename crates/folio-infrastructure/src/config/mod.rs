mod log_level;
mod server;

pub use log_level::LogLevel;
pub use server::{Environment, ServerConfig, DEFAULT_PORT, DEFAULT_SECRET_KEY};
