pub mod repositories;

pub use repositories::{FsReadmeRepository, JsonProjectRepository};
