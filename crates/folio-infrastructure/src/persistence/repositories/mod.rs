pub mod json_project_repo;
pub mod readme_repo;

pub use json_project_repo::JsonProjectRepository;
pub use readme_repo::FsReadmeRepository;
