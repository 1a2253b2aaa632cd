use serde_json::json;

use folio_domain::project::{ProjectRepository, ReadmeRepository};
use folio_domain::ErrorKind;
use folio_infrastructure::persistence::{FsReadmeRepository, JsonProjectRepository};

#[tokio::test]
async fn project_repo_missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = JsonProjectRepository::new(dir.path().join("projects.json"));

    let err = repo.find_all().await.expect_err("missing file");
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn project_repo_non_array_is_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("projects.json");
    std::fs::write(&path, r#"{"a":1}"#).expect("write");

    let err = JsonProjectRepository::new(&path)
        .find_all()
        .await
        .expect_err("object is not a list");
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn project_repo_returns_array_in_order_and_leaves_file_alone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("projects.json");
    let raw = json!([
        {"title": "projects.folio.title", "description": "projects.folio.description", "stack": ["Rust", "Axum"], "readme": "readmes/folio.md"},
        {"title": "projects.cli.title", "description": "projects.cli.description", "stack": "Go"},
        {"title": "projects.site.title", "description": "", "stack": [], "url": "https://example.com"}
    ]);
    let text = serde_json::to_string_pretty(&raw).expect("serialize");
    std::fs::write(&path, &text).expect("write");

    let records = JsonProjectRepository::new(&path)
        .find_all()
        .await
        .expect("valid file");

    assert_eq!(serde_json::to_value(&records).expect("to value"), raw);
    assert_eq!(std::fs::read_to_string(&path).expect("read back"), text);
}

#[tokio::test]
async fn readme_repo_reads_relative_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(dir.path().join("readmes")).expect("mkdir");
    std::fs::write(dir.path().join("readmes/x.md"), "# Hi").expect("write");

    let repo = FsReadmeRepository::new(dir.path());

    assert_eq!(repo.read("readmes/x.md").await.expect("read"), "# Hi");
    assert_eq!(
        repo.read("readmes/missing.md").await.expect_err("missing").kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        repo.read("../x.md").await.expect_err("escape").kind(),
        ErrorKind::Validation
    );
}
