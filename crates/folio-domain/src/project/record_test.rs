#[cfg(test)]
mod tests {
    use super::super::record::*;
    use serde_json::json;

    #[test]
    fn test_scalar_stack_becomes_single_element_list() {
        assert_eq!(normalize_stack(Some(json!("Rust"))), Some(vec![json!("Rust")]));
        assert_eq!(normalize_stack(Some(json!(3))), Some(vec![json!(3)]));
    }

    #[test]
    fn test_list_stack_is_unchanged() {
        assert_eq!(
            normalize_stack(Some(json!(["Rust", "Axum"]))),
            Some(vec![json!("Rust"), json!("Axum")])
        );
        assert_eq!(normalize_stack(Some(json!([]))), Some(vec![]));
    }

    #[test]
    fn test_absent_stack_stays_absent() {
        assert_eq!(normalize_stack(None), None);
    }

    #[test]
    fn test_record_keeps_unknown_fields() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "title": "projects.folio.title",
            "stack": "Rust",
            "url": "https://example.com"
        }))
        .unwrap();

        assert_eq!(record.title.as_deref(), Some("projects.folio.title"));
        assert_eq!(record.description, None);
        assert_eq!(record.extra.get("url"), Some(&json!("https://example.com")));

        let round_trip = serde_json::to_value(&record).unwrap();
        assert_eq!(
            round_trip,
            json!({"title": "projects.folio.title", "stack": "Rust", "url": "https://example.com"})
        );
    }

    #[test]
    fn test_view_from_record_copies_without_touching_source() {
        let record: ProjectRecord = serde_json::from_value(json!({
            "title": "t",
            "description": "d",
            "stack": "Go",
            "readme": "readmes/x.md"
        }))
        .unwrap();
        let snapshot = record.clone();

        let view = ProjectView::from_record(&record);

        assert_eq!(record, snapshot);
        assert_eq!(view.title, "t");
        assert_eq!(view.description, "d");
        assert_eq!(view.stack, Some(vec![json!("Go")]));
        assert_eq!(view.readme.as_deref(), Some("readmes/x.md"));
        assert_eq!(view.readme_html, None);
    }

    #[test]
    fn test_view_serializes_flat() {
        let mut view = ProjectView {
            title: "Folio".into(),
            description: String::new(),
            stack: Some(vec![json!("Rust")]),
            readme: Some("readmes/x.md".into()),
            readme_html: Some("<h1>Hi</h1>\n".into()),
            ..Default::default()
        };
        view.extra.insert("year".into(), json!(2024));

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "title": "Folio",
                "description": "",
                "stack": ["Rust"],
                "readme": "readmes/x.md",
                "readme_html": "<h1>Hi</h1>\n",
                "year": 2024
            })
        );
    }
}
