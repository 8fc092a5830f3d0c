use folio_core::error::CoreError;
use folio_core::models::portfolio::{GroundingDocument, TechCategory};

#[test]
fn tech_groups_follow_display_order() {
    let doc = GroundingDocument::bundled().unwrap();
    let groups = doc.tech_groups();

    let order: Vec<_> = groups.iter().map(|g| g.category).collect();
    assert_eq!(order, TechCategory::ALL.to_vec());
    assert_eq!(groups[2].label, "AI/ML");
    for group in &groups {
        assert!(group.items.iter().all(|i| i.category == group.category));
    }
}

#[test]
fn projects_are_listed_with_slugs() {
    let doc = GroundingDocument::bundled().unwrap();
    let entries = doc.projects();
    let astra = entries.iter().find(|e| e.slug == "astra-link");
    assert_eq!(astra.map(|e| e.project.title.as_str()), Some("Astra Link"));
}

#[test]
fn unknown_fields_are_kept_in_embedded_json() {
    let doc = GroundingDocument::from_json(r#"{"name":"Ada","hobbies":["chess"]}"#).unwrap();
    assert!(doc.as_json().contains("\"hobbies\":[\"chess\"]"));
    assert!(doc.portfolio().projects.is_empty());
}

#[test]
fn out_of_range_weight_is_rejected() {
    let json = r#"{
        "name": "Ada",
        "tech_stack": [{"name": "Rust", "category": "backend", "weight": 11, "description": ""}]
    }"#;
    let err = GroundingDocument::from_json(json).unwrap_err();
    assert!(matches!(err, CoreError::InvalidGrounding(_)));
}

#[test]
fn duplicate_slugs_are_rejected() {
    let project = r#"{"id":"a","title":"Same Name","tagline":"","situation":"","task":"",
        "action":[],"result":{"metric":"1","label":"","suffix":""},"github":"","demo":""}"#;
    let json = format!(r#"{{"name":"Ada","projects":[{project},{project}]}}"#);
    let err = GroundingDocument::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("same-name"));
}

#[test]
fn non_object_document_is_rejected() {
    assert!(GroundingDocument::from_json("[1,2]").is_err());
    assert!(matches!(
        GroundingDocument::from_json("not json"),
        Err(CoreError::Serialization(_))
    ));
}
