use folio_core::models::portfolio::GroundingDocument;
use folio_gemini::prompt::build_system_prompt;

#[test]
fn preamble_names_the_representative() {
    let doc = GroundingDocument::from_json(r#"{"name":"Ada Lovelace"}"#).unwrap();
    let system = build_system_prompt(&doc);

    assert!(system.starts_with("ROLE: You are the \"Ada Agent\""));
    assert!(system.contains("official digital representative of Ada Lovelace."));
}

#[test]
fn grounding_json_is_embedded_verbatim() {
    let doc = GroundingDocument::bundled().unwrap();
    let system = build_system_prompt(&doc);

    assert!(system.contains(&format!("GROUNDING_DATA:\n{}\n", doc.as_json())));
}

#[test]
fn protocol_rules_follow_the_data() {
    let doc = GroundingDocument::from_json(r#"{"name":"Ada"}"#).unwrap();
    let system = build_system_prompt(&doc);

    let data_at = system.find("GROUNDING_DATA").unwrap();
    let protocol_at = system.find("PROTOCOL:").unwrap();
    assert!(data_at < protocol_at);
    assert!(system.contains("Ada hasn't shared that yet."));
    assert!(system.contains("STAR method"));
    assert!(system.contains("under 150 words"));
}
