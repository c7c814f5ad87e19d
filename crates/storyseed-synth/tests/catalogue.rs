use storyseed_core::models::record::ContentType;
use storyseed_synth::Catalogue;
use storyseed_synth::error::SynthError;

const MINIMAL: &str = r#"{
  "domains": [
    {
      "key": "acme",
      "brand_or_person": "Acme",
      "base_date": "2025-01-31",
      "groups": [
        {
          "label": "product",
          "content_type": "product",
          "offset_days": { "min": 1, "max": 5 },
          "url": "https://acme.test/{{ index }}",
          "author": "Acme Marketing",
          "sentiments": ["positive"],
          "body": "About {{ title }}.",
          "summary": "Summary of {{ title }}.",
          "seeds": [
            { "title": "Rocket Skates", "description": "Fast." }
          ]
        }
      ]
    }
  ]
}"#;

fn minimal() -> serde_json::Value {
    serde_json::from_str(MINIMAL).unwrap()
}

#[test]
fn builtin_catalogue_has_three_domains_and_seventeen_seeds() {
    let catalogue = Catalogue::builtin().unwrap();
    let keys: Vec<_> = catalogue.domains.iter().map(|d| d.key.as_str()).collect();
    assert_eq!(keys, ["nike", "ishowspeed", "blackpink"]);
    assert_eq!(catalogue.seed_count(), 17);

    let shape: Vec<(&str, ContentType, usize)> = catalogue
        .groups()
        .map(|(_, g)| (g.label.as_str(), g.content_type, g.seeds.len()))
        .collect();
    assert_eq!(
        shape,
        [
            ("product", ContentType::Product, 5),
            ("campaign", ContentType::Campaign, 3),
            ("video", ContentType::Video, 3),
            ("music", ContentType::MusicRelease, 3),
            ("endorsement", ContentType::BrandEndorsement, 3),
        ]
    );
}

#[test]
fn optional_seed_fields_default_to_empty() {
    let catalogue = Catalogue::from_json(MINIMAL).unwrap();
    let group = &catalogue.domains[0].groups[0];
    assert!(group.tags.is_empty());
    assert!(group.choices.is_empty());
    assert!(group.seeds[0].categories.is_empty());
    assert!(group.seeds[0].content.is_none());
}

#[test]
fn malformed_json_is_a_parse_error() {
    assert!(matches!(
        Catalogue::from_json("{ not json"),
        Err(SynthError::CatalogueParse(_))
    ));
}

#[test]
fn inverted_offset_range_is_rejected() {
    let mut json = minimal();
    json["domains"][0]["groups"][0]["offset_days"] = serde_json::json!({ "min": 9, "max": 3 });

    let err = Catalogue::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(
        err,
        SynthError::InvalidOffsetRange { min: 9, max: 3, .. }
    ));
}

#[test]
fn empty_sentiment_set_is_rejected() {
    let mut json = minimal();
    json["domains"][0]["groups"][0]["sentiments"] = serde_json::json!([]);

    let err = Catalogue::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, SynthError::EmptyChoiceSet { ref set, .. } if set == "sentiments"));
}

#[test]
fn empty_choice_set_is_rejected() {
    let mut json = minimal();
    json["domains"][0]["groups"][0]["choices"] = serde_json::json!({ "mood": [] });

    let err = Catalogue::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, SynthError::EmptyChoiceSet { ref set, .. } if set == "mood"));
}

#[test]
fn seed_without_content_needs_a_body_template() {
    let mut json = minimal();
    json["domains"][0]["groups"][0]
        .as_object_mut()
        .unwrap()
        .remove("body");

    let err = Catalogue::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(err, SynthError::MissingBody { ref title, .. } if title == "Rocket Skates"));
}

#[test]
fn duplicate_domain_and_group_are_rejected() {
    let mut json = minimal();
    let domain = json["domains"][0].clone();
    json["domains"].as_array_mut().unwrap().push(domain);
    assert!(matches!(
        Catalogue::from_json(&json.to_string()),
        Err(SynthError::DuplicateDomain(ref key)) if key == "acme"
    ));

    let mut json = minimal();
    let group = json["domains"][0]["groups"][0].clone();
    json["domains"][0]["groups"].as_array_mut().unwrap().push(group);
    assert!(matches!(
        Catalogue::from_json(&json.to_string()),
        Err(SynthError::DuplicateGroup { ref label, .. }) if label == "product"
    ));
}

#[test]
fn missing_file_reports_path() {
    let err = Catalogue::from_path(std::path::Path::new("/nonexistent/catalogue.json")).unwrap_err();
    assert!(matches!(err, SynthError::CatalogueRead { .. }));
    assert!(err.to_string().contains("/nonexistent/catalogue.json"));
}

#[test]
fn loads_catalogue_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalogue.json");
    std::fs::write(&path, MINIMAL).unwrap();

    let catalogue = Catalogue::from_path(&path).unwrap();
    assert_eq!(catalogue.seed_count(), 1);
    let domain = &catalogue.domains[0];
    assert_eq!(domain.key, "acme");
    assert_eq!(domain.base_date, jiff::civil::date(2025, 1, 31));
    assert_eq!(domain.groups[0].seeds[0].title, "Rocket Skates");
}

#[test]
fn colliding_id_prefixes_are_rejected() {
    let mut json = minimal();
    json["domains"][0]["key"] = serde_json::json!("acme-rocket");
    let mut other = json["domains"][0].clone();
    other["key"] = serde_json::json!("acme");
    other["groups"][0]["label"] = serde_json::json!("rocket-product");
    json["domains"].as_array_mut().unwrap().push(other);

    let err = Catalogue::from_json(&json.to_string()).unwrap_err();
    assert!(matches!(
        err,
        SynthError::DuplicateIdPrefix(ref prefix) if prefix == "acme-rocket-product"
    ));
}
