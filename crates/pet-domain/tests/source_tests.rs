use pet_domain::{load_catalog, JsonPetSource, PetDataSource, Species, StaticPetSource};

struct FailingSource;

#[async_trait::async_trait]
impl PetDataSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }
    async fn fetch_pets(&self) -> Result<Vec<pet_domain::PetRecord>, pet_domain::DomainError> {
        Err(pet_domain::DomainError::Source("quota exceeded".into()))
    }
}

#[test]
fn static_source_builds_full_catalog() {
    let load = tokio_test::block_on(load_catalog(&StaticPetSource));
    assert!(load.error.is_none());
    assert_eq!(load.catalog.pets().len(), 12);
    assert_eq!(load.catalog.services().len(), 5);
    let tweety = load.catalog.find_pet("pet_08").expect("tweety present");
    assert_eq!(tweety.species, Species::Bird);
    assert_eq!(tweety.image_urls.len(), 4);
}

#[test]
fn failing_source_leaves_services_and_reports_error() {
    let load = tokio_test::block_on(load_catalog(&FailingSource));
    assert!(load.catalog.pets().is_empty());
    assert_eq!(load.catalog.services().len(), 5);
    assert!(load.error.is_some());
}

#[test]
fn json_source_decodes_camel_case_records_and_skips_invalid() {
    let payload = r#"[
        {"id": "p1", "name": "Nibbles", "species": "Other", "breed": "Hamster", "age": 1,
         "description": "Small.", "quickFacts": ["Fast"]},
        {"id": "p2", "name": "", "species": "Dog", "breed": "Mutt", "age": 4, "description": "No name."}
    ]"#;
    let load = tokio_test::block_on(load_catalog(&JsonPetSource::new(payload)));
    assert_eq!(load.catalog.pets().len(), 1);
    assert_eq!(load.catalog.pets()[0].quick_facts, vec!["Fast".to_string()]);
}

#[test]
fn malformed_json_is_a_source_failure() {
    let src = JsonPetSource::new("not json");
    let res = tokio_test::block_on(src.fetch_pets());
    assert!(matches!(res, Err(pet_domain::DomainError::Serialization(_))));
}
