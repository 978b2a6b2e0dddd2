use namegrove::domain::detail::{NewFamousBearer, NewNameFaq, SeoMeta};
use namegrove::domain::name::{NewNameRecord, UpdateNameRecord};
use namegrove::domain::types::Gender;
use namegrove::repository::{
    DieselRepository, NameDetailReader, NameDetailWriter, NameReader, NameWriter,
};

mod common;

fn sample(name: &str, gender: Gender, popularity: Option<i32>) -> NewNameRecord {
    NewNameRecord::new(
        name.to_string(),
        format!("Meaning of {name}"),
        gender,
        "Latin".to_string(),
        Some("Christianity".to_string()),
        None,
        popularity,
    )
    .unwrap()
}

#[test]
fn test_name_repository_crud() {
    let test_db = common::TestDb::new("test_name_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_names(&[
            sample("Amara", Gender::Girl, Some(5)),
            sample("Liam", Gender::Boy, Some(1)),
        ])
        .unwrap();
    assert_eq!(created, 2);

    let names = repo.list_names().unwrap();
    assert_eq!(names.len(), 2);
    let amara = names.iter().find(|n| n.name == "Amara").unwrap().clone();

    let by_slug = repo.get_name_by_slug("amara").unwrap().unwrap();
    assert_eq!(by_slug.id, amara.id);
    assert!(repo.get_name_by_slug("missing").unwrap().is_none());

    let updates = UpdateNameRecord::new(
        "Amara".to_string(),
        "Grace, mercy".to_string(),
        Gender::Unisex,
        "Igbo".to_string(),
        None,
        Some("Igbo".to_string()),
        None,
    )
    .unwrap();
    let updated = repo.update_name(amara.id, &updates).unwrap();
    assert_eq!(updated.meaning, "Grace, mercy");
    assert_eq!(updated.gender, Gender::Unisex);
    assert_eq!(updated.origin, "Igbo");
    assert!(updated.religion.is_none());
    assert!(updated.popularity.is_none());

    repo.delete_name(amara.id).unwrap();
    assert!(repo.get_name_by_id(amara.id).unwrap().is_none());
    assert_eq!(repo.list_names().unwrap().len(), 1);
}

#[test]
fn test_facet_listing_skips_missing_values() {
    let test_db = common::TestDb::new("test_facet_listing.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_names(&[
        sample("Amara", Gender::Girl, None),
        NewNameRecord::new(
            "Kai".to_string(),
            "Sea".to_string(),
            Gender::Unisex,
            "Hawaiian".to_string(),
            None,
            Some("Hawaiian".to_string()),
            None,
        )
        .unwrap(),
    ])
    .unwrap();

    let origins = repo.list_origins().unwrap();
    assert_eq!(origins, vec!["Hawaiian".to_string(), "Latin".to_string()]);

    // Kai has no religion and Amara has no language; neither shows up as a facet.
    assert_eq!(repo.list_religions().unwrap(), vec!["Christianity".to_string()]);
    assert_eq!(repo.list_languages().unwrap(), vec!["Hawaiian".to_string()]);
}

#[test]
fn test_detail_replace_and_seo_upsert() {
    let test_db = common::TestDb::new("test_detail_replace.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_names(&[sample("Amara", Gender::Girl, None)])
        .unwrap();
    let name = repo.get_name_by_slug("amara").unwrap().unwrap();

    repo.replace_variations(name.id, &["Amarah".to_string(), "Amara-Lee".to_string()])
        .unwrap();
    assert_eq!(
        repo.list_variations(name.id).unwrap(),
        vec!["Amarah".to_string(), "Amara-Lee".to_string()]
    );

    // A second replace fully supersedes the first.
    repo.replace_variations(name.id, &["Amarra".to_string()])
        .unwrap();
    assert_eq!(
        repo.list_variations(name.id).unwrap(),
        vec!["Amarra".to_string()]
    );

    repo.replace_traits(name.id, &["Kind".to_string(), "Creative".to_string()])
        .unwrap();
    assert_eq!(repo.list_traits(name.id).unwrap().len(), 2);

    repo.replace_famous_bearers(
        name.id,
        &[NewFamousBearer::new(
            "Amara Walker".to_string(),
            "Journalist".to_string(),
        )],
    )
    .unwrap();
    let bearers = repo.list_famous_bearers(name.id).unwrap();
    assert_eq!(bearers.len(), 1);
    assert_eq!(bearers[0].full_name, "Amara Walker");

    repo.replace_faqs(
        name.id,
        &[
            NewNameFaq::new("Is it popular?".to_string(), "Yes.".to_string(), 1),
            NewNameFaq::new("How is it spelled?".to_string(), "A-m-a-r-a.".to_string(), 0),
        ],
    )
    .unwrap();
    let faqs = repo.list_faqs(name.id).unwrap();
    assert_eq!(faqs.len(), 2);
    // Ordered by position, not insertion order.
    assert_eq!(faqs[0].question, "How is it spelled?");

    assert!(repo.get_seo_meta(name.id).unwrap().is_none());
    let meta = SeoMeta::new(
        name.id,
        "Amara - Meaning".to_string(),
        "All about the name Amara.".to_string(),
        "amara, baby names".to_string(),
    );
    repo.upsert_seo_meta(&meta).unwrap();
    let stored = repo.get_seo_meta(name.id).unwrap().unwrap();
    assert_eq!(stored.title, "Amara - Meaning");

    let mut meta2 = stored;
    meta2.title = "Amara - Meaning and Origin".to_string();
    repo.upsert_seo_meta(&meta2).unwrap();
    let stored = repo.get_seo_meta(name.id).unwrap().unwrap();
    assert_eq!(stored.title, "Amara - Meaning and Origin");
}

#[test]
fn test_delete_name_cascades_to_details() {
    let test_db = common::TestDb::new("test_delete_cascades.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_names(&[sample("Amara", Gender::Girl, None)])
        .unwrap();
    let name = repo.get_name_by_slug("amara").unwrap().unwrap();
    repo.replace_variations(name.id, &["Amarah".to_string()])
        .unwrap();
    repo.replace_faqs(
        name.id,
        &[NewNameFaq::new("Q?".to_string(), "A.".to_string(), 0)],
    )
    .unwrap();

    repo.delete_name(name.id).unwrap();
    assert!(repo.list_variations(name.id).unwrap().is_empty());
    assert!(repo.list_faqs(name.id).unwrap().is_empty());
}
