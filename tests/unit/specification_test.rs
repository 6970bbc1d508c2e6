// Specification tests
//
// Includes form a set: the order they are added in and repeats make no
// difference to what a repository loads.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use hospitality::airports::{Airport, AirportRelation};
use hospitality::persistence::MemoryStore;
use hospitality::restaurants::Restaurant;
use hospitality::{Repository, Specification};
use proptest::prelude::*;
use tokio_util::sync::CancellationToken;

fn airport_relations() -> impl Strategy<Value = Vec<AirportRelation>> {
    prop::collection::vec(
        prop_oneof![Just(AirportRelation::City), Just(AirportRelation::CityCountry)],
        0..6,
    )
}

fn with_includes(relations: &[AirportRelation]) -> Specification<Airport> {
    relations
        .iter()
        .fold(Specification::<Airport>::all(), |spec, relation| spec.include(*relation))
}

proptest! {
    #[test]
    fn prop_include_order_and_repeats_do_not_matter(relations in airport_relations()) {
        let forward = with_includes(&relations);
        let mut reversed_relations = relations.clone();
        reversed_relations.reverse();
        let reversed = with_includes(&reversed_relations);
        let doubled = with_includes(&[relations.clone(), relations.clone()].concat());

        prop_assert_eq!(forward.includes(), reversed.includes());
        prop_assert_eq!(forward.includes(), doubled.includes());
        for relation in &relations {
            prop_assert!(forward.is_included(*relation));
        }
    }

    #[test]
    fn prop_by_key_matches_exactly_one_id(id in "[a-z0-9]{1,12}", other in "[a-z0-9]{1,12}") {
        let spec = Specification::<Restaurant>::by_key(id.as_str());
        let restaurant = |id: &str| Restaurant {
            id: id.to_string(),
            name: "Cafe".to_string(),
            comments: None,
        };

        prop_assert!(spec.is_satisfied_by(&restaurant(&id)));
        prop_assert_eq!(spec.is_satisfied_by(&restaurant(&other)), id == other);
    }
}

#[tokio::test]
async fn test_store_returns_same_rows_for_reordered_includes() {
    let store = MemoryStore::new();
    let cancel = CancellationToken::new();
    seed_location(&store, "nl", "ams").await;
    let repo = repository::<Airport>(&store);
    seed(
        &store,
        Airport::from_dto(TestDataFactory::airport("a1", "AMS", "ams")),
    )
    .await;

    let city_first = Specification::<Airport>::all()
        .include(AirportRelation::City)
        .include(AirportRelation::CityCountry);
    let country_first = Specification::<Airport>::all()
        .include(AirportRelation::CityCountry)
        .include(AirportRelation::City)
        .include(AirportRelation::CityCountry);

    let a = repo.list(&city_first, false, &cancel).await.unwrap();
    let b = repo.list(&country_first, false, &cancel).await.unwrap();
    assert_eq!(a, b);
    assert!(a[0].city.as_ref().and_then(|c| c.country.as_ref()).is_some());
}

#[tokio::test]
async fn test_relations_are_absent_unless_included() {
    let store = MemoryStore::new();
    let cancel = CancellationToken::new();
    seed_location(&store, "nl", "ams").await;
    seed(
        &store,
        Airport::from_dto(TestDataFactory::airport("a1", "AMS", "ams")),
    )
    .await;
    let repo = repository::<Airport>(&store);

    let bare = repo
        .first_or_default(&Specification::by_key("a1"), false, &cancel)
        .await
        .unwrap()
        .expect("seeded airport");
    let city_only = repo
        .first_or_default(
            &Specification::<Airport>::by_key("a1").include(AirportRelation::City),
            false,
            &cancel,
        )
        .await
        .unwrap()
        .expect("seeded airport");

    assert!(bare.city.is_none());
    let city = city_only.city.expect("city included");
    assert!(city.country.is_none());
}

#[tokio::test]
async fn test_matching_predicate_filters_rows() {
    let store = MemoryStore::new();
    let cancel = CancellationToken::new();
    seed_restaurant(&store, "r1").await;
    seed_restaurant(&store, "r2").await;
    let repo = repository::<Restaurant>(&store);

    let spec = Specification::<Restaurant>::matching(|r| r.id.ends_with('2'));
    let found = repo.list(&spec, false, &cancel).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "r2");
}
