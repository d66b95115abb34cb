use crate::common;
use pretty_assertions::assert_eq;
use serde_json::json;
use server::pipeline::fetch_stats;
use shared_types::{AppErrorKind, CityBucket, Collection, StatsSummary, ViewState, UNSPECIFIED_CITY};
use std::time::Duration;

fn bucket(name: &str, value: u64) -> CityBucket {
    CityBucket {
        name: name.to_string(),
        value,
    }
}

#[tokio::test]
async fn test_counts_and_buckets_in_first_occurrence_order() {
    let store = common::seeded_store(
        common::schools(&[Some("Jeddah"), Some("Riyadh"), Some("Jeddah"), None]),
        common::anonymous(12),
        common::anonymous(3),
    );

    let stats = fetch_stats(&store).await.unwrap();
    assert_eq!(
        stats.summary,
        StatsSummary {
            schools: 4,
            users: 12,
            agencies: 3,
        }
    );
    assert_eq!(
        stats.cities,
        vec![bucket("Jeddah", 2), bucket("Riyadh", 1), bucket(UNSPECIFIED_CITY, 1)]
    );
}

#[tokio::test]
async fn test_unspecified_bucket_keeps_its_position() {
    let store = common::seeded_store(
        common::schools(&[None, Some("Abha"), None]),
        vec![],
        vec![],
    );

    let stats = fetch_stats(&store).await.unwrap();
    assert_eq!(stats.cities, vec![bucket(UNSPECIFIED_CITY, 2), bucket("Abha", 1)]);
}

#[tokio::test]
async fn test_blank_and_non_string_cities_are_unspecified() {
    let store = common::seeded_store(
        vec![
            common::record(json!({ "city": "  " })),
            common::record(json!({ "city": 42 })),
            common::record(json!({ "city": null })),
            common::record(json!({ "city": " Dammam " })),
        ],
        vec![],
        vec![],
    );

    let stats = fetch_stats(&store).await.unwrap();
    assert_eq!(stats.cities, vec![bucket(UNSPECIFIED_CITY, 3), bucket("Dammam", 1)]);
}

#[tokio::test]
async fn test_buckets_partition_the_schools() {
    let cities = [
        Some("Riyadh"),
        Some("Mecca"),
        None,
        Some("Riyadh"),
        Some("Tabuk"),
        Some("Mecca"),
        Some("Riyadh"),
    ];
    let store = common::seeded_store(common::schools(&cities), vec![], vec![]);

    let stats = fetch_stats(&store).await.unwrap();
    let total: u64 = stats.cities.iter().map(|b| b.value).sum();
    assert_eq!(total, stats.summary.schools);
    assert_eq!(stats.cities.len(), 4);
    assert!(stats.cities.iter().all(|b| b.value >= 1));
}

#[tokio::test]
async fn test_empty_store_yields_zeroes_and_no_buckets() {
    let stats = fetch_stats(&common::seeded_store(vec![], vec![], vec![]))
        .await
        .unwrap();

    assert_eq!(stats.summary, StatsSummary::default());
    assert!(stats.cities.is_empty());
    assert!(!stats.has_city_data());
}

#[tokio::test]
async fn test_any_failed_listing_fails_the_whole_load() {
    for failing in [Collection::Schools, Collection::Users, Collection::Agencies] {
        let store = common::FailingStore { failing };

        // The other listings never answer, so this only returns if the
        // first failure short-circuits the join.
        let result = tokio::time::timeout(Duration::from_secs(5), fetch_stats(&store))
            .await
            .expect("failure should not wait for the other listings");

        let err = result.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::FetchFailure);
        assert_eq!(err.message, format!("Loading {failing} failed"));
    }
}

#[tokio::test]
async fn test_failure_surfaces_as_errored_view() {
    let store = common::FailingStore {
        failing: Collection::Users,
    };
    let result = fetch_stats(&store).await.map_err(|e| e.to_string());

    let state = ViewState::from_resource(Some(&result));
    assert!(matches!(state, ViewState::Errored(_)));
    assert!(!state.is_loading());
}
