use crate::common::{self, GatedStore};
use pretty_assertions::assert_eq;
use server::pipeline::fetch_stats;
use shared_types::{Collection, StatsSummary};
use std::sync::atomic::{AtomicBool, Ordering};

fn fixture() -> GatedStore {
    let inner = common::seeded_store(
        common::schools(&[Some("Riyadh"), Some("Riyadh")]),
        common::anonymous(5),
        common::anonymous(1),
    );
    GatedStore::new(inner, Collection::Schools)
}

/// Yield until `store` has seen `requests` requests and answered `answers`.
async fn settle(store: &GatedStore, requests: usize, answers: usize) {
    for _ in 0..1_000 {
        if store.requested().len() >= requests && store.answered().len() >= answers {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!(
        "store never settled: requested {:?}, answered {:?}",
        store.requested(),
        store.answered()
    );
}

#[tokio::test]
async fn test_all_listings_are_issued_before_any_completes() {
    let store = fixture();

    let (result, ()) = tokio::join!(fetch_stats(&store), async {
        settle(&store, 3, 2).await;
        let mut requested = store.requested();
        requested.sort_by_key(|c| c.as_str());
        assert_eq!(
            requested,
            vec![Collection::Agencies, Collection::Schools, Collection::Users]
        );
        store.release();
    });

    assert_eq!(result.unwrap().summary.users, 5);
}

#[tokio::test]
async fn test_no_stats_until_the_slowest_listing_answers() {
    let store = fixture();
    let done = AtomicBool::new(false);

    let load = async {
        let result = fetch_stats(&store).await;
        done.store(true, Ordering::SeqCst);
        result
    };

    let (result, ()) = tokio::join!(load, async {
        settle(&store, 3, 2).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert!(!done.load(Ordering::SeqCst), "stats published before schools answered");
        assert!(!store.answered().contains(&Collection::Schools));
        store.release();
    });

    assert!(done.load(Ordering::SeqCst));
    let stats = result.unwrap();
    assert_eq!(
        stats.summary,
        StatsSummary {
            schools: 2,
            users: 5,
            agencies: 1,
        }
    );
    assert_eq!(stats.cities.len(), 1);
}
