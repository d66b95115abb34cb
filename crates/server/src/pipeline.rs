use shared_types::{AppError, Collection, DashboardStats};

use crate::store::RecordStore;

/// Load the three dashboard collections concurrently and aggregate them.
///
/// Nothing is produced until every listing has succeeded; the first
/// failure cancels the remaining requests and is returned as-is.
#[tracing::instrument(skip(store))]
pub async fn fetch_stats<S: RecordStore>(store: &S) -> Result<DashboardStats, AppError> {
    let result = tokio::try_join!(
        store.list_records(Collection::Schools),
        store.list_records(Collection::Users),
        store.list_records(Collection::Agencies),
    );

    match result {
        Ok((schools, users, agencies)) => {
            let stats = DashboardStats::from_collections(&schools, &users, &agencies);
            tracing::info!(
                schools = stats.summary.schools,
                users = stats.summary.users,
                agencies = stats.summary.agencies,
                cities = stats.cities.len(),
                "dashboard stats computed"
            );
            Ok(stats)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to load dashboard stats");
            Err(e)
        }
    }
}
