use dioxus::prelude::*;
use shared_types::{DashboardStats, FeatureFlags};

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

/// Get the dashboard feature flags. Not sensitive, no session required.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::load_config().features.clone())
}

/// Record counts and schools-by-city buckets for the admin dashboard.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    let store = crate::store::get_store().map_err(|e| e.into_server_fn_error())?;
    crate::pipeline::fetch_stats(store)
        .await
        .map_err(|e| e.into_server_fn_error())
}
