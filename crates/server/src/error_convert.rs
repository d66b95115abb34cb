use dioxus::prelude::ServerFnError;
use shared_types::{AppError, Collection};

/// Convert a reqwest::Error raised while listing `collection` into an AppError.
///
/// The request URL is stripped first: it carries the API key as a query parameter.
pub fn reqwest_to_app_error(err: reqwest::Error, collection: Collection) -> AppError {
    let err = err.without_url();
    if err.is_builder() {
        AppError::internal(format!("Invalid request for {collection}: {err}"))
    } else if err.is_timeout() {
        AppError::fetch_failure(format!("Timed out loading {collection}"))
    } else if err.is_decode() {
        AppError::fetch_failure(format!("Unreadable {collection} response: {err}"))
    } else if let Some(status) = err.status() {
        AppError::fetch_failure(format!("Loading {collection} failed with HTTP {status}"))
    } else {
        AppError::fetch_failure(format!("Could not reach the record store for {collection}: {err}"))
    }
}

/// Convert an AppError into a ServerFnError by serializing as JSON.
pub fn app_error_to_server_fn_error(err: AppError) -> ServerFnError {
    let json = serde_json::to_string(&err).unwrap_or_else(|_| err.message.clone());
    ServerFnError::new(json)
}

/// Extension trait providing `.into_app_error(collection)` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self, collection: Collection) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self, collection: Collection) -> AppError {
        reqwest_to_app_error(self, collection)
    }
}

/// Extension trait providing `.into_server_fn_error()` on AppError.
pub trait AppErrorExt {
    fn into_server_fn_error(self) -> ServerFnError;
}

impl AppErrorExt for AppError {
    fn into_server_fn_error(self) -> ServerFnError {
        app_error_to_server_fn_error(self)
    }
}
