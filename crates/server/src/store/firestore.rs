use serde::Deserialize;
use serde_json::Value;
use shared_types::{AppError, Collection, RawRecord, StoreConfig};
use std::time::Duration;

use super::RecordStore;
use crate::error_convert::ReqwestErrorExt;

/// Per-request timeout for listing calls.
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Cloud Firestore read through its REST `documents:list` endpoint.
pub struct FirestoreStore {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    api_key: Option<String>,
    page_size: u32,
}

/// One page of `documents:list`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Document>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Document {
    #[serde(default)]
    fields: serde_json::Map<String, Value>,
}

impl FirestoreStore {
    /// Fails when the HTTP client cannot be built, e.g. no TLS backend.
    pub fn new(
        base_url: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::store_unavailable(format!("Cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
            api_key: None,
            page_size: shared_types::DEFAULT_PAGE_SIZE,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Build from `[store]` settings. A project id is required.
    pub fn from_config(config: &StoreConfig) -> Result<Self, AppError> {
        let project_id = config
            .project_id
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| {
                AppError::store_unavailable("Firestore backend selected but project_id is not set")
            })?;
        let mut store = Self::new(&config.base_url, project_id)?.with_page_size(config.page_size);
        if let Some(key) = &config.api_key {
            store = store.with_api_key(key);
        }
        Ok(store)
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url, self.project_id, collection
        )
    }

    async fn fetch_page(
        &self,
        collection: Collection,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsResponse, AppError> {
        let mut query: Vec<(&str, String)> = vec![("pageSize", self.page_size.to_string())];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }

        let response = self
            .client
            .get(self.collection_url(collection))
            .query(&query)
            .send()
            .await
            .map_err(|e| e.into_app_error(collection))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%collection, %status, body = %body, "firestore list failed");
            return Err(AppError::fetch_failure(format!(
                "Loading {collection} failed with HTTP {status}"
            )));
        }

        response
            .json::<ListDocumentsResponse>()
            .await
            .map_err(|e| e.into_app_error(collection))
    }
}

impl RecordStore for FirestoreStore {
    #[tracing::instrument(skip(self), fields(project = %self.project_id))]
    async fn list_records(&self, collection: Collection) -> Result<Vec<RawRecord>, AppError> {
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let page = self.fetch_page(collection, page_token.as_deref()).await?;
            records.extend(page.documents.into_iter().map(|doc| decode_fields(doc.fields)));
            match page.next_page_token {
                Some(token) if !token.is_empty() => {
                    // a repeated token would refetch the same page forever
                    if page_token.as_deref() == Some(token.as_str()) {
                        tracing::warn!(%collection, "next page token did not advance, stopping");
                        break;
                    }
                    page_token = Some(token);
                }
                _ => break,
            }
        }
        tracing::debug!(count = records.len(), "listed documents");
        Ok(records)
    }
}

/// Convert a Firestore `fields` map into plain JSON.
pub fn decode_fields(fields: serde_json::Map<String, Value>) -> RawRecord {
    fields
        .into_iter()
        .map(|(name, value)| (name, decode_value(value)))
        .collect()
}

/// Convert one typed Firestore value (`{"stringValue": "x"}`) into plain JSON.
/// Unknown encodings pass through unchanged.
pub fn decode_value(value: Value) -> Value {
    let Value::Object(mut typed) = value else {
        return value;
    };
    if typed.len() != 1 {
        return Value::Object(typed);
    }
    let Some((kind, inner)) = typed.iter_mut().next().map(|(k, v)| (k.clone(), v.take())) else {
        return Value::Object(typed);
    };
    match kind.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" | "doubleValue" | "stringValue" | "timestampValue" | "referenceValue"
        | "bytesValue" | "geoPointValue" => inner,
        // int64 is sent as a decimal string
        "integerValue" => match inner.as_str().and_then(|s| s.parse::<i64>().ok()) {
            Some(n) => Value::from(n),
            None => inner,
        },
        "mapValue" => match inner {
            Value::Object(mut map) => match map.remove("fields") {
                Some(Value::Object(fields)) => Value::Object(decode_fields(fields)),
                _ => Value::Object(serde_json::Map::new()),
            },
            _ => Value::Object(serde_json::Map::new()),
        },
        "arrayValue" => match inner {
            Value::Object(mut array) => match array.remove("values") {
                Some(Value::Array(values)) => {
                    Value::Array(values.into_iter().map(decode_value).collect())
                }
                _ => Value::Array(Vec::new()),
            },
            _ => Value::Array(Vec::new()),
        },
        _ => {
            typed.insert(kind, inner);
            Value::Object(typed)
        }
    }
}
