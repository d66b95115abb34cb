use shared_types::{AppConfig, StoreBackend};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` plus environment overrides and cache the result.
/// Safe to call multiple times; only the first call reads the file.
///
/// If the file is missing or unparseable, defaults are used.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let config = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => parse_config(&contents),
            Err(e) => {
                tracing::warn!("{CONFIG_PATH} not found ({e}), using defaults");
                AppConfig::default()
            }
        };
        let config = apply_env_overrides(config, |key| std::env::var(key).ok());
        tracing::info!(backend = ?config.store.backend, "configuration loaded");
        config
    })
}

/// Parse config file contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse {CONFIG_PATH}: {e}, using defaults");
        AppConfig::default()
    })
}

/// Environment variables take precedence over file values.
///
///   - `SCHOOLBOARD_STORE`: `memory` or `firestore`
///   - `SCHOOLBOARD_SEED`: seed file for the memory backend
///   - `FIRESTORE_PROJECT_ID`, `FIRESTORE_API_KEY`, `FIRESTORE_BASE_URL`
pub fn apply_env_overrides(
    mut config: AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> AppConfig {
    match lookup("SCHOOLBOARD_STORE").as_deref() {
        Some("memory") => config.store.backend = StoreBackend::Memory,
        Some("firestore") => config.store.backend = StoreBackend::Firestore,
        Some(other) => tracing::warn!("Ignoring unknown SCHOOLBOARD_STORE value {other:?}"),
        None => {}
    }
    if let Some(seed) = lookup("SCHOOLBOARD_SEED") {
        config.store.seed_path = Some(seed);
    }
    if let Some(project) = lookup("FIRESTORE_PROJECT_ID") {
        config.store.project_id = Some(project);
    }
    if let Some(key) = lookup("FIRESTORE_API_KEY") {
        config.store.api_key = Some(key);
    }
    if let Some(url) = lookup("FIRESTORE_BASE_URL") {
        config.store.base_url = url;
    }
    config
}
