use serde::{Deserialize, Serialize};

/// Feature flags controlling optional dashboard sections.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// Show the schools-by-city chart card.
    #[serde(default = "default_true")]
    pub city_chart: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self { city_chart: true }
    }
}
