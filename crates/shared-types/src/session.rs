use serde::{Deserialize, Serialize};

/// Identity of the signed-in user as reported by the session provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthUser {
    /// Greeting shown at the top of the dashboard.
    pub fn greeting(user: Option<&AuthUser>) -> String {
        match user
            .and_then(|u| u.display_name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
        {
            Some(name) => format!("Welcome back, {name}"),
            None => "Welcome back".to_string(),
        }
    }
}
