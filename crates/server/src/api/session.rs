use dioxus::prelude::*;
use shared_types::AuthUser;

/// Headers set by the authenticating reverse proxy, most specific first.
#[cfg(feature = "server")]
const NAME_HEADERS: &[&str] = &["x-forwarded-preferred-username", "x-forwarded-user"];

#[cfg(feature = "server")]
const EMAIL_HEADER: &str = "x-forwarded-email";

/// Identity of the caller as asserted by the proxy in front of the app.
/// Returns `None` when no identity headers are present.
#[server]
pub async fn get_session() -> Result<Option<AuthUser>, ServerFnError> {
    let Some(ctx) = dioxus::fullstack::FullstackContext::current() else {
        return Ok(None);
    };
    let headers = ctx.parts_mut().headers.clone();
    Ok(session_from_headers(&headers))
}

/// Build an [`AuthUser`] from proxy identity headers.
#[cfg(feature = "server")]
pub fn session_from_headers(headers: &axum::http::HeaderMap) -> Option<AuthUser> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };
    let display_name = NAME_HEADERS.iter().find_map(|name| header(name));
    let email = header(EMAIL_HEADER);
    if display_name.is_none() && email.is_none() {
        return None;
    }
    Some(AuthUser {
        display_name,
        email,
    })
}
