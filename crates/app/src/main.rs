use dioxus::prelude::*;
use shared_types::FeatureFlags;

mod auth;
mod routes;
use auth::AuthState;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        Ok(dioxus::server::router(App))
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);

    let mut auth = use_context_provider(AuthState::new);

    // The session only feeds the greeting, so a failed lookup leaves it anonymous
    use_future(move || async move {
        match server::api::get_session().await {
            Ok(Some(user)) => auth.set_user(user),
            Ok(None) => {}
            Err(e) => tracing::warn!("session lookup failed: {e}"),
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "app-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
