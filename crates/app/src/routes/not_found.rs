use dioxus::prelude::*;
use shared_ui::PageShell;

use crate::routes::Route;

/// 404 Not Found page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        PageShell {
            title: "Page not found",
            subtitle: Some(format!("Nothing lives at {path}.")),
            Link { to: Route::Dashboard {}, "Back to the dashboard" }
        }
    }
}
