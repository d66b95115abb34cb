pub mod dashboard;
pub mod not_found;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLayoutDashboard;
use dioxus_free_icons::Icon;

use dashboard::Dashboard;
use not_found::NotFound;

#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Top bar and content outlet shared by signed-in pages.
#[component]
fn AppLayout() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "app-layout",
            nav { class: "app-nav",
                span { class: "app-brand", "Schoolboard" }
                Link { to: Route::Dashboard {}, class: "app-nav-link",
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Dashboard"
                }
            }
            Outlet::<Route> {}
        }
    }
}
