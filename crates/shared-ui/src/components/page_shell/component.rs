use dioxus::prelude::*;

/// Page frame: a titled header followed by the page content.
#[component]
pub fn PageShell(
    title: String,
    #[props(default)] subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        main { class: "page-shell",
            PageHeader {
                PageTitle { "{title}" }
                if let Some(subtitle) = subtitle {
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "page-body", {children} }
        }
    }
}

/// Page header container.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        header { class: "page-header", {children} }
    }
}

/// Page title element rendered as an h1.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}
