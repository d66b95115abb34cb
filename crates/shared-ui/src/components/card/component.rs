use dioxus::prelude::*;

use crate::theme::{Tone, STAT_ICON_SIZE};

/// A bordered content container.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            {children}
        }
    }
}

#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// A headline number with an icon badge, tinted by `tone`.
///
/// Layout matches the stat card placeholder in `DashboardSkeleton`.
#[component]
pub fn StatCard(label: String, value: u64, tone: Tone, icon: Element) -> Element {
    let accent = tone.accent();

    rsx! {
        Card {
            CardContent {
                div { class: "stat-card-body", "data-tone": tone.as_str(),
                    div {
                        class: "stat-card-icon",
                        style: "width: {STAT_ICON_SIZE}px; height: {STAT_ICON_SIZE}px; color: {accent};",
                        {icon}
                    }
                    div { class: "stat-card-text",
                        span { class: "stat-card-label", "{label}" }
                        span { class: "stat-card-value", "{value}" }
                    }
                }
            }
        }
    }
}
