use dioxus::prelude::*;

use super::component::{Shape, Skeleton};
use crate::components::card::{Card, CardContent, CardHeader};
use crate::theme::{AVATAR_SIZE, CHART_HEIGHT, INPUT_HEIGHT, STAT_ICON_SIZE};

/// Number of stat cards on the admin dashboard.
pub const DASHBOARD_STAT_CARDS: usize = 3;

/// Number of label/input pairs in the form placeholder.
pub const FORM_FIELDS: usize = 4;

/// Placeholder for the admin dashboard: greeting, stat cards, and the chart
/// card when the dashboard shows one.
#[component]
pub fn DashboardSkeleton(#[props(default = true)] show_chart: bool) -> Element {
    rsx! {
        div { class: "dashboard-skeleton", aria_busy: "true",
            div { class: "placeholder-greeting",
                Skeleton { shape: Shape::line(240_u32) }
                Skeleton { shape: Shape::line(320_u32) }
            }
            div { class: "stats-grid",
                for _ in 0..DASHBOARD_STAT_CARDS {
                    Card {
                        CardContent {
                            div { class: "stat-card-body",
                                Skeleton { shape: Shape::circle(STAT_ICON_SIZE) }
                                div { class: "stat-card-text",
                                    Skeleton { shape: Shape::line(96_u32) }
                                    Skeleton { shape: Shape::line(64_u32) }
                                }
                            }
                        }
                    }
                }
            }
            if show_chart {
                Card {
                    CardHeader {
                        Skeleton { shape: Shape::line(180_u32) }
                    }
                    CardContent {
                        Skeleton { shape: Shape::block("100%", CHART_HEIGHT) }
                    }
                }
            }
        }
    }
}

/// Placeholder for a data table.
///
/// The first column holds an avatar beside a name, the last holds two row
/// actions. `cols` is raised to 2 so both always fit.
#[component]
pub fn TableSkeleton(rows: usize, cols: usize) -> Element {
    let cols = cols.max(2);
    let template = format!("grid-template-columns: repeat({cols}, minmax(0, 1fr));");

    rsx! {
        div { class: "placeholder-table", aria_busy: "true",
            div { class: "placeholder-table-head", style: "{template}",
                for _ in 0..cols {
                    Skeleton { shape: Shape::line("70%") }
                }
            }
            for _ in 0..rows {
                div { class: "placeholder-table-row", style: "{template}",
                    div { class: "placeholder-cell",
                        Skeleton { shape: Shape::circle(AVATAR_SIZE) }
                        Skeleton { shape: Shape::line(120_u32) }
                    }
                    for _ in 0..cols - 2 {
                        div { class: "placeholder-cell",
                            Skeleton { shape: Shape::line("80%") }
                        }
                    }
                    div { class: "placeholder-cell placeholder-actions",
                        Skeleton { shape: Shape::block(AVATAR_SIZE, AVATAR_SIZE) }
                        Skeleton { shape: Shape::block(AVATAR_SIZE, AVATAR_SIZE) }
                    }
                }
            }
        }
    }
}

/// Placeholder for an edit form: title, labelled inputs, submit button.
#[component]
pub fn FormSkeleton() -> Element {
    rsx! {
        div { class: "placeholder-form", aria_busy: "true",
            Skeleton { shape: Shape::line(200_u32) }
            for _ in 0..FORM_FIELDS {
                div { class: "placeholder-field",
                    Skeleton { shape: Shape::line(120_u32) }
                    Skeleton { shape: Shape::block("100%", INPUT_HEIGHT) }
                }
            }
            Skeleton { shape: Shape::block(120_u32, INPUT_HEIGHT) }
        }
    }
}

/// Placeholder for a grid of content cards.
#[component]
pub fn CardGridSkeleton(count: usize) -> Element {
    rsx! {
        div { class: "placeholder-card-grid", aria_busy: "true",
            for _ in 0..count {
                Skeleton { shape: Shape::Card }
            }
        }
    }
}
