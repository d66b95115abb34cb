use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBuilding, LdGraduationCap, LdUsers};
use dioxus_free_icons::Icon;
use server::api::get_dashboard_stats;
use shared_types::{CityBucket, DashboardStats, FeatureFlags, StatsSummary, ViewState};
use shared_ui::theme::{palette_color, Tone};
use shared_ui::{
    BarChart, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, ChartEmpty,
    ChartPoint, DashboardSkeleton, PageShell, StatCard,
};

use crate::auth::use_greeting;

/// Which summary count a stat card shows.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StatKind {
    Schools,
    Users,
    Agencies,
}

impl StatKind {
    fn count(self, summary: &StatsSummary) -> u64 {
        match self {
            StatKind::Schools => summary.schools,
            StatKind::Users => summary.users,
            StatKind::Agencies => summary.agencies,
        }
    }

    fn icon(self) -> Element {
        match self {
            StatKind::Schools => rsx! {
                Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 24, height: 24 }
            },
            StatKind::Users => rsx! {
                Icon::<LdUsers> { icon: LdUsers, width: 24, height: 24 }
            },
            StatKind::Agencies => rsx! {
                Icon::<LdBuilding> { icon: LdBuilding, width: 24, height: 24 }
            },
        }
    }
}

struct StatCardConfig {
    kind: StatKind,
    label: &'static str,
    tone: Tone,
}

/// Summary cards in display order.
const STAT_CARDS: [StatCardConfig; 3] = [
    StatCardConfig {
        kind: StatKind::Schools,
        label: "Schools",
        tone: Tone::Indigo,
    },
    StatCardConfig {
        kind: StatKind::Users,
        label: "Users",
        tone: Tone::Emerald,
    },
    StatCardConfig {
        kind: StatKind::Agencies,
        label: "Agencies",
        tone: Tone::Amber,
    },
];

/// Chart feed for the schools-by-city card, in bucket order.
fn city_points(cities: &[CityBucket]) -> Vec<ChartPoint> {
    cities
        .iter()
        .map(|bucket| ChartPoint {
            name: bucket.name.clone(),
            value: bucket.value,
        })
        .collect()
}

fn overview_line(stats: &DashboardStats) -> String {
    let schools = stats.summary.schools;
    let cities = stats.cities.len();
    let school_word = if schools == 1 { "school" } else { "schools" };
    let city_word = if cities == 1 { "city" } else { "cities" };
    format!("{schools} {school_word} across {cities} {city_word}")
}

/// Admin dashboard: loads stats once per visit and renders them.
#[component]
pub fn Dashboard() -> Element {
    let flags: FeatureFlags = use_context();
    let greeting = use_greeting();

    let mut stats = use_resource(move || async move {
        let result = get_dashboard_stats().await;
        if let Err(e) = &result {
            tracing::warn!("dashboard stats failed: {e}");
        }
        result
    });

    let state = ViewState::from_resource(stats.read().as_ref());

    rsx! {
        DashboardView {
            state,
            greeting: greeting(),
            show_chart: flags.city_chart,
            on_retry: move |_| stats.restart(),
        }
    }
}

/// Renders one [`ViewState`]; holds no state of its own.
#[component]
pub fn DashboardView(
    state: ViewState,
    greeting: String,
    #[props(default = true)] show_chart: bool,
    #[props(default)] on_retry: Option<EventHandler<()>>,
) -> Element {
    let body = match state {
        ViewState::Loading => rsx! { DashboardSkeleton { show_chart } },
        ViewState::Errored(message) => rsx! {
            Card {
                CardHeader {
                    CardTitle { "Could not load the dashboard" }
                    CardDescription { "{message}" }
                }
                CardContent {
                    Button {
                        onclick: move |_| {
                            if let Some(handler) = &on_retry {
                                handler.call(());
                            }
                        },
                        "Retry"
                    }
                }
            }
        },
        ViewState::Ready(stats) => {
            let overview = overview_line(&stats);
            rsx! {
                div { class: "dashboard-greeting",
                    h2 { class: "dashboard-greeting-title", "{greeting}" }
                    p { class: "dashboard-greeting-summary", "{overview}" }
                }
                StatsGrid { summary: stats.summary }
                if show_chart {
                    CityChartCard { cities: stats.cities }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
        PageShell { title: "Dashboard", {body} }
    }
}

#[component]
fn StatsGrid(summary: StatsSummary) -> Element {
    rsx! {
        div { class: "stats-grid",
            for config in STAT_CARDS.iter() {
                StatCard {
                    key: "{config.label}",
                    label: config.label,
                    value: config.kind.count(&summary),
                    tone: config.tone,
                    icon: config.kind.icon(),
                }
            }
        }
    }
}

/// Schools per city. With no schools the chart is replaced by a placeholder.
#[component]
fn CityChartCard(cities: Vec<CityBucket>) -> Element {
    let points = city_points(&cities);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Schools by city" }
            }
            CardContent {
                if points.is_empty() {
                    ChartEmpty { message: "No schools recorded yet" }
                } else {
                    BarChart { points, color_for: palette_color }
                }
            }
        }
    }
}
