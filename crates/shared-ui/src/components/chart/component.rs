use dioxus::prelude::*;

use crate::theme::CHART_HEIGHT;

/// One bar of a [`BarChart`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub name: String,
    pub value: u64,
}

/// Bar height as a percentage of the tallest bar.
pub fn bar_height_percent(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (value as f64 / max as f64 * 100.0).min(100.0)
}

/// Vertical bar chart. Point `i` is colored `color_for(i)`.
///
/// Callers render [`ChartEmpty`] instead when there are no points.
#[component]
pub fn BarChart(points: Vec<ChartPoint>, color_for: fn(usize) -> &'static str) -> Element {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0);
    let bars: Vec<(ChartPoint, String)> = points
        .into_iter()
        .enumerate()
        .map(|(index, point)| {
            let style = format!(
                "height: {:.1}%; background: {};",
                bar_height_percent(point.value, max),
                color_for(index)
            );
            (point, style)
        })
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "bar-chart", role: "img", style: "height: {CHART_HEIGHT}px;",
            for (point, style) in bars {
                div { key: "{point.name}", class: "bar-chart-column",
                    span { class: "bar-chart-value", "{point.value}" }
                    div {
                        class: "bar-chart-bar",
                        title: "{point.name}: {point.value}",
                        style: "{style}",
                    }
                    span { class: "bar-chart-label", "{point.name}" }
                }
            }
        }
    }
}

/// Stand-in for a chart with nothing to plot, sized like the plot area.
#[component]
pub fn ChartEmpty(#[props(default = "No data yet".to_string())] message: String) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "chart-empty", style: "height: {CHART_HEIGHT}px;",
            p { class: "chart-empty-text", "{message}" }
        }
    }
}
