use dioxus::prelude::*;
use std::fmt;

use crate::theme::STAT_ICON_SIZE;

/// Height of a single text line placeholder, in pixels.
pub const LINE_HEIGHT: u32 = 16;

/// A placeholder dimension: whole pixels, or a literal CSS length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dimension {
    Px(u32),
    /// Rendered verbatim, e.g. `"60%"` or `"12rem"`.
    Raw(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(px) => write!(f, "{px}px"),
            Dimension::Raw(raw) => f.write_str(raw),
        }
    }
}

impl From<u32> for Dimension {
    fn from(px: u32) -> Self {
        Dimension::Px(px)
    }
}

impl From<&str> for Dimension {
    fn from(raw: &str) -> Self {
        Dimension::Raw(raw.to_string())
    }
}

impl From<String> for Dimension {
    fn from(raw: String) -> Self {
        Dimension::Raw(raw)
    }
}

/// Geometry of a skeleton placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// One line of text.
    Line { width: Dimension },
    /// An avatar or icon badge.
    Circle { size: Dimension },
    /// A rectangle of exact size.
    Block { width: Dimension, height: Dimension },
    /// A whole content card. Not parametrized.
    Card,
}

impl Shape {
    pub fn line(width: impl Into<Dimension>) -> Self {
        Shape::Line {
            width: width.into(),
        }
    }

    pub fn circle(size: impl Into<Dimension>) -> Self {
        Shape::Circle { size: size.into() }
    }

    pub fn block(width: impl Into<Dimension>, height: impl Into<Dimension>) -> Self {
        Shape::Block {
            width: width.into(),
            height: height.into(),
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Shape::Line { .. } => "skeleton skeleton-line",
            Shape::Circle { .. } => "skeleton skeleton-circle",
            Shape::Block { .. } => "skeleton skeleton-block",
            Shape::Card => "skeleton-card",
        }
    }

    /// Inline style carrying the placeholder's geometry.
    pub fn geometry(&self) -> String {
        match self {
            Shape::Line { width } => format!(
                "width: {width}; height: {LINE_HEIGHT}px; margin-bottom: 8px; border-radius: 4px;"
            ),
            Shape::Circle { size } => format!(
                "width: {size}; height: {size}; min-width: {size}; min-height: {size}; border-radius: 50%;"
            ),
            Shape::Block { width, height } => {
                format!("width: {width}; height: {height}; border-radius: 0;")
            }
            Shape::Card => String::new(),
        }
    }

    /// Geometry followed by the caller's extra declarations, which win on conflict.
    pub fn style_with(&self, extra_style: Option<&str>) -> String {
        let geometry = self.geometry();
        match extra_style.map(str::trim).filter(|s| !s.is_empty()) {
            Some(extra) if geometry.is_empty() => extra.to_string(),
            Some(extra) => format!("{geometry} {extra}"),
            None => geometry,
        }
    }
}

/// A loading placeholder with animated pulse.
#[component]
pub fn Skeleton(
    shape: Shape,
    #[props(default)] extra_style: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", shape.class(), None, false),
        Attribute::new("style", shape.style_with(extra_style.as_deref()), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    match shape {
        Shape::Card => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div {
                ..merged,
                CardSkeletonBody {}
            }
        },
        Shape::Line { .. } | Shape::Circle { .. } | Shape::Block { .. } => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div {
                ..merged,
            }
        },
    }
}

/// Inside of a card placeholder: header lines beside an icon, a body,
/// and a footer caption beside an action.
#[component]
fn CardSkeletonBody() -> Element {
    rsx! {
        div { class: "placeholder-card-header",
            div { class: "placeholder-card-heading",
                Skeleton { shape: Shape::line("60%") }
                Skeleton { shape: Shape::line("40%") }
            }
            Skeleton { shape: Shape::block(STAT_ICON_SIZE, STAT_ICON_SIZE) }
        }
        Skeleton { shape: Shape::block("100%", 120_u32) }
        div { class: "placeholder-card-footer",
            Skeleton { shape: Shape::line("30%") }
            Skeleton { shape: Shape::block(80_u32, 32_u32) }
        }
    }
}
