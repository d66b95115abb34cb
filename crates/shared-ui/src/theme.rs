//! Static color and layout tables shared by real components and their
//! skeleton placeholders.

/// Chart series colors, assigned by point position.
pub const CHART_PALETTE: &[&str] = &[
    "#6366f1", // indigo
    "#10b981", // emerald
    "#f59e0b", // amber
    "#f43f5e", // rose
    "#0ea5e9", // sky
    "#8b5cf6", // violet
];

/// Height of the chart plot area, in pixels.
pub const CHART_HEIGHT: u32 = 300;

/// Diameter of the icon badge on a stat card, in pixels.
pub const STAT_ICON_SIZE: u32 = 48;

/// Diameter of a table row avatar, in pixels.
pub const AVATAR_SIZE: u32 = 32;

/// Height of text inputs and form buttons, in pixels.
pub const INPUT_HEIGHT: u32 = 40;

/// Color for the point at `index`, cycling through [`CHART_PALETTE`].
pub fn palette_color(index: usize) -> &'static str {
    color_at(CHART_PALETTE, index)
}

/// Color for the point at `index` in an arbitrary palette.
/// An empty palette yields `currentColor`.
fn color_at(palette: &'static [&'static str], index: usize) -> &'static str {
    if palette.is_empty() {
        return "currentColor";
    }
    palette[index % palette.len()]
}

/// Accent applied to a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Indigo,
    Emerald,
    Amber,
}

impl Tone {
    /// Value of the card's `data-tone` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Indigo => "indigo",
            Tone::Emerald => "emerald",
            Tone::Amber => "amber",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Tone::Indigo => CHART_PALETTE[0],
            Tone::Emerald => CHART_PALETTE[1],
            Tone::Amber => CHART_PALETTE[2],
        }
    }
}
