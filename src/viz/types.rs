//! Public enums shared by the builder, layout and renderer.

use serde::{Deserialize, Serialize};

/// The two presentation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Time-series line layout: gridlines on Y, left spine hidden.
    Line,
    /// Horizontal bar layout: gridlines on X, bottom spine hidden, X labels on top.
    Bar,
}

/// Coordinate frame used to place the accent rule, tab and header/footer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorMode {
    /// Fractions of the whole canvas, independent of where the plot sits.
    #[default]
    Figure,
    /// Fractions of the plot frame itself; values above 1.0 sit above its top edge.
    Axes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisId {
    X,
    Y,
}

/// One edge of the plot frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// What a positioned text item is, so tests and renderers can pick it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Subtitle,
    Source,
    TickLabel(AxisId),
    AxisLabel(AxisId),
}
