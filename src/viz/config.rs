//! Per-chart configuration values and the explicit rendering context.

use serde::{Deserialize, Serialize};

use super::types::AnchorMode;

/// How tick positions along an axis are chosen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickSpec {
    /// "Nice" round numbers across the visible range.
    #[default]
    Auto,
    /// Exactly these positions (those outside the visible range are dropped).
    Fixed(Vec<f64>),
    /// Every `step` units starting at the lower limit, upper limit included.
    Step(f64),
    /// This many evenly spaced positions from the lower to the upper limit.
    Evenly(usize),
}

/// Everything the caller chooses about one chart. Built fresh per chart and
/// consumed by [`crate::viz::build`].
///
/// Colors, gridline style and decoration offsets are part of the fixed look and
/// are not configurable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyleConfig {
    /// (width, height) in inches.
    pub figure_size: (f64, f64),
    pub title: String,
    pub subtitle: String,
    pub source: String,
    pub x_limits: Option<(f64, f64)>,
    pub y_limits: Option<(f64, f64)>,
    pub x_ticks: TickSpec,
    pub y_ticks: TickSpec,
    pub x_tick_labels: Option<Vec<String>>,
    pub y_tick_labels: Option<Vec<String>>,
    pub anchor: AnchorMode,
}

impl Default for ChartStyleConfig {
    fn default() -> Self {
        Self::line()
    }
}

impl ChartStyleConfig {
    /// Defaults of the line chart helper: 8×4 in.
    pub fn line() -> Self {
        Self {
            figure_size: (8.0, 4.0),
            title: "Title".into(),
            subtitle: "Sub-title".into(),
            source: "Source".into(),
            x_limits: None,
            y_limits: None,
            x_ticks: TickSpec::Auto,
            y_ticks: TickSpec::Auto,
            x_tick_labels: None,
            y_tick_labels: None,
            anchor: AnchorMode::Figure,
        }
    }

    /// Defaults of the bar chart helper: a tall 3×6 in canvas.
    pub fn bar() -> Self {
        Self {
            figure_size: (3.0, 6.0),
            ..Self::line()
        }
    }

    pub fn figure_size(mut self, width: f64, height: f64) -> Self {
        self.figure_size = (width, height);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn x_limits(mut self, lo: f64, hi: f64) -> Self {
        self.x_limits = Some((lo, hi));
        self
    }

    pub fn y_limits(mut self, lo: f64, hi: f64) -> Self {
        self.y_limits = Some((lo, hi));
        self
    }

    pub fn x_ticks(mut self, ticks: TickSpec) -> Self {
        self.x_ticks = ticks;
        self
    }

    pub fn y_ticks(mut self, ticks: TickSpec) -> Self {
        self.y_ticks = ticks;
        self
    }

    pub fn x_tick_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.x_tick_labels = Some(labels.into_iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn y_tick_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.y_tick_labels = Some(labels.into_iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn anchor(mut self, anchor: AnchorMode) -> Self {
        self.anchor = anchor;
        self
    }

    /// Load a config from a JSON file; missing fields fall back to the line defaults.
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> crate::error::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text)
            .map_err(|e| crate::error::ChartError::InvalidParameter(format!("config: {e}")))
    }
}

/// Resolution and tick-label locale. Each chart carries its own copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderContext {
    /// Dots per inch used to turn inches and points into pixels.
    pub dpi: f64,
    /// Locale tag for tick labels (`"en"`, `"de"`, ...).
    pub locale: String,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            dpi: 100.0,
            locale: "en".into(),
        }
    }
}

impl RenderContext {
    pub fn with_dpi(dpi: f64) -> Self {
        Self {
            dpi,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg: ChartStyleConfig =
            serde_json::from_str(r#"{"title":"Hello","y_limits":[0.0,1.0],"y_ticks":{"step":0.25}}"#)
                .unwrap();
        assert_eq!(cfg.title, "Hello");
        assert_eq!(cfg.figure_size, (8.0, 4.0));
        assert_eq!(cfg.y_limits, Some((0.0, 1.0)));
        assert_eq!(cfg.y_ticks, TickSpec::Step(0.25));
        assert_eq!(cfg.anchor, AnchorMode::Figure);
    }

    #[test]
    fn anchor_mode_is_snake_case() {
        let cfg: ChartStyleConfig = serde_json::from_str(r#"{"anchor":"axes"}"#).unwrap();
        assert_eq!(cfg.anchor, AnchorMode::Axes);
    }
}
