//! Widget configuration.
//!
//! Every tunable constant of the widget lives here. The defaults reproduce the
//! stock behaviour: a 500 x 100 grid, a 10 ms scroll tick, a 50 px dead-zone
//! margin and a quadratic speed ramp saturating at 300 px/s.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScrollerError};

/// Default id of the `<style>` element the selection rule is written into.
pub const DEFAULT_STYLE_ELEMENT_ID: &str = "scroll-selection-style";

/// Default highlight colour for selected cells.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "tomato";

/// What happens to the selection end when the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerUpPolicy {
    /// Keep the rectangle at its last throttled position.
    #[default]
    Freeze,
    /// Make the cell under the pointer the selection end.
    Commit,
}

/// Configuration for the `SelectionScroller` widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollerConfig {
    /// Number of table rows
    pub rows: u32,
    /// Number of table columns
    pub cols: u32,
    /// Period of the auto-scroll ticker (ms)
    pub tick_interval_ms: u32,
    /// Width of the band along each edge where auto-scroll starts (px)
    pub scroll_margin: f64,
    /// Exponent of the speed ramp; higher grows faster away from the margin
    pub speed_exponent: f64,
    /// Maximum scroll speed (px per second-equivalent)
    pub max_speed: f64,
    /// Scrolloff at which `max_speed` is reached (px)
    pub max_scrolloff: f64,
    /// Minimum time between selection style refreshes (ms)
    pub style_update_interval_ms: f64,
    /// Id of the `<style>` element that receives the selection rule
    pub style_element_id: String,
    /// CSS colour used for selected cells
    pub highlight_color: String,
    /// Sort start/end before building the rule
    pub normalize_bounds: bool,
    pub pointer_up_policy: PointerUpPolicy,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            rows: 500,
            cols: 100,
            tick_interval_ms: 10,
            scroll_margin: 50.0,
            speed_exponent: 2.0,
            max_speed: 300.0,
            max_scrolloff: 150.0,
            style_update_interval_ms: 150.0,
            style_element_id: DEFAULT_STYLE_ELEMENT_ID.to_string(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
            normalize_bounds: false,
            pointer_up_policy: PointerUpPolicy::Freeze,
        }
    }
}

impl ScrollerConfig {
    /// Parse a JSON document; missing keys take their defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or the result fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value can drive the speed model and the ticker.
    ///
    /// # Errors
    /// Returns [`ScrollerError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(invalid("tickIntervalMs must be positive"));
        }
        if !self.max_scrolloff.is_finite() || self.max_scrolloff <= 0.0 {
            return Err(invalid("maxScrolloff must be a positive number"));
        }
        for (name, value) in [
            ("scrollMargin", self.scroll_margin),
            ("speedExponent", self.speed_exponent),
            ("maxSpeed", self.max_speed),
            ("styleUpdateIntervalMs", self.style_update_interval_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(&format!("{name} must be a non-negative number")));
            }
        }
        if self.style_element_id.trim().is_empty() {
            return Err(invalid("styleElementId must not be empty"));
        }
        if self.highlight_color.trim().is_empty() {
            return Err(invalid("highlightColor must not be empty"));
        }
        Ok(())
    }

    /// Tick period as a float, for speed scaling.
    pub fn tick_interval(&self) -> f64 {
        f64::from(self.tick_interval_ms)
    }
}

fn invalid(msg: &str) -> ScrollerError {
    ScrollerError::InvalidConfig(msg.to_string())
}
