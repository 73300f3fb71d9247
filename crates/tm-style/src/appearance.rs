//! Appearance parameters shared by every rule of a style

use serde::{Deserialize, Serialize};
use tm_core::Color;

/// Stroke, fill and marker settings applied uniformly to generated symbols.
///
/// A plain value: setters consume and return a new configuration, so one
/// configuration can be handed to several builders without aliasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Line symbol stroke width
    pub line_width: f32,
    /// Polygon outline and point marker stroke width
    pub outline_width: f32,
    pub line_opacity: f32,
    pub outline_opacity: f32,
    /// Polygon and point marker fill opacity
    pub fill_opacity: f32,
    /// Polygon outline color
    pub outline_color: Color,
    /// Point marker diameter
    pub marker_size: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            outline_width: 0.5,
            line_opacity: 1.0,
            outline_opacity: 1.0,
            fill_opacity: 1.0,
            outline_color: Color::LIGHT_GRAY,
            marker_size: 7.0,
        }
    }
}

impl AppearanceConfig {
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_outline_width(mut self, width: f32) -> Self {
        self.outline_width = width;
        self
    }

    pub fn with_line_opacity(mut self, opacity: f32) -> Self {
        self.line_opacity = opacity;
        self
    }

    pub fn with_outline_opacity(mut self, opacity: f32) -> Self {
        self.outline_opacity = opacity;
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f32) -> Self {
        self.fill_opacity = opacity;
        self
    }

    pub fn with_outline_color(mut self, color: Color) -> Self {
        self.outline_color = color;
        self
    }

    pub fn with_marker_size(mut self, size: f32) -> Self {
        self.marker_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppearanceConfig::default();
        assert_eq!(config.line_width, 1.0);
        assert_eq!(config.outline_width, 0.5);
        assert_eq!(config.line_opacity, 1.0);
        assert_eq!(config.outline_opacity, 1.0);
        assert_eq!(config.fill_opacity, 1.0);
        assert_eq!(config.outline_color, Color::from_rgb(225, 225, 225));
        assert_eq!(config.marker_size, 7.0);
    }

    #[test]
    fn test_setters_leave_original_untouched() {
        let base = AppearanceConfig::default();
        let adjusted = base.with_fill_opacity(0.5).with_marker_size(10.0);

        assert_eq!(base.fill_opacity, 1.0);
        assert_eq!(adjusted.fill_opacity, 0.5);
        assert_eq!(adjusted.marker_size, 10.0);
    }

    #[test]
    fn test_partial_json() {
        let config: AppearanceConfig =
            serde_json::from_str(r##"{"fill_opacity": 0.7, "outline_color": "#000000"}"##).unwrap();
        assert_eq!(config.fill_opacity, 0.7);
        assert_eq!(config.outline_color, Color::BLACK);
        assert_eq!(config.marker_size, 7.0);
    }
}
