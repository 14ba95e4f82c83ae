//! Tunable layout and theme parameters.
//!
//! Every public entry point uses [`RenderConfig::DEFAULT`]; the `*_with`
//! variants accept an explicit config so hosts can load overrides from their
//! own settings JSON:
//!
//! ```json
//! { "guideGap": 6, "candy": { "jitterStrong": 0.6 }, "ruledTheme": "zigzag" }
//! ```
//!
//! Absent keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{AVG_CHAR_WIDTH_RATIO, DESCENT_RATIO, GUIDE_GAP};
use crate::shape::Theme;

/// Errors produced while loading a [`RenderConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not valid JSON for a config document.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but is outside its usable range.
    #[error("invalid config value: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoughConfig {
    /// Upper bound on the jitter applied to any single vertex.
    pub max_offset: f64,
    /// Jitter as a fraction of the segment length, before the cap.
    pub offset_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlowConfig {
    pub width_factor: f64,
    pub opacity: f64,
    pub blur_factor: f64,
    pub shadow_opacity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandyConfig {
    /// Base circle diameter as a fraction of the stroke width.
    pub diameter_ratio: f64,
    /// Center-to-center spacing as a multiple of the base diameter.
    pub spacing_factor: f64,
    pub jitter_weak: f64,
    pub jitter_middle: f64,
    pub jitter_strong: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZigzagConfig {
    /// Default tooth length as a multiple of the stroke width.
    pub size_ratio: f64,
    pub min_size: f64,
    /// Default perpendicular displacement as a multiple of the stroke width.
    pub thickness_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WobblyConfig {
    /// Sine periods across one stroke.
    pub periods: f64,
    /// Half-width oscillation as a fraction of the base half-width.
    pub amplitude: f64,
    /// Perpendicular centerline jitter as a multiple of the stroke width.
    pub centerline_jitter: f64,
    /// Extension of each edge stroke past the corner it meets.
    pub edge_overlap: f64,
    /// Target distance between ribbon samples.
    pub step: f64,
}

/// All tunables consumed by the layout and shape engines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Glyph advance estimate used without a measurement surface.
    pub avg_char_width_ratio: f64,
    /// Descent below the baseline as a fraction of the font size.
    pub descent_ratio: f64,
    /// Distance from a baseline down to its guide line.
    pub guide_gap: f64,
    /// Theme for ruled guide lines.
    pub ruled_theme: Theme,
    /// Outline width multiplier for the multi-strokes theme.
    pub outline_factor: f64,
    pub rough: RoughConfig,
    pub glow: GlowConfig,
    pub candy: CandyConfig,
    pub zigzag: ZigzagConfig,
    pub wobbly: WobblyConfig,
}

impl RoughConfig {
    pub const DEFAULT: Self = Self { max_offset: 2.5, offset_ratio: 0.02 };
}

impl GlowConfig {
    pub const DEFAULT: Self = Self { width_factor: 2.0, opacity: 0.6, blur_factor: 2.0, shadow_opacity: 0.4 };
}

impl CandyConfig {
    pub const DEFAULT: Self = Self {
        diameter_ratio: 0.75,
        spacing_factor: 2.0,
        jitter_weak: 0.15,
        jitter_middle: 0.3,
        jitter_strong: 0.5,
    };
}

impl ZigzagConfig {
    pub const DEFAULT: Self = Self { size_ratio: 4.0, min_size: 6.0, thickness_ratio: 1.5 };
}

impl WobblyConfig {
    pub const DEFAULT: Self = Self {
        periods: 8.0,
        amplitude: 0.35,
        centerline_jitter: 0.3,
        edge_overlap: 3.0,
        step: 4.0,
    };
}

impl RenderConfig {
    pub const DEFAULT: Self = Self {
        avg_char_width_ratio: AVG_CHAR_WIDTH_RATIO,
        descent_ratio: DESCENT_RATIO,
        guide_gap: GUIDE_GAP,
        ruled_theme: Theme::Rough,
        outline_factor: 1.5,
        rough: RoughConfig::DEFAULT,
        glow: GlowConfig::DEFAULT,
        candy: CandyConfig::DEFAULT,
        zigzag: ZigzagConfig::DEFAULT,
        wobbly: WobblyConfig::DEFAULT,
    };

    /// Parse a config document, filling absent keys from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value fails [`Self::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the generators.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("avgCharWidthRatio", self.avg_char_width_ratio),
            ("outlineFactor", self.outline_factor),
            ("candy.diameterRatio", self.candy.diameter_ratio),
            ("candy.spacingFactor", self.candy.spacing_factor),
            ("zigzag.sizeRatio", self.zigzag.size_ratio),
            ("zigzag.minSize", self.zigzag.min_size),
            ("wobbly.periods", self.wobbly.periods),
            ("wobbly.step", self.wobbly.step),
            ("glow.widthFactor", self.glow.width_factor),
        ];
        for (key, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{key} must be positive, got {value}")));
            }
        }
        let unit = [
            ("glow.opacity", self.glow.opacity),
            ("glow.shadowOpacity", self.glow.shadow_opacity),
            ("wobbly.amplitude", self.wobbly.amplitude),
            ("descentRatio", self.descent_ratio),
        ];
        for (key, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("{key} must be within [0, 1], got {value}")));
            }
        }
        let non_negative = [
            ("guideGap", self.guide_gap),
            ("rough.maxOffset", self.rough.max_offset),
            ("rough.offsetRatio", self.rough.offset_ratio),
            ("glow.blurFactor", self.glow.blur_factor),
            ("candy.jitterWeak", self.candy.jitter_weak),
            ("candy.jitterMiddle", self.candy.jitter_middle),
            ("candy.jitterStrong", self.candy.jitter_strong),
            ("zigzag.thicknessRatio", self.zigzag.thickness_ratio),
            ("wobbly.centerlineJitter", self.wobbly.centerline_jitter),
            ("wobbly.edgeOverlap", self.wobbly.edge_overlap),
        ];
        for (key, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{key} must be non-negative, got {value}")));
            }
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for RoughConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for CandyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for ZigzagConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for WobblyConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
