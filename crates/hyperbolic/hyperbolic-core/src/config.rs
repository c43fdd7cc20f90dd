//! Renderer configuration.
//!
//! All values are fixed once a [`crate::Renderer`] is built. The defaults
//! reproduce the reference animation; hosts may override individual keys
//! from JSON (missing keys fall back to the defaults).

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigParseError};

/// Tuning and layout constants for the hyperbolic renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lines per pencil.
    pub line_count: u32,
    /// Radius of the two ideal point circles; also the numerator of the
    /// pencil A radius `min_radius / b`.
    pub min_radius: f64,
    /// Frames for one full cycle of a per-line scalar ("speed").
    pub period: f64,
    /// Horizontal offset between the disk edge and each ideal point circle.
    pub band_half_width: f64,
    /// Pencil B vertical offset scale: `c = scale / b - scale * sign(b)`.
    pub vertical_scale: f64,

    /// Base phase of the boundary vertices along pencil A.
    pub corner_phase_a: f64,
    /// Base phase of the boundary vertices along pencil B.
    pub corner_phase_b: f64,

    /// Pixel distance above which a polyline starts a new subpath instead of
    /// joining to the previous point. Empirical tuning value.
    pub break_distance: f64,
    /// Maximum per-frame scalar change still treated as a zero crossing
    /// (larger jumps are the periodic wrap at +/-1). Heuristic, not derived
    /// from the geometry.
    pub crossing_window: f64,

    /// Tick interval for hosts that drive the clock from a timer.
    pub frame_interval_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_count: 10,
            min_radius: 50.0,
            period: 750.0,
            band_half_width: 50.0,
            vertical_scale: 100.0,
            corner_phase_a: 875.0,
            corner_phase_b: 420.0,
            break_distance: 20.0,
            crossing_window: 1.0,
            frame_interval_ms: 1000.0 / 30.0,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl Config {
    /// Check the setup contract. Per-frame code assumes a validated config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.line_count == 0 {
            return Err(ConfigError::EmptyPencil);
        }
        positive("min_radius", self.min_radius)?;
        positive("period", self.period)?;
        positive("vertical_scale", self.vertical_scale)?;
        positive("frame_interval_ms", self.frame_interval_ms)?;
        non_negative("band_half_width", self.band_half_width)?;
        non_negative("corner_phase_a", self.corner_phase_a)?;
        non_negative("corner_phase_b", self.corner_phase_b)?;
        non_negative("break_distance", self.break_distance)?;
        non_negative("crossing_window", self.crossing_window)?;
        Ok(())
    }

    /// Half of the period; the scalar is `(phase mod period - half) / half`.
    #[inline]
    pub fn half_period(&self) -> f64 {
        self.period * 0.5
    }

    /// Phase offset between neighbouring lines of a pencil.
    #[inline]
    pub fn line_spacing(&self) -> f64 {
        self.period / self.line_count as f64
    }

    /// Parse a (possibly partial) JSON object into a validated config.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigParseError> {
        let cfg: Config = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
