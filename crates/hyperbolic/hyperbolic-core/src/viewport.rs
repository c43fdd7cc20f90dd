//! Viewport: canvas size and center, changed only by `resize`.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::ConfigError;
use crate::geometry::{Circle, Point};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        let mut vp = Self::default();
        vp.resize(width, height)?;
        Ok(vp)
    }

    /// Set the canvas size and recenter. Rejects negative or non-finite sizes
    /// and leaves the viewport untouched in that case.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), ConfigError> {
        let ok = |v: f64| v.is_finite() && v >= 0.0;
        if !ok(width) || !ok(height) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        self.width = width;
        self.height = height;
        self.center_x = width / 2.0;
        self.center_y = height / 2.0;
        Ok(())
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// The two ideal point circles flanking the disk on the horizontal axis,
    /// left then right. Every pencil A arc passes between them; pencil B arcs
    /// are built tangent-orthogonal to the right one.
    pub fn ideal_points(&self, cfg: &Config) -> [Circle; 2] {
        let offset = cfg.min_radius + cfg.band_half_width;
        [
            Circle::new(self.center_x - offset, self.center_y, cfg.min_radius),
            Circle::new(self.center_x + offset, self.center_y, cfg.min_radius),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_recenters() {
        let mut vp = Viewport::new(800.0, 600.0).unwrap();
        assert_eq!(vp.center(), Point::new(400.0, 300.0));
        vp.resize(1024.0, 768.0).unwrap();
        assert_eq!((vp.center_x, vp.center_y), (512.0, 384.0));
        assert!(vp.resize(-1.0, 10.0).is_err());
        assert_eq!(vp.width, 1024.0);
    }

    #[test]
    fn ideal_points_flank_center() {
        let vp = Viewport::new(800.0, 600.0).unwrap();
        let [left, right] = vp.ideal_points(&Config::default());
        assert_eq!(left, Circle::new(300.0, 300.0, 50.0));
        assert_eq!(right, Circle::new(500.0, 300.0, 50.0));
    }
}
