#[cfg(feature = "cli")]
pub mod cli;
pub mod roster;

use crate::core::ring::ArcMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_RADIUS: f64 = 180.0;
pub const DEFAULT_SLIDE_DISTANCE: f64 = 300.0;

/// Tunables for one carousel instance. Every field has a default, so a
/// roster file may omit the `[carousel]` table entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    pub radius: f64,
    pub reduced_motion: bool,
    pub arc: ArcMode,
    pub slide_distance: f64,
    pub ring_duration_secs: f64,
    pub opacity_duration_secs: f64,
    pub spring_stiffness: f64,
    pub spring_damping: f64,
    pub chip_stagger_secs: f64,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            reduced_motion: false,
            arc: ArcMode::Raw,
            slide_distance: DEFAULT_SLIDE_DISTANCE,
            ring_duration_secs: 0.5,
            opacity_duration_secs: 0.2,
            spring_stiffness: 300.0,
            spring_damping: 30.0,
            chip_stagger_secs: 0.05,
        }
    }
}

impl CarouselOptions {
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn with_arc(mut self, arc: ArcMode) -> Self {
        self.arc = arc;
        self
    }
}

impl Validate for CarouselOptions {
    fn validate(&self) -> Result<()> {
        validate_range("carousel.radius", self.radius, 0.0, 10_000.0)?;
        validate_range("carousel.slide_distance", self.slide_distance, 0.0, 10_000.0)?;
        validate_range("carousel.ring_duration_secs", self.ring_duration_secs, 0.0, 60.0)?;
        validate_range(
            "carousel.opacity_duration_secs",
            self.opacity_duration_secs,
            0.0,
            60.0,
        )?;
        validate_range("carousel.spring_stiffness", self.spring_stiffness, 1.0, 10_000.0)?;
        validate_range("carousel.spring_damping", self.spring_damping, 0.0, 1_000.0)?;
        validate_range("carousel.chip_stagger_secs", self.chip_stagger_secs, 0.0, 10.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_gallery() {
        let options = CarouselOptions::default();
        assert_eq!(options.radius, 180.0);
        assert_eq!(options.slide_distance, 300.0);
        assert_eq!(options.arc, ArcMode::Raw);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_negative_radius_rejected() {
        let options = CarouselOptions::default().with_radius(-5.0);
        assert!(options.validate().is_err());
    }
}
