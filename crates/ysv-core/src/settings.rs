//! Visualization settings shared by the mesh generators and the planar projector.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, YsvError};
use crate::tolerance::GeometryTolerance;
use crate::traits::Validate;

/// Resolution and range settings for the generated geometry.
///
/// Every field has a default, so a partial JSON document is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizationSettings {
    /// Upper mean-stress bound of the surface mesh (kPa)
    pub max_pressure: f64,
    /// Mean stress of the π-plane cross-section (kPa)
    pub pi_plane_pressure: f64,
    /// Pressure step of the meridian envelope sampling (kPa)
    pub meridian_step: f64,
    /// Number of pressure intervals of the Drucker-Prager mesh (rings = divisions + 1)
    pub ring_divisions: usize,
    /// Number of angular sectors of the Drucker-Prager mesh
    pub angular_sectors: usize,
    /// Number of angular steps of the Drucker-Prager π-plane circle
    pub pi_circle_points: usize,
    /// Upper bound on meridian samples; the step widens to stay below it
    pub max_meridian_samples: usize,
    /// Axis range of the 3D stress-space view (kPa)
    pub stress_range: (f64, f64),
    pub tolerance: GeometryTolerance,
}

impl VisualizationSettings {
    pub const MIN_SECTORS: usize = 3;
    /// Keeps `(divisions + 1) · sectors` vertex indices well inside `u32`.
    pub const MAX_SECTORS: usize = 1024;
    pub const MAX_RING_DIVISIONS: usize = 1024;
    pub const MAX_MERIDIAN_SAMPLES: usize = 100_000;

    /// Parse settings from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Return a copy that is safe to tessellate with.
    ///
    /// Unlike [`Validate::validate`] this never fails: counts are clamped to
    /// their allowed range and a non-positive or non-finite step falls back
    /// to the default.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut s = self.clone();

        if !(s.meridian_step.is_finite() && s.meridian_step > 0.0) {
            tracing::warn!(step = s.meridian_step, "Invalid meridian step, using default");
            s.meridian_step = defaults.meridian_step;
        }
        if !(1..=Self::MAX_RING_DIVISIONS).contains(&s.ring_divisions) {
            tracing::warn!(divisions = s.ring_divisions, "Ring divisions out of range, clamping");
            s.ring_divisions = s.ring_divisions.clamp(1, Self::MAX_RING_DIVISIONS);
        }
        if !(Self::MIN_SECTORS..=Self::MAX_SECTORS).contains(&s.angular_sectors) {
            tracing::warn!(sectors = s.angular_sectors, "Angular sectors out of range, clamping");
            s.angular_sectors = s.angular_sectors.clamp(Self::MIN_SECTORS, Self::MAX_SECTORS);
        }
        if !(Self::MIN_SECTORS..=Self::MAX_SECTORS).contains(&s.pi_circle_points) {
            tracing::warn!(points = s.pi_circle_points, "π-plane circle points out of range, clamping");
            s.pi_circle_points = s.pi_circle_points.clamp(Self::MIN_SECTORS, Self::MAX_SECTORS);
        }
        if !(1..=Self::MAX_MERIDIAN_SAMPLES).contains(&s.max_meridian_samples) {
            tracing::warn!(samples = s.max_meridian_samples, "Meridian sample limit out of range, clamping");
            s.max_meridian_samples = s.max_meridian_samples.clamp(1, Self::MAX_MERIDIAN_SAMPLES);
        }
        s
    }
}

impl Default for VisualizationSettings {
    fn default() -> Self {
        Self {
            max_pressure: 150.0,
            pi_plane_pressure: 50.0,
            meridian_step: 1.0,
            ring_divisions: 15,
            angular_sectors: 24,
            pi_circle_points: 50,
            max_meridian_samples: 2000,
            stress_range: (-50.0, 200.0),
            tolerance: GeometryTolerance::default(),
        }
    }
}

impl Validate for VisualizationSettings {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if !self.max_pressure.is_finite() {
            errors.push("max_pressure must be finite".to_string());
        }
        if !self.pi_plane_pressure.is_finite() {
            errors.push("pi_plane_pressure must be finite".to_string());
        }
        if !(self.meridian_step.is_finite() && self.meridian_step > 0.0) {
            errors.push("meridian_step must be a positive number".to_string());
        }
        check_count(&mut errors, "ring_divisions", self.ring_divisions, 1, Self::MAX_RING_DIVISIONS);
        check_count(
            &mut errors,
            "angular_sectors",
            self.angular_sectors,
            Self::MIN_SECTORS,
            Self::MAX_SECTORS,
        );
        check_count(
            &mut errors,
            "pi_circle_points",
            self.pi_circle_points,
            Self::MIN_SECTORS,
            Self::MAX_SECTORS,
        );
        check_count(
            &mut errors,
            "max_meridian_samples",
            self.max_meridian_samples,
            1,
            Self::MAX_MERIDIAN_SAMPLES,
        );
        if self.stress_range.0 >= self.stress_range.1 {
            errors.push("stress_range must be increasing".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(YsvError::Config(errors.join("; ")))
        }
    }
}

fn check_count(errors: &mut Vec<String>, name: &str, value: usize, min: usize, max: usize) {
    if value < min {
        errors.push(format!("{name} must be >= {min}"));
    } else if value > max {
        errors.push(format!("{name} must be <= {max}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = VisualizationSettings::default();
        assert_eq!(s.max_pressure, 150.0);
        assert_eq!(s.pi_plane_pressure, 50.0);
        assert_eq!(s.meridian_step, 1.0);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = VisualizationSettings::from_json_str(r#"{ "max_pressure": 200.0 }"#).unwrap();
        assert_eq!(s.max_pressure, 200.0);
        assert_eq!(s.angular_sectors, 24);
        assert_eq!(s.tolerance, GeometryTolerance::default());
    }

    #[test]
    fn test_invalid_json_settings_rejected() {
        let err = VisualizationSettings::from_json_str(r#"{ "meridian_step": 0.0 }"#).unwrap_err();
        assert!(matches!(err, YsvError::Config(_)));

        let err = VisualizationSettings::from_json_str("not json").unwrap_err();
        assert!(matches!(err, YsvError::Json(_)));
    }

    #[test]
    fn test_sanitized_repairs_bad_values() {
        let bad = VisualizationSettings {
            meridian_step: -1.0,
            ring_divisions: 0,
            angular_sectors: 1,
            pi_circle_points: 0,
            max_meridian_samples: 0,
            ..Default::default()
        };
        let s = bad.sanitized();
        assert_eq!(s.meridian_step, 1.0);
        assert_eq!(s.ring_divisions, 1);
        assert_eq!(s.angular_sectors, 3);
        assert_eq!(s.pi_circle_points, 3);
        assert_eq!(s.max_meridian_samples, 1);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_oversized_counts_rejected() {
        let err = VisualizationSettings::from_json_str(r#"{ "ring_divisions": 18446744073709551615 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("ring_divisions must be <= 1024"));

        let err = VisualizationSettings::from_json_str(r#"{ "angular_sectors": 5000, "pi_circle_points": 5000 }"#)
            .unwrap_err();
        assert!(err.to_string().contains("angular_sectors"));
        assert!(err.to_string().contains("pi_circle_points"));
    }

    #[test]
    fn test_sanitized_clamps_oversized_counts() {
        let huge = VisualizationSettings {
            ring_divisions: usize::MAX,
            angular_sectors: usize::MAX,
            pi_circle_points: usize::MAX,
            max_meridian_samples: usize::MAX,
            ..Default::default()
        };
        let s = huge.sanitized();
        assert_eq!(s.ring_divisions, VisualizationSettings::MAX_RING_DIVISIONS);
        assert_eq!(s.angular_sectors, VisualizationSettings::MAX_SECTORS);
        assert_eq!(s.pi_circle_points, VisualizationSettings::MAX_SECTORS);
        assert_eq!(s.max_meridian_samples, VisualizationSettings::MAX_MERIDIAN_SAMPLES);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("ysv_settings_does_not_exist.json");
        let err = VisualizationSettings::load(&path).unwrap_err();
        assert!(matches!(err, YsvError::Io(_)));
    }
}
