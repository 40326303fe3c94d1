//! Material parameters for the supported yield criteria.

use serde::{Deserialize, Serialize};

use crate::error::{Result, YsvError};
use crate::traits::Validate;

/// Which yield criterion a parameter set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    MohrCoulomb,
    DruckerPrager,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::MohrCoulomb, ModelKind::DruckerPrager];

    pub fn name(self) -> &'static str {
        match self {
            ModelKind::MohrCoulomb => "Mohr-Coulomb",
            ModelKind::DruckerPrager => "Drucker-Prager",
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mohr-Coulomb strength parameters.
///
/// The friction angle is kept in degrees, the unit the UI works in; geometry
/// code reads it through [`MohrCoulombParams::friction_angle_rad`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MohrCoulombParams {
    /// Cohesion `c` (kPa)
    pub cohesion: f64,
    /// Friction angle `φ` (degrees)
    pub friction_angle_deg: f64,
}

impl MohrCoulombParams {
    pub const COHESION_RANGE: (f64, f64) = (0.0, 100.0);
    pub const FRICTION_ANGLE_RANGE: (f64, f64) = (0.0, 45.0);

    pub fn new(cohesion: f64, friction_angle_deg: f64) -> Self {
        Self {
            cohesion,
            friction_angle_deg,
        }
    }

    pub fn friction_angle_rad(&self) -> f64 {
        self.friction_angle_deg.to_radians()
    }
}

impl Default for MohrCoulombParams {
    fn default() -> Self {
        Self::new(10.0, 30.0)
    }
}

impl Validate for MohrCoulombParams {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        check_range(&mut errors, "cohesion", self.cohesion, Self::COHESION_RANGE);
        check_range(
            &mut errors,
            "friction_angle_deg",
            self.friction_angle_deg,
            Self::FRICTION_ANGLE_RANGE,
        );
        into_result(errors)
    }
}

/// Drucker-Prager cone parameters in the meridian form `q = m·p + k_d`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DruckerPragerParams {
    /// Slope `m` of the envelope in the p-q plane
    pub slope: f64,
    /// Intercept `k_d` of the envelope on the q axis (kPa)
    pub cohesion_intercept: f64,
}

impl DruckerPragerParams {
    pub const SLOPE_RANGE: (f64, f64) = (0.0, 2.0);
    pub const COHESION_INTERCEPT_RANGE: (f64, f64) = (0.0, 50.0);

    pub fn new(slope: f64, cohesion_intercept: f64) -> Self {
        Self {
            slope,
            cohesion_intercept,
        }
    }
}

impl Default for DruckerPragerParams {
    fn default() -> Self {
        Self::new(0.6, 10.0)
    }
}

impl Validate for DruckerPragerParams {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        check_range(&mut errors, "slope", self.slope, Self::SLOPE_RANGE);
        check_range(
            &mut errors,
            "cohesion_intercept",
            self.cohesion_intercept,
            Self::COHESION_INTERCEPT_RANGE,
        );
        into_result(errors)
    }
}

/// Parameters of one yield criterion, tagged by model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum MaterialParameters {
    MohrCoulomb(MohrCoulombParams),
    DruckerPrager(DruckerPragerParams),
}

impl MaterialParameters {
    pub fn mohr_coulomb(cohesion: f64, friction_angle_deg: f64) -> Self {
        Self::MohrCoulomb(MohrCoulombParams::new(cohesion, friction_angle_deg))
    }

    pub fn drucker_prager(slope: f64, cohesion_intercept: f64) -> Self {
        Self::DruckerPrager(DruckerPragerParams::new(slope, cohesion_intercept))
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            Self::MohrCoulomb(_) => ModelKind::MohrCoulomb,
            Self::DruckerPrager(_) => ModelKind::DruckerPrager,
        }
    }

    /// Default parameters of a model, used when the UI switches criteria.
    pub fn default_for(kind: ModelKind) -> Self {
        match kind {
            ModelKind::MohrCoulomb => Self::MohrCoulomb(MohrCoulombParams::default()),
            ModelKind::DruckerPrager => Self::DruckerPrager(DruckerPragerParams::default()),
        }
    }
}

impl Validate for MaterialParameters {
    fn validate(&self) -> Result<()> {
        match self {
            Self::MohrCoulomb(p) => p.validate(),
            Self::DruckerPrager(p) => p.validate(),
        }
    }
}

fn check_range(errors: &mut Vec<String>, name: &str, value: f64, (min, max): (f64, f64)) {
    if !value.is_finite() {
        errors.push(format!("{name} must be a finite number"));
    } else if value < min {
        errors.push(format!("{name} must be >= {min}"));
    } else if value > max {
        errors.push(format!("{name} must be <= {max}"));
    }
}

fn into_result(errors: Vec<String>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(YsvError::Validation(errors.join("; ")))
    }
}
