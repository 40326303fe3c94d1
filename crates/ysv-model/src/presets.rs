//! Named material presets shown in the model selector.

use serde::Serialize;
use ysv_core::{MaterialParameters, ModelKind, Result, YsvError};

/// A named parameter set with a display color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub params: MaterialParameters,
    pub color: &'static str,
}

const fn mohr_coulomb(
    name: &'static str,
    description: &'static str,
    cohesion: f64,
    friction_angle_deg: f64,
    color: &'static str,
) -> Preset {
    Preset {
        name,
        description,
        params: MaterialParameters::MohrCoulomb(ysv_core::MohrCoulombParams {
            cohesion,
            friction_angle_deg,
        }),
        color,
    }
}

const fn drucker_prager(
    name: &'static str,
    description: &'static str,
    slope: f64,
    cohesion_intercept: f64,
    color: &'static str,
) -> Preset {
    Preset {
        name,
        description,
        params: MaterialParameters::DruckerPrager(ysv_core::DruckerPragerParams {
            slope,
            cohesion_intercept,
        }),
        color,
    }
}

pub const MOHR_COULOMB_PRESETS: [Preset; 5] = [
    mohr_coulomb("Soft Clay", "Typical parameters for soft saturated clay", 15.0, 0.0, "#8b5cf6"),
    mohr_coulomb("Medium Clay", "Medium strength clay with some friction", 25.0, 15.0, "#06b6d4"),
    mohr_coulomb("Dense Sand", "Dense granular material with high friction", 0.0, 38.0, "#f59e0b"),
    mohr_coulomb("Cohesive Soil", "Mixed soil with moderate cohesion and friction", 20.0, 25.0, "#10b981"),
    mohr_coulomb("Rock Material", "Strong rock-like material", 50.0, 35.0, "#ef4444"),
];

pub const DRUCKER_PRAGER_PRESETS: [Preset; 5] = [
    drucker_prager("Low Friction", "Material with low friction parameter", 0.2, 15.0, "#8b5cf6"),
    drucker_prager("Moderate Friction", "Typical granular material", 0.6, 10.0, "#06b6d4"),
    drucker_prager("High Friction", "Dense granular material", 1.2, 5.0, "#f59e0b"),
    drucker_prager("Cohesive Material", "High cohesion, moderate friction", 0.4, 25.0, "#10b981"),
    drucker_prager("Von Mises (m=0)", "Pressure-independent yield (cylinder)", 0.0, 20.0, "#ef4444"),
];

/// All presets of a model, in display order.
pub fn presets(kind: ModelKind) -> &'static [Preset] {
    match kind {
        ModelKind::MohrCoulomb => &MOHR_COULOMB_PRESETS,
        ModelKind::DruckerPrager => &DRUCKER_PRAGER_PRESETS,
    }
}

/// Look up a preset by its exact name.
pub fn find_preset(kind: ModelKind, name: &str) -> Result<&'static Preset> {
    presets(kind)
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| YsvError::NotFound(format!("{kind} preset '{name}'")))
}
