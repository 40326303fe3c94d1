//! Yield surface engine core: errors, tolerances, settings, and material parameters.

pub mod error;
pub mod material;
pub mod settings;
pub mod tolerance;
pub mod traits;

pub use error::{Result, YsvError};
pub use material::{DruckerPragerParams, MaterialParameters, ModelKind, MohrCoulombParams};
pub use settings::VisualizationSettings;
pub use tolerance::GeometryTolerance;
