//! Yield surface geometry: stress invariants, cross-section rings, and
//! planar projections.

pub mod invariants;
pub mod projection;
pub mod ring;

pub use invariants::Meridian;
pub use projection::{EnvelopeBranch, MeridianCurve, MeridianEnvelope};
