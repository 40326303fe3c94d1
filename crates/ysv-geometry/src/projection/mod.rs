//! 2D views of the yield surfaces: π-plane cross-sections and meridian
//! envelopes.

pub mod meridian;
pub mod pi_plane;

pub use meridian::{EnvelopeBranch, MeridianCurve, MeridianEnvelope};
pub use pi_plane::{pi_plane_extent, principal_axis_lines, project_ring};
