//! Principal-stress space primitives.
//!
//! Points in stress space are `(σ1, σ2, σ3)` triples with compression
//! positive; 2D points carry either π-plane coordinates or `(p, q)` pairs.

pub mod sampling;
pub mod stress;

pub use glam::{dvec2, dvec3, DVec2, DVec3};
pub use sampling::{capped_step, clamp, lerp, linspace, pressure_grid, MAX_GRID_SAMPLES};
pub use stress::{
    deg_to_rad, deviatoric_stress, hydrostatic, mean_stress, pi_plane_to_stresses,
    principal_from_pq, project_to_pi_plane, rad_to_deg,
};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// Ordered 2D points; closed polygons repeat their first point at the end.
pub type Polyline2 = Vec<Point2>;
