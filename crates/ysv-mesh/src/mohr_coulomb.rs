//! Mohr-Coulomb surface: a hexagonal pyramid, or a hexagonal prism in the
//! frictionless (Tresca) limit.

use ysv_core::{GeometryTolerance, MohrCoulombParams, VisualizationSettings};
use ysv_geometry::invariants::mohr_coulomb::apex_pressure;
use ysv_geometry::ring::{hexagon_ring, HEXAGON_VERTICES};
use ysv_math::hydrostatic;

use crate::TriangleMesh;

/// Distance kept between the apex and the base of the pyramid (kPa).
const MIN_PYRAMID_HEIGHT: f64 = 30.0;
/// Fraction of the view range at which the pyramid base is cut.
const BASE_FRACTION: f64 = 0.7;
/// Fraction of the view range at which the prism starts.
const PRISM_LOW_FRACTION: f64 = 0.1;

/// Mean stress of the pyramid base ring.
pub fn base_pressure(p_apex: f64, p_max: f64) -> f64 {
    (p_apex + MIN_PYRAMID_HEIGHT)
        .max(BASE_FRACTION * p_max)
        .min(p_max)
}

/// Tessellate the Mohr-Coulomb yield surface up to `settings.max_pressure`.
///
/// Returns an empty mesh when any required ring has no envelope.
pub fn mohr_coulomb_surface(
    params: &MohrCoulombParams,
    settings: &VisualizationSettings,
) -> TriangleMesh {
    let tol = &settings.tolerance;
    let phi = params.friction_angle_rad();

    let mesh = if tol.is_frictional(phi) {
        pyramid(params.cohesion, phi, settings.max_pressure, tol)
    } else {
        prism(params.cohesion, phi, settings.max_pressure, tol)
    };

    if !mesh.is_finite() {
        tracing::debug!(?params, "Mohr-Coulomb surface is not finite, omitting");
        return TriangleMesh::default();
    }
    mesh
}

fn pyramid(c: f64, phi: f64, p_max: f64, tol: &GeometryTolerance) -> TriangleMesh {
    let p_apex = apex_pressure(c, phi, tol);
    let p_base = base_pressure(p_apex, p_max);
    let base = hexagon_ring(p_base, c, phi, tol);
    if base.len() != HEXAGON_VERTICES {
        tracing::debug!(p_apex, p_base, "Pyramid base ring empty, omitting surface");
        return TriangleMesh::default();
    }

    let mut mesh = TriangleMesh::with_capacity(1 + HEXAGON_VERTICES, HEXAGON_VERTICES);
    let apex = mesh.push_vertex(hydrostatic(p_apex));
    let b = mesh.push_ring(&base);
    let n = HEXAGON_VERTICES as u32;
    for i in 0..n {
        mesh.push_triangle(apex, b + i, b + (i + 1) % n);
    }

    tracing::debug!(p_apex, p_base, "Built Mohr-Coulomb pyramid");
    mesh
}

fn prism(c: f64, phi: f64, p_max: f64, tol: &GeometryTolerance) -> TriangleMesh {
    let p_low = PRISM_LOW_FRACTION * p_max;
    let low = hexagon_ring(p_low, c, phi, tol);
    let high = hexagon_ring(p_max, c, phi, tol);
    if low.len() != HEXAGON_VERTICES || high.len() != HEXAGON_VERTICES {
        tracing::debug!(p_low, p_max, "Prism ring empty, omitting surface");
        return TriangleMesh::default();
    }

    let mut mesh = TriangleMesh::with_capacity(2 * HEXAGON_VERTICES, 2 * HEXAGON_VERTICES + 8);
    let lo = mesh.push_ring(&low);
    let hi = mesh.push_ring(&high);
    let n = HEXAGON_VERTICES as u32;

    for i in 0..n {
        let curr = lo + i;
        let next = lo + (i + 1) % n;
        let curr_high = hi + i;
        let next_high = hi + (i + 1) % n;
        mesh.push_triangle(curr, next, next_high);
        mesh.push_triangle(curr, next_high, curr_high);
    }
    mesh.push_fan(lo, HEXAGON_VERTICES, false);
    mesh.push_fan(hi, HEXAGON_VERTICES, false);

    tracing::debug!(p_low, p_max, "Built Mohr-Coulomb prism");
    mesh
}
