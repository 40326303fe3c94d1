//! Drucker-Prager surface: a cone about the hydrostatic axis, or a cylinder
//! for a pressure-independent (von Mises) envelope.

use ysv_core::{DruckerPragerParams, VisualizationSettings};
use ysv_geometry::invariants::drucker_prager::{q, q_linear, start_pressure};
use ysv_geometry::ring::circle_ring;

use crate::TriangleMesh;

/// Tessellate the Drucker-Prager yield surface from its start pressure up to
/// `settings.max_pressure`.
///
/// Builds `ring_divisions + 1` rings of `angular_sectors` vertices. Sides are
/// two triangles per ring quad; the end rings get a fan cap when their
/// deviatoric stress exceeds `tolerance.cap`. A collapsed ring stays in the
/// mesh as coincident vertices, so the vertex layout does not depend on the
/// parameters.
pub fn drucker_prager_surface(
    params: &DruckerPragerParams,
    settings: &VisualizationSettings,
) -> TriangleMesh {
    let tol = &settings.tolerance;
    let (m, kd) = (params.slope, params.cohesion_intercept);
    let sectors = settings
        .angular_sectors
        .clamp(VisualizationSettings::MIN_SECTORS, VisualizationSettings::MAX_SECTORS);
    let divisions = settings
        .ring_divisions
        .clamp(1, VisualizationSettings::MAX_RING_DIVISIONS);
    let p_start = start_pressure(m, kd, tol);
    let p_max = settings.max_pressure;

    if !(p_start.is_finite() && p_max.is_finite()) {
        tracing::debug!(p_start, p_max, "Non-finite pressure range, omitting surface");
        return TriangleMesh::default();
    }

    let rings = divisions + 1;
    let mut mesh = TriangleMesh::with_capacity(rings * sectors, 2 * divisions * sectors + 2 * sectors);

    for i in 0..rings {
        let p = p_start + i as f64 * (p_max - p_start) / divisions as f64;
        mesh.push_ring(&circle_ring(p, q(p, m, kd), sectors));
    }

    let s = sectors as u32;
    for i in 0..divisions as u32 {
        let ring = i * s;
        let next_ring = (i + 1) * s;
        for j in 0..s {
            let v0 = ring + j;
            let v1 = ring + (j + 1) % s;
            let v2 = next_ring + (j + 1) % s;
            let v3 = next_ring + j;
            mesh.push_triangle(v0, v1, v3);
            mesh.push_triangle(v1, v2, v3);
        }
    }

    let q_base = q_linear(p_max, m, kd);
    if q_base > tol.cap {
        mesh.push_fan(divisions as u32 * s, sectors, false);
    } else {
        tracing::debug!(q_base, "Base ring degenerate, no cap");
    }

    let q_start = q_linear(p_start, m, kd);
    if q_start > tol.cap {
        mesh.push_fan(0, sectors, true);
    } else {
        tracing::debug!(q_start, "Start ring is an apex, no cap");
    }

    if !mesh.is_finite() {
        tracing::debug!(?params, "Drucker-Prager surface is not finite, omitting");
        return TriangleMesh::default();
    }

    tracing::debug!(
        p_start,
        p_max,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Built Drucker-Prager surface"
    );
    mesh
}
