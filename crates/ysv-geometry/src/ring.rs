//! Cross-section rings of the yield surfaces at a fixed mean stress.

use std::f64::consts::TAU;

use ysv_core::GeometryTolerance;
use ysv_math::{principal_from_pq, Point3};

use crate::invariants::Meridian;

/// Number of vertices of a Mohr-Coulomb ring.
pub const HEXAGON_VERTICES: usize = 6;

/// Mohr-Coulomb hexagon at mean stress `p`.
///
/// Vertices alternate between the compression meridian (even indices, one
/// principal stress raised by `⅔·qTC`) and the extension meridian (odd
/// indices, one principal stress lowered by `⅔·qTE`), walking once around the
/// six sextants of the π-plane. Returns an empty ring when either meridian
/// has no envelope at `p`.
pub fn hexagon_ring(p: f64, c: f64, phi: f64, tol: &GeometryTolerance) -> Vec<Point3> {
    let (Some(q_tc), Some(q_te)) = (
        Meridian::Compression.envelope(p, c, phi, tol),
        Meridian::Extension.envelope(p, c, phi, tol),
    ) else {
        tracing::debug!(p, c, phi, "No Mohr-Coulomb envelope at this pressure");
        return Vec::new();
    };

    let large_c = p + 2.0 / 3.0 * q_tc;
    let small_c = p - 1.0 / 3.0 * q_tc;
    let large_e = p + 1.0 / 3.0 * q_te;
    let small_e = p - 2.0 / 3.0 * q_te;

    vec![
        Point3::new(large_c, small_c, small_c),
        Point3::new(large_e, large_e, small_e),
        Point3::new(small_c, large_c, small_c),
        Point3::new(small_e, large_e, large_e),
        Point3::new(small_c, small_c, large_c),
        Point3::new(large_e, small_e, large_e),
    ]
}

/// Drucker-Prager ring of `sectors` vertices at mean stress `p`.
///
/// Vertex `j` sits at Lode angle `j·2π/sectors`; `q ≤ 0` collapses the ring
/// onto the hydrostatic axis.
pub fn circle_ring(p: f64, q: f64, sectors: usize) -> Vec<Point3> {
    let q = q.max(0.0);
    (0..sectors)
        .map(|j| principal_from_pq(p, q, j as f64 * TAU / sectors as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ysv_math::{deviatoric_stress, mean_stress};

    #[test]
    fn test_hexagon_vertices_on_pressure_plane() {
        let tol = GeometryTolerance::default();
        let ring = hexagon_ring(105.0, 10.0, 30f64.to_radians(), &tol);
        assert_eq!(ring.len(), HEXAGON_VERTICES);
        for v in &ring {
            assert_relative_eq!(mean_stress(*v), 105.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hexagon_alternates_meridians() {
        let tol = GeometryTolerance::default();
        let phi = 30f64.to_radians();
        let q_tc = Meridian::Compression.q_raw(60.0, 10.0, phi, &tol);
        let q_te = Meridian::Extension.q_raw(60.0, 10.0, phi, &tol);
        let ring = hexagon_ring(60.0, 10.0, phi, &tol);
        for (i, v) in ring.iter().enumerate() {
            let expected = if i % 2 == 0 { q_tc } else { q_te };
            assert_relative_eq!(deviatoric_stress(*v), expected, epsilon = 1e-9);
        }
        // Compression vertices keep σ2 = σ3 for the first corner
        assert_eq!(ring[0].y, ring[0].z);
        // Extension vertices keep σ1 = σ2 for the second corner
        assert_eq!(ring[1].x, ring[1].y);
    }

    #[test]
    fn test_hexagon_exact_ordering() {
        let tol = GeometryTolerance::default();
        // φ = 0: qTC = qTE = 2c = 30
        let ring = hexagon_ring(0.0, 15.0, 0.0, &tol);
        let expected = [
            Point3::new(20.0, -10.0, -10.0),
            Point3::new(10.0, 10.0, -20.0),
            Point3::new(-10.0, 20.0, -10.0),
            Point3::new(-20.0, 10.0, 10.0),
            Point3::new(-10.0, -10.0, 20.0),
            Point3::new(10.0, -20.0, 10.0),
        ];
        for (v, e) in ring.iter().zip(expected) {
            assert!((*v - e).length() < 1e-12, "{v:?} != {e:?}");
        }
    }

    #[test]
    fn test_hexagon_empty_without_envelope() {
        let tol = GeometryTolerance::default();
        assert!(hexagon_ring(-100.0, 10.0, 30f64.to_radians(), &tol).is_empty());
        assert!(hexagon_ring(50.0, -5.0, 0.0, &tol).is_empty());
        assert!(hexagon_ring(f64::NAN, 10.0, 0.3, &tol).is_empty());
    }

    #[test]
    fn test_circle_ring_equal_radii() {
        let ring = circle_ring(40.0, 20.0, 24);
        assert_eq!(ring.len(), 24);
        let r0 = (ring[0] - Point3::splat(40.0)).length();
        for v in &ring {
            assert_relative_eq!(mean_stress(*v), 40.0, epsilon = 1e-9);
            assert_relative_eq!((*v - Point3::splat(40.0)).length(), r0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_circle_ring_collapses_on_axis() {
        let ring = circle_ring(12.0, -3.0, 8);
        assert!(ring.iter().all(|v| *v == Point3::splat(12.0)));
    }
}
