//! Mohr-Coulomb envelope on the triaxial compression and extension meridians.

use serde::{Deserialize, Serialize};
use ysv_core::GeometryTolerance;

/// The two meridians bounding the Mohr-Coulomb hexagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridian {
    /// Triaxial compression, `σ2 = σ3`
    Compression,
    /// Triaxial extension, `σ1 = σ2`
    Extension,
}

impl Meridian {
    pub const BOTH: [Meridian; 2] = [Meridian::Compression, Meridian::Extension];

    fn denominator(self, sin_phi: f64) -> f64 {
        match self {
            Meridian::Compression => 3.0 - sin_phi,
            Meridian::Extension => 3.0 + sin_phi,
        }
    }

    /// Signed deviatoric stress at yield on this meridian.
    ///
    /// `q = (6 p sinφ + 6 c cosφ) / (3 ∓ sinφ)`. Returns `f64::INFINITY` when
    /// the denominator is within `tol.denominator` of zero. The value may be
    /// negative; use [`Meridian::envelope`] to filter it.
    pub fn q_raw(self, p: f64, c: f64, phi: f64, tol: &GeometryTolerance) -> f64 {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let d = self.denominator(sin_phi);
        if tol.is_degenerate_denominator(d) {
            return f64::INFINITY;
        }
        (6.0 * p * sin_phi + 6.0 * c * cos_phi) / d
    }

    /// Deviatoric stress at yield, or `None` when no envelope exists at `p`.
    pub fn envelope(self, p: f64, c: f64, phi: f64, tol: &GeometryTolerance) -> Option<f64> {
        let q = self.q_raw(p, c, phi, tol);
        (q.is_finite() && q >= 0.0).then_some(q)
    }
}

/// Triaxial compression strength `qTC(p)`; `f64::INFINITY` on a degenerate denominator.
pub fn q_compression(p: f64, c: f64, phi: f64) -> f64 {
    Meridian::Compression.q_raw(p, c, phi, &GeometryTolerance::default())
}

/// Triaxial extension strength `qTE(p)`; `f64::INFINITY` on a degenerate denominator.
pub fn q_extension(p: f64, c: f64, phi: f64) -> f64 {
    Meridian::Extension.q_raw(p, c, phi, &GeometryTolerance::default())
}

/// Mean stress of the apex on the hydrostatic axis.
///
/// `c / tanφ` for a frictional, cohesive material, otherwise the origin.
/// Never negative.
pub fn apex_pressure(c: f64, phi: f64, tol: &GeometryTolerance) -> f64 {
    if !(tol.is_frictional(phi) && tol.is_cohesive(c)) {
        return 0.0;
    }
    let p = c / phi.tan();
    if p.is_finite() {
        p.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_value() {
        let phi = 30f64.to_radians();
        let expected = (6.0 * 150.0 * 0.5 + 6.0 * 10.0 * phi.cos()) / 2.5;
        assert_relative_eq!(q_compression(150.0, 10.0, phi), expected, epsilon = 1e-9);
        assert_relative_eq!(q_compression(150.0, 10.0, phi), 200.78, epsilon = 0.01);
    }

    #[test]
    fn test_compression_dominates_extension() {
        let tol = GeometryTolerance::default();
        for deg in [1.0, 10.0, 25.0, 30.0, 45.0] {
            let phi = f64::to_radians(deg);
            for p in [0.0, 10.0, 75.0, 150.0] {
                let tc = Meridian::Compression.envelope(p, 10.0, phi, &tol).unwrap();
                let te = Meridian::Extension.envelope(p, 10.0, phi, &tol).unwrap();
                assert!(tc >= te, "φ={deg}° p={p}: qTC={tc} < qTE={te}");
            }
        }
    }

    #[test]
    fn test_tresca_meridians_coincide() {
        assert_eq!(q_compression(80.0, 15.0, 0.0), q_extension(80.0, 15.0, 0.0));
        assert_relative_eq!(q_compression(80.0, 15.0, 0.0), 30.0);
    }

    #[test]
    fn test_negative_envelope_is_absent() {
        let tol = GeometryTolerance::default();
        let phi = 30f64.to_radians();
        // q changes sign at p = -c/tanφ ≈ -17.3
        assert!(Meridian::Compression.envelope(-50.0, 10.0, phi, &tol).is_none());
        assert!(Meridian::Extension.envelope(-50.0, 10.0, phi, &tol).is_none());
    }

    #[test]
    fn test_degenerate_denominator_is_infinite() {
        let tol = GeometryTolerance {
            denominator: 2.5,
            ..Default::default()
        };
        // |3 − sin 90°| = 2 < 2.5
        let q = Meridian::Compression.q_raw(10.0, 1.0, std::f64::consts::FRAC_PI_2, &tol);
        assert_eq!(q, f64::INFINITY);
        assert!(Meridian::Compression
            .envelope(10.0, 1.0, std::f64::consts::FRAC_PI_2, &tol)
            .is_none());
    }

    #[test]
    fn test_apex_pressure() {
        let tol = GeometryTolerance::default();
        assert_relative_eq!(
            apex_pressure(10.0, 30f64.to_radians(), &tol),
            10.0 / 30f64.to_radians().tan()
        );
        assert_eq!(apex_pressure(0.0, 30f64.to_radians(), &tol), 0.0);
        assert_eq!(apex_pressure(10.0, 0.0, &tol), 0.0);
        assert_eq!(apex_pressure(-10.0, 30f64.to_radians(), &tol), 0.0);
        // φ past 90° flips tanφ negative; the apex is clamped to the origin
        assert_eq!(apex_pressure(10.0, 120f64.to_radians(), &tol), 0.0);
    }
}
