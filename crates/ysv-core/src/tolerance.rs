/// Thresholds used when the yield geometry has to decide between branches
/// or reject a degenerate value.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeometryTolerance {
    /// Smallest admissible magnitude of the `3 ∓ sin φ` denominators
    pub denominator: f64,
    /// Friction angle (radians) at or below which Mohr-Coulomb is treated as Tresca
    pub friction_angle: f64,
    /// Cohesion at or below which the Mohr-Coulomb apex sits at the origin
    pub cohesion: f64,
    /// Drucker-Prager slope at or below which the start pressure is not shifted
    pub slope: f64,
    /// Deviatoric stress above which a Drucker-Prager end ring gets a cap
    pub cap: f64,
    /// Absolute tolerance for snapping round-off around zero deviatoric stress (kPa)
    pub linear: f64,
}

impl GeometryTolerance {
    pub const DEFAULT_DENOMINATOR: f64 = 1e-6;
    pub const DEFAULT_FRICTION_ANGLE: f64 = 1e-3;
    pub const DEFAULT_COHESION: f64 = 1e-3;
    pub const DEFAULT_SLOPE: f64 = 1e-6;
    pub const DEFAULT_CAP: f64 = 1e-3;
    pub const DEFAULT_LINEAR: f64 = 1e-9;

    pub fn default_precision() -> Self {
        Self {
            denominator: Self::DEFAULT_DENOMINATOR,
            friction_angle: Self::DEFAULT_FRICTION_ANGLE,
            cohesion: Self::DEFAULT_COHESION,
            slope: Self::DEFAULT_SLOPE,
            cap: Self::DEFAULT_CAP,
            linear: Self::DEFAULT_LINEAR,
        }
    }

    /// Coarser thresholds for preview-quality rendering.
    pub fn loose() -> Self {
        Self {
            cap: 1e-2,
            linear: 1e-6,
            ..Self::default_precision()
        }
    }

    /// Whether a friction angle in radians is large enough for the pyramid branch.
    pub fn is_frictional(self, phi_rad: f64) -> bool {
        phi_rad > self.friction_angle
    }

    /// Whether a cohesion value moves the apex away from the origin.
    pub fn is_cohesive(self, cohesion: f64) -> bool {
        cohesion > self.cohesion
    }

    /// Whether a denominator is too close to zero to divide by.
    pub fn is_degenerate_denominator(self, d: f64) -> bool {
        d.abs() < self.denominator
    }

    /// Snap values within `linear` of zero to exactly zero.
    pub fn snap_zero(self, v: f64) -> f64 {
        if v.abs() < self.linear {
            0.0
        } else {
            v
        }
    }
}

impl Default for GeometryTolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frictional_threshold() {
        let tol = GeometryTolerance::default();
        assert!(!tol.is_frictional(0.0));
        assert!(!tol.is_frictional(1e-3));
        assert!(tol.is_frictional(0.5f64.to_radians()));
    }

    #[test]
    fn test_snap_zero() {
        let tol = GeometryTolerance::default();
        assert_eq!(tol.snap_zero(-1e-12), 0.0);
        assert_eq!(tol.snap_zero(-1e-3), -1e-3);
        assert_eq!(tol.snap_zero(2.5), 2.5);
    }

    #[test]
    fn test_loose_keeps_branch_thresholds() {
        let loose = GeometryTolerance::loose();
        assert_eq!(loose.friction_angle, GeometryTolerance::DEFAULT_FRICTION_ANGLE);
        assert!(loose.cap > GeometryTolerance::DEFAULT_CAP);
    }
}
