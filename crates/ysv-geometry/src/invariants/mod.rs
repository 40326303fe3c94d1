//! Deviatoric stress at yield as a function of mean stress.

pub mod drucker_prager;
pub mod mohr_coulomb;

pub use mohr_coulomb::Meridian;
