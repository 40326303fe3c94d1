//! Yield surface tessellation in principal-stress space.

pub mod drucker_prager;
pub mod mohr_coulomb;
pub mod triangulate;

pub use drucker_prager::drucker_prager_surface;
pub use mohr_coulomb::mohr_coulomb_surface;
pub use triangulate::{Mesh3dArrays, TriangleMesh};
