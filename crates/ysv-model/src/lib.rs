//! Yield surface engine facade.
//!
//! [`ModelFacade`] turns a [`MaterialParameters`] value into the three views
//! of its yield criterion: the 3D surface mesh, the π-plane cross-section and
//! the p-q meridian envelope.
//!
//! ```
//! use ysv_model::{MaterialParameters, ModelFacade};
//!
//! let facade = ModelFacade::default();
//! let mesh = facade.generate_surface_mesh(&MaterialParameters::mohr_coulomb(10.0, 30.0));
//! assert_eq!(mesh.triangle_count(), 6);
//! ```

pub mod facade;
pub mod presets;
pub mod snapshot;

pub use facade::{ModelFacade, SurfaceViews};
pub use presets::{find_preset, presets, Preset};
pub use snapshot::Snapshot;

pub use ysv_core::{MaterialParameters, ModelKind, Result, VisualizationSettings, YsvError};
