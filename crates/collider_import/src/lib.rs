//! # Collider Import
//!
//! Generates physics colliders for imported models from naming conventions.
//!
//! ## Features
//!
//! - **Naming Conventions**: `ubx_`, `ucp_`, `usp_`, `ucx_` and `umc_` prefixes on mesh or node names
//! - **Shape Fitting**: Boxes and capsules from rotated mesh bounds, spheres fitted like a physics host would
//! - **Mesh Rebasing**: Mesh colliders re-expressed in the parent's local space
//! - **Scene Files**: Hierarchies loaded from and saved to RON or TOML
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use collider_import::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let preferences = ImportPreferences::load_or_default("collider_import.toml")?;
//!     let mut scene = SceneHierarchy::load("chair.ron")?;
//!
//!     for report in ColliderImporter::new(preferences).process_scene(&mut scene)? {
//!         println!("{} collider(s) generated", report.generated.len());
//!     }
//!
//!     scene.save("chair.processed.ron")?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod physics;
pub mod import;

/// Common imports for importer users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ImportPreferences},
        foundation::{
            collections::{MeshId, NodeId},
            math::{Vec3, Mat4, Quat, Transform},
        },
        scene::{Mesh, SceneDescription, SceneError, SceneHierarchy},
        physics::{Axis, Collider, ColliderKind},
        import::{ColliderImporter, ConventionTag, ImportError, ImportReport},
    };
}
