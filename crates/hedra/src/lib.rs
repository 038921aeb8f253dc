#![warn(missing_docs)]

//! hedra — oriented-face solid reconstruction and CSG piece assembly.
//!
//! Builds bounded solids from unordered planar faces tagged with an
//! outward side, wraps them as named [`Piece`]s, and runs ordered
//! subtraction chains between piece groups while tracking which piece
//! was cut by which.
//!
//! # Example
//!
//! ```
//! use hedra::{CutLedger, Piece};
//! use hedra::hedra_kernel::Solid;
//! use hedra_kernel_math::Point3;
//! use hedra_kernel_mesh::Aabb3;
//!
//! let slab = Piece::new(
//!     "slab",
//!     Solid::box_solid(&Aabb3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 10.0, 1.0))).unwrap(),
//! );
//! let post = Piece::new(
//!     "post",
//!     Solid::box_solid(&Aabb3::new(Point3::new(4.0, 4.0, -1.0), Point3::new(6.0, 6.0, 2.0))).unwrap(),
//! );
//! let mut ledger = CutLedger::new();
//! let notched = slab.cut(&post, &mut ledger).unwrap();
//! assert!((notched.solid().volume() - 96.0).abs() < 1e-9);
//! assert_eq!(ledger.records()[0].to_string(), "slab cut by post");
//! ```

pub use hedra_carve;
pub use hedra_kernel;
pub use hedra_kernel_math;
pub use hedra_kernel_mesh;

mod assembly;
mod config;
mod export;
mod panels;
mod piece;

pub use assembly::assemble;
pub use config::{ConfigError, SculptureParams};
pub use export::{stl_bytes, write_stl, ExportError};
pub use panels::{cube_offset, cube_panels, parallelepiped_faces};
pub use piece::{AssemblyError, CutLedger, CutRecord, Piece, ProvenanceSink};
