#![cfg_attr(docsrs, feature(doc_cfg))]
//! # cusp-curves
//!
//! cusp-curves models ideal triangulations of cusped 3-manifolds as arenas of
//! face-glued tetrahedra and installs a meridian and a longitude on a cusp
//! torus, recorded as signed face crossings at the cusp corner of each
//! tetrahedron. Drilling routines use this to give a newly drilled cusp its
//! peripheral curves before the hyperbolic structure is computed.
//!
//! ## Features
//! - Index-based triangulation arena with validated, involutive face gluings
//! - Dense per-tetrahedron peripheral curve storage (meridian and longitude sheets)
//! - Meridian installation by a fixed face walk around the start tetrahedron
//! - Longitude installation by breadth-first search around the meridian
//! - Bounded walks and searches: malformed input is reported, never looped on
//! - Flat face-pairing export for ray-marching viewers
//!
//! ## Usage
//!
//! ```rust
//! use cusp_curves::prelude::*;
//!
//! # fn main() -> Result<(), CuspError> {
//! let t = TetId::new;
//! let mut b = TriangulationBuilder::new(6);
//! b.glue_matching(Face::F0, &[(0, 1), (2, 3), (4, 5)])?
//!     .glue_matching(Face::F1, &[(0, 4), (1, 2), (3, 5)])?
//!     .glue_matching(Face::F2, &[(0, 1), (2, 3), (4, 5)])?
//!     .glue_matching(Face::F3, &[(0, 3), (1, 5), (2, 4)])?;
//! let mut tri = b.build()?;
//!
//! let report = install_peripheral_curves(&mut tri, t(0))?;
//! assert_eq!(report.meridian, vec![t(0), t(1), t(2), t(3)]);
//! assert_eq!(report.longitude, vec![t(0), t(1), t(5), t(4)]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! The longitude search expands faces in the fixed order `F1, F2, F3` from a
//! FIFO worklist, so the installed curves depend only on the gluings, never
//! on hashing or allocation order.

pub mod algs;
pub mod cusp_error;
pub mod data;
pub mod debug_invariants;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::curve_checks::{check_sign_balance, curve_support, total_crossing_sum};
    pub use crate::algs::longitude::{LongitudePath, install_longitude};
    pub use crate::algs::meridian::install_meridian;
    pub use crate::algs::peripheral::{
        InstallOptions, PeripheralCurveReport, install_peripheral_curves,
        install_peripheral_curves_with,
    };
    pub use crate::cusp_error::{CuspError, Malformation, Precondition};
    pub use crate::data::face_pairing::FacePairing;
    pub use crate::data::peripheral_curves::{PeripheralCurves, Sheet};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::topology::builder::TriangulationBuilder;
    pub use crate::topology::orientation::{Handedness, Perm4};
    pub use crate::topology::simplex::{Face, Vertex};
    pub use crate::topology::triangulation::{GluingTable, TetId, Triangulation};
    pub use crate::topology::validation::{GluingValidationOptions, OrientationHandling};
}
