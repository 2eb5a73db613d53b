//! CuspError: Unified error type for cusp-curves public APIs
//!
//! Every fallible operation in the crate (triangulation construction,
//! validation, and peripheral curve installation) reports through this type.
//! The two families callers care about are [`CuspError::PreconditionViolation`]
//! (the start tetrahedron does not have the local shape the longitude search
//! expects) and [`CuspError::MalformedTriangulation`] (the complex itself is
//! broken, or a walk over it did not close).

use thiserror::Error;

use crate::data::peripheral_curves::Sheet;
use crate::topology::simplex::Face;
use crate::topology::triangulation::TetId;

/// Unified error type for cusp-curves operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CuspError {
    /// One of the four local checks around the start tetrahedron failed
    /// before the longitude search began.
    #[error("Peripheral curve precondition violated: {0}")]
    PreconditionViolation(Precondition),
    /// The gluing data is inconsistent, or a walk/search over it failed.
    #[error("Malformed triangulation: {0}")]
    MalformedTriangulation(Malformation),
    /// A caller-supplied tetrahedron id does not exist.
    #[error("Tetrahedron {tet} out of range (triangulation has {len} tetrahedra)")]
    TetOutOfRange { tet: TetId, len: usize },
    /// A triangulation needs at least one tetrahedron.
    #[error("Triangulation has no tetrahedra")]
    EmptyTriangulation,
    /// `TriangulationBuilder::glue` was asked to glue a face twice.
    #[error("Face {face:?} of tetrahedron {tet} is already glued")]
    FaceAlreadyGlued { tet: TetId, face: Face },
    /// Flat face-pairing arrays must both hold four entries per tetrahedron.
    #[error(
        "Face pairing arrays have lengths {other_tet_nums} and {entering_face_nums}; expected equal multiples of 4"
    )]
    FacePairingLengthMismatch {
        other_tet_nums: usize,
        entering_face_nums: usize,
    },
}

/// The local checks made around the start tetrahedron before the
/// longitude search. Each names the tetrahedron that failed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
    #[error("F1-neighbor {tet} of the start tetrahedron already carries a meridian")]
    F1NeighborHasMeridian { tet: TetId },
    #[error("start tetrahedron {tet} carries no meridian")]
    StartLacksMeridian { tet: TetId },
    #[error("F2-neighbor {tet} of the start tetrahedron carries no meridian")]
    F2NeighborLacksMeridian { tet: TetId },
    #[error("F3-neighbor {tet} of the F2-neighbor of the start tetrahedron already carries a meridian")]
    TargetHasMeridian { tet: TetId },
}

/// What exactly is wrong with a malformed triangulation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    #[error("face {face:?} of tetrahedron {tet} is not glued")]
    UngluedFace { tet: TetId, face: Face },
    #[error("face {face:?} of tetrahedron {tet} is glued to nonexistent tetrahedron {neighbor}")]
    NeighborOutOfRange {
        tet: TetId,
        face: Face,
        neighbor: TetId,
    },
    #[error("gluing of face {face:?} of tetrahedron {tet} is not a permutation")]
    InvalidPermutation { tet: TetId, face: Face },
    #[error("face {face:?} of tetrahedron {tet} is glued to itself")]
    SelfGluedFace { tet: TetId, face: Face },
    #[error("gluing of face {face:?} of tetrahedron {tet} is not matched by its neighbor")]
    AsymmetricGluing { tet: TetId, face: Face },
    #[error("gluing of face {face:?} of tetrahedron {tet} breaks orientation consistency")]
    InconsistentOrientation { tet: TetId, face: Face },
    #[error("crossing face {face:?} of tetrahedron {tet} does not carry the cusp vertex V0 to V0")]
    CuspVertexNotPreserved { tet: TetId, face: Face },
    #[error("meridian walk from {start} did not close within {steps} crossings")]
    MeridianNotClosed { start: TetId, steps: usize },
    #[error("longitude search exhausted without reaching tetrahedron {target}")]
    LongitudeUnreachable { target: TetId },
    #[error("longitude search exceeded {limit} expansions")]
    SearchLimitExceeded { limit: usize },
    #[error("longitude walk reached tetrahedron {tet} which the search never visited")]
    BrokenLongitudePath { tet: TetId },
    #[error("longitude walk from {start} did not close within {steps} crossings")]
    LongitudeNotClosed { start: TetId, steps: usize },
    #[error("{sheet:?} crossing at face {face:?} of tetrahedron {tet} is not balanced by its glued face")]
    SignImbalance { sheet: Sheet, tet: TetId, face: Face },
}

impl From<Precondition> for CuspError {
    fn from(p: Precondition) -> Self {
        CuspError::PreconditionViolation(p)
    }
}

impl From<Malformation> for CuspError {
    fn from(m: Malformation) -> Self {
        CuspError::MalformedTriangulation(m)
    }
}
