//! Gluing validation helpers.

use crate::cusp_error::{CuspError, Malformation};
use crate::topology::simplex::Face;
use crate::topology::triangulation::{TetId, Tetrahedron};

/// Optional validation toggles for gluing checks.
#[derive(Debug, Clone, Copy)]
pub struct GluingValidationOptions {
    /// Ensure every gluing map is a bijection of the four vertices.
    pub check_permutations: bool,
    /// Ensure `T.gluing[f] = (U, p)` is answered by `U.gluing[p(f)] = (T, p⁻¹)`.
    pub check_symmetry: bool,
    /// How to handle gluings that disagree with the tetrahedra's handedness.
    pub orientation: OrientationHandling,
}

impl Default for GluingValidationOptions {
    fn default() -> Self {
        Self {
            check_permutations: true,
            check_symmetry: true,
            orientation: OrientationHandling::Ignore,
        }
    }
}

impl GluingValidationOptions {
    /// Enable all gluing validation checks.
    pub fn all() -> Self {
        Self {
            check_permutations: true,
            check_symmetry: true,
            orientation: OrientationHandling::Error,
        }
    }
}

/// Behavior for orientation-consistency detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrientationHandling {
    /// Skip orientation checks.
    Ignore,
    /// Log a warning on inconsistent gluings.
    Warn,
    /// Return an error on inconsistent gluings.
    Error,
}

/// Validate the gluings of a tetrahedron array.
///
/// Neighbor indices are assumed in range (checked when the array is built).
/// Self-glued faces are always rejected since no walk can cross them.
pub fn validate_gluings(
    tets: &[Tetrahedron],
    options: GluingValidationOptions,
) -> Result<(), CuspError> {
    if options.check_permutations {
        for (i, t) in tets.iter().enumerate() {
            for face in Face::ALL {
                if !t.gluing(face).perm.is_valid() {
                    return Err(Malformation::InvalidPermutation {
                        tet: TetId::new(i as u32),
                        face,
                    }
                    .into());
                }
            }
        }
    }

    for (i, t) in tets.iter().enumerate() {
        let tet = TetId::new(i as u32);
        for face in Face::ALL {
            let g = t.gluing(face);
            let other_face = g.glued_face(face);
            if g.neighbor == tet && other_face == face {
                return Err(Malformation::SelfGluedFace { tet, face }.into());
            }

            let other = &tets[g.neighbor.index()];
            if options.check_symmetry {
                let back = other.gluing(other_face);
                if !g.perm.is_valid() || back.neighbor != tet || back.perm != g.perm.invert() {
                    return Err(Malformation::AsymmetricGluing { tet, face }.into());
                }
            }

            // Equal handedness needs an orientation-reversing (odd) vertex map.
            let consistent = g.perm.is_odd() == (t.orientation == other.orientation);
            if !consistent {
                match options.orientation {
                    OrientationHandling::Warn => {
                        log::warn!(
                            "Inconsistent orientation: tet={tet} face={face} neighbor={} perm={:?}",
                            g.neighbor,
                            g.perm
                        );
                    }
                    OrientationHandling::Error => {
                        return Err(Malformation::InconsistentOrientation { tet, face }.into());
                    }
                    OrientationHandling::Ignore => {}
                }
            }
        }
    }

    Ok(())
}
