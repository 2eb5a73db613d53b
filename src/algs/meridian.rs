//! Meridian installation.
//!
//! The meridian is the curve obtained by repeating the face sequence
//! `F2, F1, F2, F3` from the start tetrahedron until a round ends back
//! there. For the tetrahedra produced by drilling, one round suffices and
//! the meridian runs through exactly four corners.

use crate::algs::face_walk::cross_face;
use crate::cusp_error::{CuspError, Malformation};
use crate::data::peripheral_curves::Sheet;
use crate::topology::simplex::Face;
use crate::topology::triangulation::{TetId, Triangulation};

/// One round of the meridian walk.
pub const MERIDIAN_FACES: [Face; 4] = [Face::F2, Face::F1, Face::F2, Face::F3];

/// Default multiple of the tetrahedron count bounding any walk or search.
pub const DEFAULT_STEP_LIMIT_FACTOR: usize = 4;

/// Stamp the meridian sheet starting at `start`.
///
/// Returns the tetrahedra occupied before each crossing, `start` first.
pub fn install_meridian(tri: &mut Triangulation, start: TetId) -> Result<Vec<TetId>, CuspError> {
    install_meridian_bounded(tri, start, DEFAULT_STEP_LIMIT_FACTOR)
}

/// As [`install_meridian`], failing once more than `step_limit_factor * len`
/// crossings have been made without closing.
pub fn install_meridian_bounded(
    tri: &mut Triangulation,
    start: TetId,
    step_limit_factor: usize,
) -> Result<Vec<TetId>, CuspError> {
    tri.tet(start)?;
    let limit = (step_limit_factor * tri.len()).max(MERIDIAN_FACES.len());

    let mut path = Vec::with_capacity(MERIDIAN_FACES.len());
    let mut tet = start;
    loop {
        for face in MERIDIAN_FACES {
            if path.len() >= limit {
                return Err(Malformation::MeridianNotClosed {
                    start,
                    steps: path.len(),
                }
                .into());
            }
            path.push(tet);
            tet = cross_face(tri, tet, face, Sheet::Meridian)?;
        }
        if tet == start {
            break;
        }
    }

    log::debug!(
        "meridian installed from tet {start}: {} crossings over {} rounds",
        path.len(),
        path.len() / MERIDIAN_FACES.len()
    );
    Ok(path)
}
