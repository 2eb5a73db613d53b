//! Read-only checks and summaries of installed peripheral curves.

use itertools::iproduct;

use crate::algs::face_walk::CUSP_VERTEX;
use crate::cusp_error::{CuspError, Malformation};
use crate::data::peripheral_curves::Sheet;
use crate::topology::simplex::Face;
use crate::topology::triangulation::{TetId, Triangulation};

/// Crossing of `sheet` at the cusp corner of `tet`, read in its own slot.
#[inline]
pub fn crossing(tri: &Triangulation, tet: TetId, sheet: Sheet, face: Face) -> i32 {
    let t = &tri[tet];
    t.peripheral_curves
        .get(sheet, t.orientation, CUSP_VERTEX, face)
}

/// Every face crossing must be matched by the negated value on the glued
/// face of the neighbor.
pub fn check_sign_balance(tri: &Triangulation, sheet: Sheet) -> Result<(), CuspError> {
    for (tet, face) in iproduct!(tri.tet_ids(), Face::ALL) {
        let here = crossing(tri, tet, sheet, face);
        let g = tri.gluing(tet, face);
        let there = crossing(tri, g.neighbor, sheet, g.glued_face(face));
        if here != -there {
            return Err(Malformation::SignImbalance { sheet, tet, face }.into());
        }
    }
    Ok(())
}

/// Signed sum of all crossings of `sheet` at the cusp corners. Zero for any
/// closed curve.
pub fn total_crossing_sum(tri: &Triangulation, sheet: Sheet) -> i32 {
    tri.tetrahedra()
        .map(|(_, t)| t.peripheral_curves.crossing_sum(sheet, CUSP_VERTEX))
        .sum()
}

/// Tetrahedra whose cusp corner `sheet` passes through, in id order.
pub fn curve_support(tri: &Triangulation, sheet: Sheet) -> Vec<TetId> {
    tri.tetrahedra()
        .filter(|(_, t)| t.peripheral_curves.has_curve(sheet, CUSP_VERTEX))
        .map(|(id, _)| id)
        .collect()
}
