//! Walking across faces of a triangulation.
//!
//! A peripheral curve is laid down one face crossing at a time: leaving
//! tetrahedron `T` through face `f` stamps `-1` at `(T, f)` and entering the
//! neighbor `U` through its glued face `g` stamps `+1` at `(U, g)`, both at
//! the cusp corner `V0` and in each tetrahedron's own handedness slot.

use crate::cusp_error::{CuspError, Malformation};
use crate::data::peripheral_curves::Sheet;
use crate::topology::orientation::{Perm4, accumulate_path};
use crate::topology::simplex::{Face, Vertex};
use crate::topology::triangulation::{TetId, Triangulation};

/// The corner whose cusp cross-section carries the installed curves.
pub const CUSP_VERTEX: Vertex = Vertex::V0;

/// Value stamped on the face a crossing leaves through.
pub const EXIT_CROSSING: i32 = -1;
/// Value stamped on the glued face a crossing enters through.
pub const ENTRY_CROSSING: i32 = 1;

/// Whether `tet` already carries a meridian crossing at the cusp corner.
#[inline]
pub fn has_meridian(tri: &Triangulation, tet: TetId) -> bool {
    tri[tet]
        .peripheral_curves
        .has_curve(Sheet::Meridian, CUSP_VERTEX)
}

/// Cross `face` of `tet`, stamping `sheet`, and return the tetrahedron entered.
pub(crate) fn cross_face(
    tri: &mut Triangulation,
    tet: TetId,
    face: Face,
    sheet: Sheet,
) -> Result<TetId, CuspError> {
    let gluing = tri.gluing(tet, face);
    if gluing.perm.image(CUSP_VERTEX) != CUSP_VERTEX {
        return Err(Malformation::CuspVertexNotPreserved { tet, face }.into());
    }
    let entry = gluing.glued_face(face);

    let t = &mut tri[tet];
    let h = t.orientation;
    t.peripheral_curves
        .set(sheet, h, CUSP_VERTEX, face, EXIT_CROSSING);

    let u = &mut tri[gluing.neighbor];
    let h = u.orientation;
    u.peripheral_curves
        .set(sheet, h, CUSP_VERTEX, entry, ENTRY_CROSSING);

    Ok(gluing.neighbor)
}

/// Result of a read-only face walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceWalk {
    /// Tetrahedra in the order they were occupied, starting tetrahedron first.
    pub tets: Vec<TetId>,
    /// Where the walk ended.
    pub end: TetId,
    /// Composite vertex map from the start tetrahedron to `end`.
    pub holonomy: Perm4,
}

impl FaceWalk {
    /// The walk made at least one crossing and ended in its start tetrahedron.
    pub fn is_closed(&self) -> bool {
        self.tets.first() == Some(&self.end)
    }
}

/// Follow `faces` from `start` without touching the curve stores. Each label
/// is read in the labelling of the tetrahedron currently occupied.
pub fn walk_faces(
    tri: &Triangulation,
    start: TetId,
    faces: impl IntoIterator<Item = Face>,
) -> Result<FaceWalk, CuspError> {
    tri.tet(start)?;
    let mut tets = Vec::new();
    let mut perms = Vec::new();
    let mut cursor = start;
    for face in faces {
        tets.push(cursor);
        let g = tri.gluing(cursor, face);
        perms.push(g.perm);
        cursor = g.neighbor;
    }
    Ok(FaceWalk {
        tets,
        end: cursor,
        holonomy: accumulate_path(perms),
    })
}
