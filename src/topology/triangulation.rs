//! `Triangulation`: an arena of face-glued tetrahedra.
//!
//! Tetrahedra refer to each other by [`TetId`], a stable index into the
//! arena, so the cyclic adjacency of a closed complex needs no shared
//! ownership. Every face of every tetrahedron is glued to exactly one face
//! of some tetrahedron and the gluings are involutive:
//!
//! ```text
//! T.gluing[f] = (U, p)   ⇒   U.gluing[p(f)] = (T, p⁻¹)
//! ```
//!
//! A validated `Triangulation` upholds this; only
//! [`Triangulation::from_table_unchecked`] can produce one that does not.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::cusp_error::{CuspError, Malformation};
use crate::data::peripheral_curves::PeripheralCurves;
use crate::topology::orientation::{Handedness, Perm4};
use crate::topology::simplex::Face;
use crate::topology::validation::{GluingValidationOptions, validate_gluings};

/// Stable handle of a tetrahedron inside its [`Triangulation`].
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[repr(transparent)]
pub struct TetId(u32);

impl TetId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        TetId(raw)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TetId").field(&self.0).finish()
    }
}

impl fmt::Display for TetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where one face of a tetrahedron is glued: the neighbor and the vertex map.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Gluing {
    pub neighbor: TetId,
    pub perm: Perm4,
}

impl Gluing {
    #[inline]
    pub fn new(neighbor: TetId, perm: Perm4) -> Self {
        Self { neighbor, perm }
    }

    /// The face of `neighbor` that `face` is glued to.
    #[inline]
    pub fn glued_face(&self, face: Face) -> Face {
        self.perm.face_image(face)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tetrahedron {
    pub orientation: Handedness,
    pub gluings: [Gluing; 4],
    pub peripheral_curves: PeripheralCurves,
}

impl Tetrahedron {
    #[inline]
    pub fn gluing(&self, face: Face) -> Gluing {
        self.gluings[face.index()]
    }

    #[inline]
    pub fn neighbor(&self, face: Face) -> TetId {
        self.gluings[face.index()].neighbor
    }
}

/// One row of a gluing table: a tetrahedron's handedness and where each of
/// its four faces goes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TetGluingRow {
    #[serde(default)]
    pub orientation: Handedness,
    pub neighbors: [u32; 4],
    pub perms: [Perm4; 4],
}

/// Plain, serializable description of a triangulation.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GluingTable {
    pub tetrahedra: Vec<TetGluingRow>,
}

/// Arena of glued tetrahedra, each carrying its peripheral curve store.
///
/// Serializes as a [`GluingTable`]; deserialization runs the full gluing
/// validation. Curve data is not serialized.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GluingTable", into = "GluingTable")]
pub struct Triangulation {
    tets: Vec<Tetrahedron>,
}

impl Triangulation {
    /// Builds and fully validates a triangulation from a gluing table.
    pub fn from_table(table: GluingTable) -> Result<Self, CuspError> {
        Self::from_table_with(table, GluingValidationOptions::default())
    }

    /// Like [`from_table`](Self::from_table) with explicit validation toggles.
    pub fn from_table_with(
        table: GluingTable,
        options: GluingValidationOptions,
    ) -> Result<Self, CuspError> {
        let tri = Self::from_table_unchecked(table)?;
        validate_gluings(&tri.tets, options)?;
        Ok(tri)
    }

    /// Structural checks only: the table is non-empty and every neighbor
    /// index is in range. Permutations and gluing symmetry are trusted, so
    /// walks over the result may fail with `MalformedTriangulation`.
    pub fn from_table_unchecked(table: GluingTable) -> Result<Self, CuspError> {
        let len = table.tetrahedra.len();
        if len == 0 {
            return Err(CuspError::EmptyTriangulation);
        }
        let mut tets = Vec::with_capacity(len);
        for (i, row) in table.tetrahedra.into_iter().enumerate() {
            let tet = TetId(i as u32);
            let mut gluings = [Gluing::new(tet, Perm4::IDENTITY); 4];
            for face in Face::ALL {
                let neighbor = TetId(row.neighbors[face.index()]);
                if neighbor.index() >= len {
                    return Err(Malformation::NeighborOutOfRange {
                        tet,
                        face,
                        neighbor,
                    }
                    .into());
                }
                gluings[face.index()] = Gluing::new(neighbor, row.perms[face.index()]);
            }
            tets.push(Tetrahedron {
                orientation: row.orientation,
                gluings,
                peripheral_curves: PeripheralCurves::default(),
            });
        }
        Ok(Self { tets })
    }

    /// Gluing table describing this triangulation.
    pub fn to_table(&self) -> GluingTable {
        GluingTable {
            tetrahedra: self
                .tets
                .iter()
                .map(|t| TetGluingRow {
                    orientation: t.orientation,
                    neighbors: t.gluings.map(|g| g.neighbor.get()),
                    perms: t.gluings.map(|g| g.perm),
                })
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tets.is_empty()
    }

    pub fn tet_ids(&self) -> impl Iterator<Item = TetId> + '_ {
        (0..self.tets.len() as u32).map(TetId)
    }

    pub fn tetrahedra(&self) -> impl Iterator<Item = (TetId, &Tetrahedron)> + '_ {
        self.tets.iter().enumerate().map(|(i, t)| (TetId(i as u32), t))
    }

    pub fn get(&self, id: TetId) -> Option<&Tetrahedron> {
        self.tets.get(id.index())
    }

    /// Returns an error rather than `None` for an unknown id.
    pub fn tet(&self, id: TetId) -> Result<&Tetrahedron, CuspError> {
        self.tets.get(id.index()).ok_or(CuspError::TetOutOfRange {
            tet: id,
            len: self.tets.len(),
        })
    }

    pub fn tet_mut(&mut self, id: TetId) -> Result<&mut Tetrahedron, CuspError> {
        let len = self.tets.len();
        self.tets
            .get_mut(id.index())
            .ok_or(CuspError::TetOutOfRange { tet: id, len })
    }

    #[inline]
    pub fn neighbor(&self, id: TetId, face: Face) -> TetId {
        self[id].neighbor(face)
    }

    #[inline]
    pub fn gluing(&self, id: TetId, face: Face) -> Gluing {
        self[id].gluing(face)
    }

    /// Face of the neighbor across `face` that `face` is glued to.
    #[inline]
    pub fn glued_face(&self, id: TetId, face: Face) -> Face {
        self[id].gluing(face).glued_face(face)
    }

    /// Zero both curve sheets on every tetrahedron.
    pub fn clear_peripheral_curves(&mut self) {
        for t in &mut self.tets {
            t.peripheral_curves.clear();
        }
    }

    pub(crate) fn raw_tets(&self) -> &[Tetrahedron] {
        &self.tets
    }
}

impl Index<TetId> for Triangulation {
    type Output = Tetrahedron;

    fn index(&self, id: TetId) -> &Tetrahedron {
        &self.tets[id.index()]
    }
}

impl IndexMut<TetId> for Triangulation {
    fn index_mut(&mut self, id: TetId) -> &mut Tetrahedron {
        &mut self.tets[id.index()]
    }
}

impl TryFrom<GluingTable> for Triangulation {
    type Error = CuspError;

    fn try_from(table: GluingTable) -> Result<Self, Self::Error> {
        Triangulation::from_table(table)
    }
}

impl From<Triangulation> for GluingTable {
    fn from(tri: Triangulation) -> Self {
        tri.to_table()
    }
}
