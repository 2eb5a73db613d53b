//! Incremental construction of a [`Triangulation`] by gluing faces pairwise.

use crate::cusp_error::{CuspError, Malformation};
use crate::topology::orientation::{Handedness, Perm4};
use crate::topology::simplex::Face;
use crate::topology::triangulation::{GluingTable, TetGluingRow, TetId, Triangulation};
use crate::topology::validation::GluingValidationOptions;

/// Collects face gluings for a fixed number of tetrahedra.
///
/// [`glue`](Self::glue) records both sides of a gluing at once, so tables
/// built only through it are symmetric by construction.
#[derive(Clone, Debug)]
pub struct TriangulationBuilder {
    orientation: Vec<Handedness>,
    gluings: Vec<[Option<(TetId, Perm4)>; 4]>,
}

impl TriangulationBuilder {
    pub fn new(num_tets: usize) -> Self {
        Self {
            orientation: vec![Handedness::Right; num_tets],
            gluings: vec![[None; 4]; num_tets],
        }
    }

    pub fn len(&self) -> usize {
        self.gluings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gluings.is_empty()
    }

    fn check(&self, tet: TetId) -> Result<(), CuspError> {
        if tet.index() < self.gluings.len() {
            Ok(())
        } else {
            Err(CuspError::TetOutOfRange {
                tet,
                len: self.gluings.len(),
            })
        }
    }

    pub fn set_orientation(&mut self, tet: TetId, h: Handedness) -> Result<&mut Self, CuspError> {
        self.check(tet)?;
        self.orientation[tet.index()] = h;
        Ok(self)
    }

    /// Glue `face` of `a` to face `perm(face)` of `b`, and the reverse.
    pub fn glue(
        &mut self,
        a: TetId,
        face: Face,
        b: TetId,
        perm: Perm4,
    ) -> Result<&mut Self, CuspError> {
        self.check(a)?;
        self.check(b)?;
        if !perm.is_valid() {
            return Err(Malformation::InvalidPermutation { tet: a, face }.into());
        }
        let other = perm.face_image(face);
        if a == b && other == face {
            return Err(Malformation::SelfGluedFace { tet: a, face }.into());
        }
        if self.gluings[a.index()][face.index()].is_some() {
            return Err(CuspError::FaceAlreadyGlued { tet: a, face });
        }
        if self.gluings[b.index()][other.index()].is_some() {
            return Err(CuspError::FaceAlreadyGlued {
                tet: b,
                face: other,
            });
        }
        self.gluings[a.index()][face.index()] = Some((b, perm));
        self.gluings[b.index()][other.index()] = Some((a, perm.invert()));
        Ok(self)
    }

    /// Glue every listed pair across the same face label with the identity map.
    pub fn glue_matching(&mut self, face: Face, pairs: &[(u32, u32)]) -> Result<&mut Self, CuspError> {
        for &(a, b) in pairs {
            self.glue(TetId::new(a), face, TetId::new(b), Perm4::IDENTITY)?;
        }
        Ok(self)
    }

    /// Snapshot as a gluing table; fails if any face is still unglued.
    pub fn to_table(&self) -> Result<GluingTable, CuspError> {
        let mut tetrahedra = Vec::with_capacity(self.gluings.len());
        for (i, faces) in self.gluings.iter().enumerate() {
            let tet = TetId::new(i as u32);
            let mut neighbors = [0u32; 4];
            let mut perms = [Perm4::IDENTITY; 4];
            for face in Face::ALL {
                let (nb, perm) = faces[face.index()]
                    .ok_or(Malformation::UngluedFace { tet, face })?;
                neighbors[face.index()] = nb.get();
                perms[face.index()] = perm;
            }
            tetrahedra.push(TetGluingRow {
                orientation: self.orientation[i],
                neighbors,
                perms,
            });
        }
        Ok(GluingTable { tetrahedra })
    }

    /// Build with the default gluing validation.
    pub fn build(&self) -> Result<Triangulation, CuspError> {
        Triangulation::from_table(self.to_table()?)
    }

    pub fn build_with(&self, options: GluingValidationOptions) -> Result<Triangulation, CuspError> {
        Triangulation::from_table_with(self.to_table()?, options)
    }

    /// Skip gluing validation. Every face must still be glued.
    pub fn build_unchecked(&self) -> Result<Triangulation, CuspError> {
        Triangulation::from_table_unchecked(self.to_table()?)
    }
}
